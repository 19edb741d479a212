pub mod class_file;
pub mod input;

pub use class_file::{
    extract_attribute, extract_source_debug_extension, ClassFileError, SOURCE_DEBUG_EXTENSION,
};
pub use input::{read_input, DEFAULT_MAX_INPUT_BYTES};
