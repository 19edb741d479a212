//! Class file attribute extraction
//!
//! Walks just enough of the JVM class file layout to find one named
//! top-level attribute. The constant pool is scanned once to learn the pool
//! index of the attribute name, fields and methods are skipped, and the
//! class attributes are searched for that index. All integers are
//! big-endian and the cursor only moves forward.

use miette::Diagnostic;
use thiserror::Error;

/// Magic number at the start of every class file.
pub const CLASS_FILE_MAGIC: u32 = 0xCAFE_BABE;

/// Attribute carrying the SMAP of a compiled class.
pub const SOURCE_DEBUG_EXTENSION: &str = "SourceDebugExtension";

/// Errors raised while reading a class file
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ClassFileError {
    #[error("class file not in Java Virtual Machine class file format - bad value of magic: 0x{0:x}")]
    #[diagnostic(code(class_file::bad_magic))]
    BadMagic(u32),

    #[error("bad class file - unexpected constant pool tag: {tag} (entry {index})")]
    #[diagnostic(code(class_file::bad_constant_pool_tag))]
    UnexpectedConstantPoolTag { tag: u8, index: u16 },

    #[error("No {0} attribute in this class file (attribute name not defined)")]
    #[diagnostic(code(class_file::attribute_name_missing))]
    AttributeNameNotDefined(String),

    #[error("No {0} attribute in this class file")]
    #[diagnostic(code(class_file::attribute_missing))]
    AttributeNotFound(String),

    #[error("truncated class file - {needed} more bytes expected at offset {offset}")]
    #[diagnostic(code(class_file::truncated))]
    Truncated { offset: usize, needed: usize },
}

/// Forward-only big-endian cursor over class file bytes.
struct ClassFileReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ClassFileReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn read(&mut self, count: usize) -> Result<&'a [u8], ClassFileError> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(ClassFileError::Truncated {
                offset: self.pos,
                needed: count,
            })?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn skip(&mut self, count: usize) -> Result<(), ClassFileError> {
        self.read(count).map(|_| ())
    }

    fn read_u1(&mut self) -> Result<u8, ClassFileError> {
        Ok(self.read(1)?[0])
    }

    fn read_u2(&mut self) -> Result<u16, ClassFileError> {
        let b = self.read(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn read_u4(&mut self) -> Result<u32, ClassFileError> {
        let b = self.read(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Scan the constant pool, returning the index of the UTF-8 entry equal
    /// to `name` (0 when absent).
    fn read_constant_pool(&mut self, name: &str) -> Result<u16, ClassFileError> {
        let mut name_index = 0;
        let count = self.read_u2()?;
        // entry 0 is not stored in the class file
        let mut index: u16 = 1;
        while index < count {
            let tag = self.read_u1()?;
            match tag {
                // Class, String, MethodType, Module, Package
                7 | 8 | 16 | 19 | 20 => self.skip(2)?,
                // MethodHandle
                15 => self.skip(3)?,
                // Integer, Float, Fieldref, Methodref, InterfaceMethodref,
                // NameAndType, Dynamic, InvokeDynamic
                3 | 4 | 9 | 10 | 11 | 12 | 17 | 18 => self.skip(4)?,
                // Long, Double: eight bytes and two pool slots
                5 | 6 => {
                    self.skip(8)?;
                    index = index.saturating_add(1);
                }
                // Utf8
                1 => {
                    let len = self.read_u2()? as usize;
                    if self.read(len)? == name.as_bytes() {
                        name_index = index;
                    }
                }
                _ => return Err(ClassFileError::UnexpectedConstantPoolTag { tag, index }),
            }
            index = index.saturating_add(1);
        }
        Ok(name_index)
    }

    fn skip_attribute(&mut self) -> Result<(), ClassFileError> {
        self.skip(2)?; // name
        let len = self.read_u4()? as usize;
        self.skip(len)
    }

    /// Skip a fields or methods table.
    fn skip_members(&mut self) -> Result<(), ClassFileError> {
        let count = self.read_u2()?;
        for _ in 0..count {
            self.skip(6)?; // access, name, descriptor
            let attribute_count = self.read_u2()?;
            for _ in 0..attribute_count {
                self.skip_attribute()?;
            }
        }
        Ok(())
    }
}

/// Extract the value of the top-level class attribute called `name`.
pub fn extract_attribute<'a>(bytes: &'a [u8], name: &str) -> Result<&'a [u8], ClassFileError> {
    let mut reader = ClassFileReader::new(bytes);

    let magic = reader.read_u4()?;
    if magic != CLASS_FILE_MAGIC {
        return Err(ClassFileError::BadMagic(magic));
    }
    reader.skip(2 + 2)?; // minor, major version

    let name_index = reader.read_constant_pool(name)?;
    if name_index == 0 {
        return Err(ClassFileError::AttributeNameNotDefined(name.to_string()));
    }
    tracing::debug!(attribute = name, index = name_index, "Attribute name found in constant pool");

    reader.skip(2 + 2 + 2)?; // access, this, super
    let interface_count = reader.read_u2()? as usize;
    reader.skip(interface_count * 2)?;
    reader.skip_members()?; // fields
    reader.skip_members()?; // methods

    let attribute_count = reader.read_u2()?;
    for _ in 0..attribute_count {
        let attribute_name = reader.read_u2()?;
        let len = reader.read_u4()? as usize;
        if attribute_name == name_index {
            return reader.read(len);
        }
        reader.skip(len)?;
    }

    Err(ClassFileError::AttributeNotFound(name.to_string()))
}

/// Extract the SMAP text stored in the `SourceDebugExtension` attribute.
///
/// The payload is decoded as UTF-8; invalid sequences are replaced rather
/// than rejected so that grammar checks still report where the text breaks.
pub fn extract_source_debug_extension(bytes: &[u8]) -> Result<String, ClassFileError> {
    let payload = extract_attribute(bytes, SOURCE_DEBUG_EXTENSION)?;
    Ok(String::from_utf8_lossy(payload).into_owned())
}
