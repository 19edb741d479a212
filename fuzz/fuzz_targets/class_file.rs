#![no_main]

use libfuzzer_sys::fuzz_target;
use smap_verifier::{verify, InputKind};

fuzz_target!(|data: &[u8]| {
    let _ = verify(data, InputKind::ClassFile, "fuzz.class");
});
