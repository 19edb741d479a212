#![no_main]

use libfuzzer_sys::fuzz_target;
use smap_verifier::smap;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = smap::decode_and_validate(&text, false, "fuzz.smap");
    let _ = smap::decode_and_validate(&text, true, "fuzz.smap");
});
