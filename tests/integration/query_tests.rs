//! Translating generated lines through a verified SMAP.

use crate::fixtures::MULTI_STRATUM_SMAP;
use smap_verifier::smap::{decode_and_validate, SourcePosition};

#[test]
fn test_translate_default_stratum() {
    let smap = decode_and_validate(MULTI_STRATUM_SMAP, false, "index.smap").unwrap();
    assert_eq!(
        smap.translate(None, 22),
        Some(SourcePosition {
            stratum: "JSP".to_string(),
            source_name: "index.jsp".to_string(),
            source_path: Some("web/index.jsp".to_string()),
            line: 3,
        })
    );
}

#[test]
fn test_translate_with_increment_and_file_switch() {
    let smap = decode_and_validate(MULTI_STRATUM_SMAP, false, "index.smap").unwrap();
    let pos = smap.translate(Some("JSP"), 44).unwrap();
    assert_eq!(pos.source_name, "header.jsp");
    assert_eq!(pos.line, 8);
    let back = smap.translate(Some("JSP"), 60).unwrap();
    assert_eq!(back.source_name, "index.jsp");
    assert_eq!(back.line, 10);
}

#[test]
fn test_translate_other_stratum() {
    let smap = decode_and_validate(MULTI_STRATUM_SMAP, false, "index.smap").unwrap();
    let pos = smap.translate(Some("Tpl"), 59).unwrap();
    assert_eq!(pos.source_name, "index.tpl");
    assert_eq!(pos.line, 1);
    assert!(smap.translate(Some("Tpl"), 60).is_none());
}

#[test]
fn test_unmapped_line() {
    let smap = decode_and_validate(MULTI_STRATUM_SMAP, false, "index.smap").unwrap();
    assert!(smap.translate(Some("JSP"), 30).is_none());
}
