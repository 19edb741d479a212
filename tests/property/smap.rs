use proptest::prelude::*;
use smap_verifier::smap::{decode, decode_and_validate};
use smap_verifier::ErrorKind;

use crate::utils::{file_name, line_entry, render_smap, stratum_id};

proptest! {
    #[test]
    fn test_non_smap_prefix_is_syntax_error(text in "\\PC*") {
        prop_assume!(!text.starts_with("SMAP"));
        let err = decode_and_validate(&text, false, "gen.smap").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_arbitrary_text_never_panics(body in "[*SFLEVOC0-9#,: \\n.a-z]{0,200}") {
        let text = format!("SMAP\nGen.java\nJSP\n{}", body);
        let _ = decode_and_validate(&text, false, "gen.smap");
        let _ = decode_and_validate(&text, true, "gen.smap");
    }

    #[test]
    fn test_generated_smaps_verify(
        stratum in stratum_id(),
        files in prop::collection::vec(file_name(), 1..5),
        lines in prop::collection::vec(line_entry(), 0..20),
    ) {
        let text = render_smap(&stratum, &files, &lines);
        let smap = decode_and_validate(&text, false, "gen.smap").unwrap();
        prop_assert_eq!(smap.stratum_count(), 1);
        prop_assert_eq!(smap.files.len(), files.len());
        prop_assert_eq!(smap.lines.len(), lines.len());
    }

    #[test]
    fn test_decoded_mappings_keep_range_invariants(
        lines in prop::collection::vec(line_entry(), 1..20),
    ) {
        let text = render_smap("JSP", &["a.jsp".to_string()], &lines);
        let smap = decode(&text, false).unwrap();
        for (mapping, (input_start, repeat, output_start, increment)) in smap.lines.iter().zip(&lines) {
            prop_assert!(mapping.input_start >= 1);
            prop_assert!(mapping.output_start >= 1);
            prop_assert!(mapping.output_line_increment >= 1);
            prop_assert_eq!(mapping.input_end, input_start + repeat - 1);
            prop_assert_eq!(mapping.output_end, output_start + repeat * increment - 1);
            prop_assert!(mapping.covers_output(mapping.output_end));
        }
    }

    #[test]
    fn test_duplicate_file_ids_fail_rule_seven(name in file_name(), other in file_name()) {
        let text = format!(
            "SMAP\nGen.java\nJSP\n*S JSP\n*F\n1 {}\n1 {}\n*L\n1:1\n*E\n",
            name, other
        );
        let err = decode_and_validate(&text, false, "gen.smap").unwrap_err();
        prop_assert_eq!(err.rule_number(), Some(7));
    }

    #[test]
    fn test_translate_stays_inside_input_range(
        lines in prop::collection::vec(line_entry(), 1..10),
        probe in 1u32..20_000,
    ) {
        let text = render_smap("JSP", &["a.jsp".to_string()], &lines);
        let smap = decode_and_validate(&text, false, "gen.smap").unwrap();
        if let Some(pos) = smap.translate(None, probe) {
            let covered = smap.lines.iter().any(|m| {
                m.covers_output(probe) && (m.input_start..=m.input_end).contains(&pos.line)
            });
            prop_assert!(covered);
        }
    }
}
