use mbox_extract::{
    first_sentence, is_clear_text, last_sentence, remove_attachments_and_rtf, strip_non_ascii,
    trim,
};

#[test]
fn test_clear_text_accepts_printable_ascii_and_whitespace() {
    assert!(is_clear_text("Hello, world! 123\t\r\n"));
    assert!(is_clear_text(""));
    assert!(is_clear_text(" ~")); // both ends of the printable range
}

#[test]
fn test_clear_text_rejects_binary_and_non_ascii() {
    assert!(!is_clear_text("caf\u{e9}"));
    assert!(!is_clear_text("null\u{0}byte"));
    assert!(!is_clear_text("escape\u{1b}[0m"));
    assert!(!is_clear_text("\u{7f}"));
}

#[test]
fn test_strip_non_ascii_invariant() {
    let inputs = [
        "plain ascii survives",
        "caf\u{e9} r\u{e9}sum\u{e9}",
        "\u{4f60}\u{597d} mixed \u{1f600} content",
        "bell\u{7}and\u{0}null",
        "",
    ];

    for input in inputs {
        let stripped = strip_non_ascii(input);
        assert!(is_clear_text(&stripped), "failed for {input:?}");
        // Idempotence: a second pass changes nothing.
        assert_eq!(strip_non_ascii(&stripped), stripped);
    }
}

#[test]
fn test_strip_non_ascii_deletes_rather_than_replaces() {
    assert_eq!(strip_non_ascii("a\u{e9}b"), "ab");
    assert_eq!(strip_non_ascii("\u{4f60}\u{597d}"), "");
}

#[test]
fn test_trim_leaves_interior_whitespace() {
    assert_eq!(trim("  \n hello   world \r\n"), "hello   world");
    assert_eq!(trim(""), "");
    assert_eq!(trim("   "), "");
}

#[test]
fn test_first_sentence_skips_short_segments() {
    assert_eq!(
        first_sentence("Hi. This is a longer sentence! Bye."),
        "This is a longer sentence"
    );
}

#[test]
fn test_first_sentence_empty_when_nothing_qualifies() {
    assert_eq!(first_sentence("Hi. Ok! No?"), "");
    assert_eq!(first_sentence(""), "");
}

#[test]
fn test_last_sentence_scans_from_the_end() {
    assert_eq!(
        last_sentence("The opening thought here. A closing remark instead! Ok."),
        "A closing remark instead"
    );
    assert_eq!(last_sentence("Only one real sentence. Ok."), "Only one real sentence");
}

#[test]
fn test_sentence_with_no_terminator_counts_as_one_segment() {
    assert_eq!(
        first_sentence("no terminator at all in this text"),
        "no terminator at all in this text"
    );
}

#[test]
fn test_plain_text_body_is_untouched() {
    let body = "Dear team,\n\nThe meeting moved to Thursday.\nPlease update your calendars.";
    assert_eq!(remove_attachments_and_rtf(body), body);
}

#[test]
fn test_rtf_section_is_removed() {
    let body = "Hello before.\n\
                \n\
                Content-Type: application/rtf\n\
                Content-Transfer-Encoding: base64\n\
                e1xydGYxIGJpbmFyeSBibG9ifQ==\n\
                \n\
                Hello after.";

    assert_eq!(
        remove_attachments_and_rtf(body),
        "Hello before.\n\nHello after."
    );
}

#[test]
fn test_attachment_declaration_is_removed() {
    let body = "See the attached report.\n\
                \n\
                Content-Disposition: attachment; filename=\"report.pdf\"\n\
                JVBERi0xLjQKJcOkw7zDtsOf\n\
                \n\
                Let me know what you think.";

    assert_eq!(
        remove_attachments_and_rtf(body),
        "See the attached report.\n\nLet me know what you think."
    );
}

#[test]
fn test_multipart_mixed_plumbing_is_removed() {
    let body = "Content-Type: multipart/mixed; boundary=\"XYZ\"\n\
                \n\
                --XYZ\n\
                Content-Type: text/plain\n\
                \n\
                The actual readable message text.\n\
                --XYZ--";

    assert_eq!(
        remove_attachments_and_rtf(body),
        "\nThe actual readable message text."
    );
}

#[test]
fn test_skip_region_ends_at_ordinary_header_line() {
    let body = "Content-Type: application/rtf\n\
                X-Custom-Note: survives the purge\n\
                trailing text";

    assert_eq!(
        remove_attachments_and_rtf(body),
        "X-Custom-Note: survives the purge\ntrailing text"
    );
}

#[test]
fn test_marker_matching_is_case_insensitive() {
    let body = "keep this\n\
                CONTENT-TYPE: APPLICATION/RTF\n\
                binary goo\n\
                \n\
                and this";

    assert_eq!(remove_attachments_and_rtf(body), "keep this\n\nand this");
}
