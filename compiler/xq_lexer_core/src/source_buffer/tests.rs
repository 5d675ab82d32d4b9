use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.units().is_empty());
    assert!(buf.encoding_issues().is_empty());
    assert!(buf.cursor().is_eof());
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("hello");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.text(0, 5), "hello");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn astral_code_point_takes_two_units() {
    let buf = SourceBuffer::new("a\u{1F600}b");
    assert_eq!(buf.len(), 4);
    assert_eq!(buf.text(1, 3), "\u{1F600}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn cursor_range_is_bounded() {
    let buf = SourceBuffer::new("let $x");
    let cursor = buf.cursor_range(4, 6);
    assert_eq!(cursor.start(), 4);
    assert_eq!(cursor.buffer_end(), 6);
    assert_eq!(cursor.current_char(), Some('$'));
}

// === Encoding Issues ===

#[test]
fn byte_order_mark_is_reported() {
    let buf = SourceBuffer::new("\u{FEFF}xquery version \"3.1\";");
    assert_eq!(
        buf.encoding_issues(),
        &[EncodingIssue {
            kind: EncodingIssueKind::ByteOrderMark,
            pos: 0,
            len: 1,
        }]
    );
}

#[test]
fn byte_order_mark_after_start_is_not_reported() {
    let buf = SourceBuffer::new("x\u{FEFF}");
    assert!(buf.encoding_issues().is_empty());
}

#[test]
fn unpaired_surrogates_are_reported() {
    let buf = SourceBuffer::from_utf16(vec![0x61, 0xD800, 0x62, 0xDC00, 0xD834, 0xDD1E]);
    let positions: Vec<usize> = buf.encoding_issues().iter().map(|i| i.pos).collect();
    assert_eq!(positions, vec![1, 3]);
    assert!(buf
        .encoding_issues()
        .iter()
        .all(|i| i.kind == EncodingIssueKind::UnpairedSurrogate));
}

#[test]
fn trailing_high_surrogate_is_reported() {
    let buf = SourceBuffer::from_utf16(vec![0x61, 0xDBFF]);
    assert_eq!(buf.encoding_issues().len(), 1);
    assert_eq!(buf.encoding_issues()[0].pos, 1);
}

#[test]
fn text_is_lossy_for_unpaired_surrogates() {
    let buf = SourceBuffer::from_utf16(vec![0xD800]);
    assert_eq!(buf.text(0, 1), "\u{FFFD}");
}
