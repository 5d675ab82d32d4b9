use super::*;
use crate::END_OF_BUFFER;

fn cp(c: char) -> u32 {
    u32::from(c)
}

#[test]
fn whitespace_is_the_four_xml_characters() {
    for c in [' ', '\t', '\r', '\n'] {
        assert!(is_whitespace(cp(c)), "{c:?}");
    }
    for c in ['\u{A0}', '\u{2003}', '\u{B}', 'a'] {
        assert!(!is_whitespace(cp(c)), "{c:?}");
    }
}

#[test]
fn ascii_name_start() {
    assert!(is_name_start_char(cp('a')));
    assert!(is_name_start_char(cp('Z')));
    assert!(is_name_start_char(cp('_')));
    assert!(!is_name_start_char(cp('1')));
    assert!(!is_name_start_char(cp('-')));
    assert!(!is_name_start_char(cp('.')));
    assert!(!is_name_start_char(cp(':')));
}

#[test]
fn ascii_name_char() {
    for c in ['a', 'Z', '_', '0', '9', '-', '.'] {
        assert!(is_name_char(cp(c)), "{c:?}");
    }
    for c in [':', ' ', '$', '{', '('] {
        assert!(!is_name_char(cp(c)), "{c:?}");
    }
}

#[test]
fn non_ascii_name_start() {
    assert!(is_name_start_char(cp('\u{E9}')));
    assert!(is_name_start_char(cp('\u{3B1}')));
    assert!(is_name_start_char(cp('\u{4E2D}')));
    assert!(is_name_start_char(0x1_0000));
    assert!(!is_name_start_char(cp('\u{D7}')));
    assert!(!is_name_start_char(cp('\u{F7}')));
    assert!(!is_name_start_char(cp('\u{B7}')));
    assert!(!is_name_start_char(0xF_0000));
}

#[test]
fn combining_marks_continue_but_do_not_start_names() {
    for c in ['\u{B7}', '\u{300}', '\u{36F}', '\u{203F}', '\u{2040}'] {
        assert!(is_name_char(cp(c)), "{c:?}");
        assert!(!is_name_start_char(cp(c)), "{c:?}");
    }
}

#[test]
fn surrogates_and_end_of_buffer_are_not_name_chars() {
    assert!(!is_name_start_char(0xD800));
    assert!(!is_name_char(0xDFFF));
    assert!(!is_name_char(END_OF_BUFFER));
    assert!(!is_whitespace(END_OF_BUFFER));
    assert!(!is_digit(END_OF_BUFFER));
}

#[test]
fn digits() {
    for c in '0'..='9' {
        assert!(is_digit(cp(c)));
        assert!(is_hex_digit(cp(c)));
    }
    for c in ['a', 'f', 'A', 'F'] {
        assert!(!is_digit(cp(c)));
        assert!(is_hex_digit(cp(c)));
    }
    assert!(!is_hex_digit(cp('g')));
    assert!(!is_digit(cp('\u{660}')));
}
