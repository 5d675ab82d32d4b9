use pretty_assertions::assert_eq;
use xq_lexer::{Dialect, Extensions, Lexer, State, TokenKind, XQueryVersion};

use super::*;

fn units(source: &str) -> Vec<u16> {
    source.encode_utf16().collect()
}

fn dump(source: &str, dialect: Dialect) -> Dump {
    let units = units(source);
    Dump::lex(&units, 0, units.len(), State::INITIAL, dialect).unwrap()
}

#[test]
fn rows_carry_kind_offsets_and_text() {
    let dump = dump("map(1)", Dialect::default());
    let rows: Vec<_> = dump
        .rows()
        .iter()
        .map(|r| (r.kind.as_str(), r.start, r.end, r.text.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("KMap", 0, 3, "map"),
            ("ParenthesisOpen", 3, 4, "("),
            ("IntegerLiteral", 4, 5, "1"),
            ("ParenthesisClose", 5, 6, ")"),
        ]
    );
}

#[test]
fn keyword_verdict_follows_dialect() {
    let v30 = dump("map", Dialect::new(XQueryVersion::V3_0, Extensions::empty()));
    let v31 = dump("map", Dialect::new(XQueryVersion::V3_1, Extensions::empty()));
    let expected = |accepted| {
        Some(KeywordInfo {
            category: "reserved since 3.1".to_owned(),
            accepted,
        })
    };
    assert_eq!(v30.rows()[0].keyword, expected(true));
    assert_eq!(v31.rows()[0].keyword, expected(false));
}

#[test]
fn vendor_keyword_names_its_extension() {
    let plain = dump("binary", Dialect::default());
    let marklogic = dump("binary", Dialect::default().with_extensions(Extensions::MARKLOGIC));
    let info = plain.rows()[0].keyword.clone().unwrap();
    assert_eq!(info.category, "reserved with marklogic");
    assert!(info.accepted);
    assert!(!marklogic.rows()[0].keyword.as_ref().unwrap().accepted);
}

#[test]
fn identifiers_have_no_keyword_info() {
    let dump = dump("fooBar", Dialect::default());
    assert_eq!(dump.rows()[0].kind, "NcName");
    assert_eq!(dump.rows()[0].keyword, None);
}

#[test]
fn states_replay_through_the_lexer() {
    let source = "<a href=\"{1}\"/>";
    let units = units(source);
    let dump = dump(source, Dialect::default());
    let row = dump.rows().iter().find(|r| r.kind == "BlockOpen").unwrap();
    let raw = u64::from_str_radix(row.state.trim_start_matches("0x"), 16).unwrap();
    let mut lexer =
        Lexer::with_range(&units, row.start, units.len(), State::from_raw(raw)).unwrap();
    assert_eq!(lexer.advance(), Some(TokenKind::BlockOpen));
    assert_eq!(lexer.advance(), Some(TokenKind::IntegerLiteral));
    assert_eq!(lexer.advance(), Some(TokenKind::BlockClose));
}

#[test]
fn text_rendering_marks_rejected_keywords() {
    let text = dump("map", Dialect::default()).to_text();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("KMap"), "{text}");
    assert!(text.contains("\"map\""), "{text}");
    assert!(text.ends_with("[reserved since 3.1, rejected]\n"), "{text}");
}

#[test]
fn json_rendering_omits_absent_keyword_info() {
    let json = dump("1 map", Dialect::default()).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["kind"], "IntegerLiteral");
    assert_eq!(rows[0]["state"], "0x0");
    assert!(rows[0].get("keyword").is_none());
    assert_eq!(rows[2]["keyword"]["accepted"], false);
}

#[test]
fn invalid_range_is_reported() {
    let units = units("1 + 2");
    let err = Dump::lex(&units, 4, 2, State::INITIAL, Dialect::default()).unwrap_err();
    assert_eq!(err.to_string(), "lexer range start 4 exceeds end 2");
}
