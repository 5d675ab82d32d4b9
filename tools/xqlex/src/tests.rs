use clap::Parser;
use pretty_assertions::assert_eq;
use xq_lexer::{Dialect, Extensions, State, XQueryVersion};

use super::{parse_state, Cli, Format};

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["xqlex", "query.xq"]).unwrap();
    assert_eq!(cli.from, 0);
    assert_eq!(cli.to, None);
    assert_eq!(cli.state, State::INITIAL);
    assert_eq!(cli.format, Format::Text);
    assert_eq!(cli.dialect(), Dialect::default());
}

#[test]
fn dialect_flags_combine() {
    let cli = Cli::try_parse_from([
        "xqlex",
        "--text",
        "1",
        "--xquery-version",
        "1.0",
        "--extension",
        "update",
        "--extension",
        "saxon",
    ])
    .unwrap();
    assert_eq!(
        cli.dialect(),
        Dialect::new(XQueryVersion::V1_0, Extensions::UPDATE | Extensions::SAXON)
    );
}

#[test]
fn unknown_dialect_names_are_rejected() {
    assert!(Cli::try_parse_from(["xqlex", "-t", "1", "--xquery-version", "2.0"]).is_err());
    assert!(Cli::try_parse_from(["xqlex", "-t", "1", "--extension", "exist"]).is_err());
}

#[test]
fn input_is_required_and_exclusive() {
    assert!(Cli::try_parse_from(["xqlex"]).is_err());
    assert!(Cli::try_parse_from(["xqlex", "query.xq", "--text", "1"]).is_err());
}

#[test]
fn state_accepts_decimal_and_hex() {
    assert_eq!(parse_state("42").unwrap(), State::from_raw(42));
    assert_eq!(parse_state("0x2a").unwrap(), State::from_raw(42));
    assert_eq!(parse_state("0X2A").unwrap(), State::from_raw(42));
    assert!(parse_state("0xzz").is_err());
}

#[test]
fn run_dumps_inline_text() {
    let cli = Cli::try_parse_from(["xqlex", "-t", "1e", "--format", "json"]).unwrap();
    let json = super::run(&cli).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[1]["kind"], "PartialDoubleLiteralExponent");
}

#[test]
fn run_reports_undecodable_state() {
    let cli = Cli::try_parse_from(["xqlex", "-t", "1", "--state", "0x1f"]).unwrap();
    let err = super::run(&cli).unwrap_err();
    assert!(err.to_string().starts_with("invalid initial lexer state"), "{err}");
}
