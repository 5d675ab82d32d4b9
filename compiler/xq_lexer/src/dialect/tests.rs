use super::*;

#[test]
fn versions_are_ordered() {
    assert!(XQueryVersion::V1_0 < XQueryVersion::V3_0);
    assert!(XQueryVersion::V3_0 < XQueryVersion::V3_1);
}

#[test]
fn version_parses_and_displays() {
    for version in XQueryVersion::ALL {
        assert_eq!(version.to_string().parse::<XQueryVersion>(), Ok(version));
    }
    assert_eq!(
        "2.0".parse::<XQueryVersion>(),
        Err(ParseDialectError::UnknownVersion("2.0".to_owned()))
    );
}

#[test]
fn default_dialect_is_plain_3_1() {
    let dialect = Dialect::default();
    assert_eq!(dialect.version, XQueryVersion::V3_1);
    assert!(dialect.extensions.is_empty());
}

#[test]
fn extensions_parse_by_name() {
    assert_eq!(Extensions::parse_one("marklogic"), Ok(Extensions::MARKLOGIC));
    assert_eq!(Extensions::parse_one("scripting"), Ok(Extensions::SCRIPTING));
    assert!(matches!(
        Extensions::parse_one("MarkLogic"),
        Err(ParseDialectError::UnknownExtension(_))
    ));
}

#[test]
fn with_extensions_accumulates() {
    let dialect = Dialect::new(XQueryVersion::V3_0, Extensions::UPDATE)
        .with_extensions(Extensions::SAXON);
    assert!(dialect.extensions.contains(Extensions::UPDATE | Extensions::SAXON));
    assert!(!dialect.extensions.contains(Extensions::BASEX));
}

#[test]
fn error_messages() {
    assert_eq!(
        ParseDialectError::UnknownExtension("foo".to_owned()).to_string(),
        "unknown extension `foo`"
    );
}
