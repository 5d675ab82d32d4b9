//! Keyword/identifier classification.
//!
//! One static table maps every keyword spelling to its token kind and to
//! a [`KeywordCategory`]. The lexer uses the kind to tag NCNames; the
//! conformance layer uses the category, through [`is_accepted`], to decide
//! whether a spelling may name a function under the selected dialect.
//!
//! # Lookup
//!
//! The table is sorted by spelling (byte order), so lookups are a binary
//! search. Identifiers that cannot be keywords (too long, or not ASCII)
//! are rejected before the search.

use crate::dialect::{Dialect, Extensions, XQueryVersion};
use crate::token::TokenKind;

/// How a spelling behaves as a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Not a keyword spelling at all.
    Identifier,
    /// Meaningful only in specific grammar positions; a name elsewhere.
    Keyword,
    /// Never usable as an unprefixed function name.
    Reserved,
    /// Reserved once the given language version (or later) is selected.
    ReservedSince(XQueryVersion),
    /// Reserved while any of the given extensions is enabled.
    ReservedWith(Extensions),
}

/// Longest keyword spelling (`processing-instruction`).
const MAX_KEYWORD_LEN: usize = 22;

/// Sorted keyword table: spelling, token kind, category.
static KEYWORDS: [(&str, TokenKind, KeywordCategory); 162] = [
    ("NaN", TokenKind::KNaN, KeywordCategory::Keyword),
    ("after", TokenKind::KAfter, KeywordCategory::Keyword),
    ("allowing", TokenKind::KAllowing, KeywordCategory::Keyword),
    ("ancestor", TokenKind::KAncestor, KeywordCategory::Keyword),
    ("ancestor-or-self", TokenKind::KAncestorOrSelf, KeywordCategory::Keyword),
    ("and", TokenKind::KAnd, KeywordCategory::Keyword),
    ("array", TokenKind::KArray, KeywordCategory::ReservedSince(XQueryVersion::V3_1)),
    ("array-node", TokenKind::KArrayNode, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("as", TokenKind::KAs, KeywordCategory::Keyword),
    ("ascending", TokenKind::KAscending, KeywordCategory::Keyword),
    ("assignable", TokenKind::KAssignable, KeywordCategory::Keyword),
    ("at", TokenKind::KAt, KeywordCategory::Keyword),
    ("attribute", TokenKind::KAttribute, KeywordCategory::Reserved),
    ("base-uri", TokenKind::KBaseUri, KeywordCategory::Keyword),
    ("before", TokenKind::KBefore, KeywordCategory::Keyword),
    ("binary", TokenKind::KBinary, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("boolean-node", TokenKind::KBooleanNode, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("boundary-space", TokenKind::KBoundarySpace, KeywordCategory::Keyword),
    ("by", TokenKind::KBy, KeywordCategory::Keyword),
    ("case", TokenKind::KCase, KeywordCategory::Keyword),
    ("cast", TokenKind::KCast, KeywordCategory::Keyword),
    ("castable", TokenKind::KCastable, KeywordCategory::Keyword),
    ("catch", TokenKind::KCatch, KeywordCategory::Keyword),
    ("child", TokenKind::KChild, KeywordCategory::Keyword),
    ("collation", TokenKind::KCollation, KeywordCategory::Keyword),
    ("comment", TokenKind::KComment, KeywordCategory::Reserved),
    ("construction", TokenKind::KConstruction, KeywordCategory::Keyword),
    ("context", TokenKind::KContext, KeywordCategory::Keyword),
    ("copy", TokenKind::KCopy, KeywordCategory::Keyword),
    ("copy-namespaces", TokenKind::KCopyNamespaces, KeywordCategory::Keyword),
    ("count", TokenKind::KCount, KeywordCategory::Keyword),
    ("decimal-format", TokenKind::KDecimalFormat, KeywordCategory::Keyword),
    ("decimal-separator", TokenKind::KDecimalSeparator, KeywordCategory::Keyword),
    ("declare", TokenKind::KDeclare, KeywordCategory::Keyword),
    ("default", TokenKind::KDefault, KeywordCategory::Keyword),
    ("delete", TokenKind::KDelete, KeywordCategory::Keyword),
    ("descendant", TokenKind::KDescendant, KeywordCategory::Keyword),
    ("descendant-or-self", TokenKind::KDescendantOrSelf, KeywordCategory::Keyword),
    ("descending", TokenKind::KDescending, KeywordCategory::Keyword),
    ("digit", TokenKind::KDigit, KeywordCategory::Keyword),
    ("div", TokenKind::KDiv, KeywordCategory::Keyword),
    ("document", TokenKind::KDocument, KeywordCategory::Keyword),
    ("document-node", TokenKind::KDocumentNode, KeywordCategory::Reserved),
    ("element", TokenKind::KElement, KeywordCategory::Reserved),
    ("else", TokenKind::KElse, KeywordCategory::Keyword),
    ("empty", TokenKind::KEmpty, KeywordCategory::Keyword),
    ("empty-sequence", TokenKind::KEmptySequence, KeywordCategory::Reserved),
    ("encoding", TokenKind::KEncoding, KeywordCategory::Keyword),
    ("end", TokenKind::KEnd, KeywordCategory::Keyword),
    ("enum", TokenKind::KEnum, KeywordCategory::ReservedWith(Extensions::SAXON)),
    ("eq", TokenKind::KEq, KeywordCategory::Keyword),
    ("every", TokenKind::KEvery, KeywordCategory::Keyword),
    ("except", TokenKind::KExcept, KeywordCategory::Keyword),
    ("exit", TokenKind::KExit, KeywordCategory::Keyword),
    ("exponent-separator", TokenKind::KExponentSeparator, KeywordCategory::Keyword),
    ("external", TokenKind::KExternal, KeywordCategory::Keyword),
    ("first", TokenKind::KFirst, KeywordCategory::Keyword),
    ("following", TokenKind::KFollowing, KeywordCategory::Keyword),
    ("following-sibling", TokenKind::KFollowingSibling, KeywordCategory::Keyword),
    ("for", TokenKind::KFor, KeywordCategory::Keyword),
    ("function", TokenKind::KFunction, KeywordCategory::ReservedSince(XQueryVersion::V3_0)),
    ("ge", TokenKind::KGe, KeywordCategory::Keyword),
    ("greatest", TokenKind::KGreatest, KeywordCategory::Keyword),
    ("group", TokenKind::KGroup, KeywordCategory::Keyword),
    ("grouping-separator", TokenKind::KGroupingSeparator, KeywordCategory::Keyword),
    ("gt", TokenKind::KGt, KeywordCategory::Keyword),
    ("idiv", TokenKind::KIdiv, KeywordCategory::Keyword),
    ("if", TokenKind::KIf, KeywordCategory::Reserved),
    ("import", TokenKind::KImport, KeywordCategory::Keyword),
    ("in", TokenKind::KIn, KeywordCategory::Keyword),
    ("infinity", TokenKind::KInfinity, KeywordCategory::Keyword),
    ("inherit", TokenKind::KInherit, KeywordCategory::Keyword),
    ("insert", TokenKind::KInsert, KeywordCategory::Keyword),
    ("instance", TokenKind::KInstance, KeywordCategory::Keyword),
    ("intersect", TokenKind::KIntersect, KeywordCategory::Keyword),
    ("into", TokenKind::KInto, KeywordCategory::Keyword),
    ("is", TokenKind::KIs, KeywordCategory::Keyword),
    ("item", TokenKind::KItem, KeywordCategory::Reserved),
    ("last", TokenKind::KLast, KeywordCategory::Keyword),
    ("lax", TokenKind::KLax, KeywordCategory::Keyword),
    ("le", TokenKind::KLe, KeywordCategory::Keyword),
    ("least", TokenKind::KLeast, KeywordCategory::Keyword),
    ("let", TokenKind::KLet, KeywordCategory::Keyword),
    ("lt", TokenKind::KLt, KeywordCategory::Keyword),
    ("map", TokenKind::KMap, KeywordCategory::ReservedSince(XQueryVersion::V3_1)),
    ("minus-sign", TokenKind::KMinusSign, KeywordCategory::Keyword),
    ("mod", TokenKind::KMod, KeywordCategory::Keyword),
    ("modify", TokenKind::KModify, KeywordCategory::Keyword),
    ("module", TokenKind::KModule, KeywordCategory::Keyword),
    ("namespace", TokenKind::KNamespace, KeywordCategory::Keyword),
    ("namespace-node", TokenKind::KNamespaceNode, KeywordCategory::ReservedSince(XQueryVersion::V3_0)),
    ("ne", TokenKind::KNe, KeywordCategory::Keyword),
    ("next", TokenKind::KNext, KeywordCategory::Keyword),
    ("no-inherit", TokenKind::KNoInherit, KeywordCategory::Keyword),
    ("no-preserve", TokenKind::KNoPreserve, KeywordCategory::Keyword),
    ("node", TokenKind::KNode, KeywordCategory::Reserved),
    ("nodes", TokenKind::KNodes, KeywordCategory::Keyword),
    ("null-node", TokenKind::KNullNode, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("number-node", TokenKind::KNumberNode, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("object-node", TokenKind::KObjectNode, KeywordCategory::ReservedWith(Extensions::MARKLOGIC)),
    ("of", TokenKind::KOf, KeywordCategory::Keyword),
    ("only", TokenKind::KOnly, KeywordCategory::Keyword),
    ("option", TokenKind::KOption, KeywordCategory::Keyword),
    ("or", TokenKind::KOr, KeywordCategory::Keyword),
    ("order", TokenKind::KOrder, KeywordCategory::Keyword),
    ("ordered", TokenKind::KOrdered, KeywordCategory::Keyword),
    ("ordering", TokenKind::KOrdering, KeywordCategory::Keyword),
    ("parent", TokenKind::KParent, KeywordCategory::Keyword),
    ("pattern-separator", TokenKind::KPatternSeparator, KeywordCategory::Keyword),
    ("per-mille", TokenKind::KPerMille, KeywordCategory::Keyword),
    ("percent", TokenKind::KPercent, KeywordCategory::Keyword),
    ("preceding", TokenKind::KPreceding, KeywordCategory::Keyword),
    ("preceding-sibling", TokenKind::KPrecedingSibling, KeywordCategory::Keyword),
    ("preserve", TokenKind::KPreserve, KeywordCategory::Keyword),
    ("previous", TokenKind::KPrevious, KeywordCategory::Keyword),
    ("processing-instruction", TokenKind::KProcessingInstruction, KeywordCategory::Reserved),
    ("rename", TokenKind::KRename, KeywordCategory::Keyword),
    ("replace", TokenKind::KReplace, KeywordCategory::Keyword),
    ("return", TokenKind::KReturn, KeywordCategory::Keyword),
    ("returning", TokenKind::KReturning, KeywordCategory::Keyword),
    ("revalidation", TokenKind::KRevalidation, KeywordCategory::Keyword),
    ("satisfies", TokenKind::KSatisfies, KeywordCategory::Keyword),
    ("schema", TokenKind::KSchema, KeywordCategory::Keyword),
    ("schema-attribute", TokenKind::KSchemaAttribute, KeywordCategory::Reserved),
    ("schema-element", TokenKind::KSchemaElement, KeywordCategory::Reserved),
    ("self", TokenKind::KSelf, KeywordCategory::Keyword),
    ("sequential", TokenKind::KSequential, KeywordCategory::Keyword),
    ("simple", TokenKind::KSimple, KeywordCategory::Keyword),
    ("skip", TokenKind::KSkip, KeywordCategory::Keyword),
    ("sliding", TokenKind::KSliding, KeywordCategory::Keyword),
    ("some", TokenKind::KSome, KeywordCategory::Keyword),
    ("stable", TokenKind::KStable, KeywordCategory::Keyword),
    ("start", TokenKind::KStart, KeywordCategory::Keyword),
    ("strict", TokenKind::KStrict, KeywordCategory::Keyword),
    ("strip", TokenKind::KStrip, KeywordCategory::Keyword),
    ("switch", TokenKind::KSwitch, KeywordCategory::ReservedSince(XQueryVersion::V3_0)),
    ("text", TokenKind::KText, KeywordCategory::Reserved),
    ("then", TokenKind::KThen, KeywordCategory::Keyword),
    ("to", TokenKind::KTo, KeywordCategory::Keyword),
    ("transform", TokenKind::KTransform, KeywordCategory::Keyword),
    ("treat", TokenKind::KTreat, KeywordCategory::Keyword),
    ("try", TokenKind::KTry, KeywordCategory::Keyword),
    ("tumbling", TokenKind::KTumbling, KeywordCategory::Keyword),
    ("tuple", TokenKind::KTuple, KeywordCategory::ReservedWith(Extensions::SAXON)),
    ("type", TokenKind::KType, KeywordCategory::Keyword),
    ("typeswitch", TokenKind::KTypeswitch, KeywordCategory::Reserved),
    ("unassignable", TokenKind::KUnassignable, KeywordCategory::Keyword),
    ("union", TokenKind::KUnion, KeywordCategory::Keyword),
    ("unordered", TokenKind::KUnordered, KeywordCategory::Keyword),
    ("update", TokenKind::KUpdate, KeywordCategory::Keyword),
    ("updating", TokenKind::KUpdating, KeywordCategory::Keyword),
    ("validate", TokenKind::KValidate, KeywordCategory::Keyword),
    ("value", TokenKind::KValue, KeywordCategory::Keyword),
    ("variable", TokenKind::KVariable, KeywordCategory::Keyword),
    ("version", TokenKind::KVersion, KeywordCategory::Keyword),
    ("when", TokenKind::KWhen, KeywordCategory::Keyword),
    ("where", TokenKind::KWhere, KeywordCategory::Keyword),
    ("while", TokenKind::KWhile, KeywordCategory::ReservedWith(Extensions::SCRIPTING)),
    ("window", TokenKind::KWindow, KeywordCategory::Keyword),
    ("with", TokenKind::KWith, KeywordCategory::Keyword),
    ("xquery", TokenKind::KXquery, KeywordCategory::Keyword),
    ("zero-digit", TokenKind::KZeroDigit, KeywordCategory::Keyword),
];

/// Look up a keyword by spelling.
///
/// Returns `None` for ordinary identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    entry(text).map(|(_, kind, _)| kind)
}

/// Look up a keyword from the UTF-16 units of an NCName.
///
/// Keywords are short ASCII words, so anything longer or non-ASCII is
/// rejected without building a string.
#[allow(
    clippy::cast_possible_truncation,
    reason = "units are checked to be ASCII before narrowing"
)]
pub fn lookup_units(units: &[u16]) -> Option<TokenKind> {
    if units.is_empty() || units.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let mut bytes = [0u8; MAX_KEYWORD_LEN];
    for (slot, &unit) in bytes.iter_mut().zip(units) {
        if unit >= 0x80 {
            return None;
        }
        *slot = unit as u8;
    }
    let text = std::str::from_utf8(&bytes[..units.len()]).ok()?;
    lookup(text)
}

/// Classify a spelling. Ordinary names are [`KeywordCategory::Identifier`].
pub fn classify(text: &str) -> KeywordCategory {
    entry(text).map_or(KeywordCategory::Identifier, |(_, _, category)| category)
}

/// Spelling of a keyword token kind.
pub(crate) fn spelling_of(kind: TokenKind) -> Option<&'static str> {
    let index = usize::from(kind.as_u16().checked_sub(TokenKind::KNaN.as_u16())?);
    KEYWORDS
        .get(index)
        .filter(|(_, k, _)| *k == kind)
        .map(|(text, _, _)| *text)
}

/// All keyword spellings with their kinds, in table order.
pub fn all() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|&(text, kind, _)| (text, kind))
}

fn entry(text: &str) -> Option<(&'static str, TokenKind, KeywordCategory)> {
    if text.is_empty() || text.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let idx = KEYWORDS
        .binary_search_by(|(kw, _, _)| kw.cmp(&text))
        .ok()?;
    Some(KEYWORDS[idx])
}

/// Whether a spelling of the given category may be used as an unprefixed
/// function name under `dialect`.
///
/// This is the single policy function every grammar production that can
/// hold a name shares.
pub fn is_accepted(category: KeywordCategory, dialect: &Dialect) -> bool {
    match category {
        KeywordCategory::Identifier | KeywordCategory::Keyword => true,
        KeywordCategory::Reserved => false,
        KeywordCategory::ReservedSince(version) => dialect.version < version,
        KeywordCategory::ReservedWith(extensions) => {
            !dialect.extensions.intersects(extensions)
        }
    }
}

/// Negation of [`is_accepted`].
pub fn is_reserved(category: KeywordCategory, dialect: &Dialect) -> bool {
    !is_accepted(category, dialect)
}
