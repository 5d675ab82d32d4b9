//! Token kinds and the token value produced by the lexer.

use crate::keywords::{self, KeywordCategory};

/// Kind of a lexed token.
///
/// Discriminants are stable: highlighters and caches compare kinds by
/// identity, so the numeric layout is part of the contract. Categories sit
/// in contiguous ranges with gaps for growth:
///
/// | Range   | Category                                   |
/// |---------|--------------------------------------------|
/// | 0-15    | Names, numeric and string literal parts    |
/// | 16-25   | Entity and character references            |
/// | 32-66   | Punctuation and operators                  |
/// | 80-97   | Comments, pragmas, PIs, CDATA sections     |
/// | 112-126 | Direct-constructor markup                  |
/// | 240-243 | Trivia and diagnostics                     |
/// | 256-    | Keywords, one per spelling (sorted)        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // === Names & literals (0-15) ===
    /// An NCName that is not a keyword spelling.
    NcName = 0,
    IntegerLiteral = 1,
    DecimalLiteral = 2,
    DoubleLiteral = 3,
    /// An exponent marker (`e`, `E`, optionally signed) with no digits.
    PartialDoubleLiteralExponent = 4,
    StringLiteralStart = 5,
    StringLiteralContents = 6,
    StringLiteralEnd = 7,
    /// A doubled delimiter standing for itself: `""`, `''`, `{{`, `}}`.
    EscapedCharacter = 8,
    /// `Q{`
    BracedUriLiteralStart = 9,
    BracedUriLiteralEnd = 10,
    /// ``` ``[ ```
    StringConstructorStart = 11,
    StringConstructorContents = 12,
    /// ``` ]`` ```
    StringConstructorEnd = 13,
    /// `` `{ ``
    StringInterpolationOpen = 14,
    /// `` }` ``
    StringInterpolationClose = 15,

    // === References (16-25) ===
    /// `&name;` in string literals and element content.
    PredefinedEntityReference = 16,
    /// `&#nnn;` or `&#xHHH;` in string literals and element content.
    CharacterReference = 17,
    /// A reference cut short by the end of input or an unexpected character.
    PartialEntityReference = 18,
    /// `&;`
    EmptyEntityReference = 19,
    /// A well-formed reference in expression context, where none is allowed.
    EntityReferenceNotInString = 20,
    XmlPredefinedEntityReference = 21,
    XmlCharacterReference = 22,
    XmlPartialEntityReference = 23,
    XmlEmptyEntityReference = 24,
    /// A doubled quote or brace inside an attribute value.
    XmlEscapedCharacter = 25,

    // === Punctuation & operators (32-66) ===
    ParenthesisOpen = 32,
    ParenthesisClose = 33,
    BlockOpen = 34,
    BlockClose = 35,
    SquareOpen = 36,
    SquareClose = 37,
    Comma = 38,
    /// `;`
    Separator = 39,
    Dot = 40,
    /// `..`
    ParentSelector = 41,
    /// `:` between a prefix and a local name.
    QNameSeparator = 42,
    /// `::`
    AxisSeparator = 43,
    /// `:=`
    AssignEqual = 44,
    /// `$`
    VariableIndicator = 45,
    /// `@`
    AttributeSelector = 46,
    /// `?`
    Optional = 47,
    /// `#` in a named function reference.
    FunctionRefLinking = 48,
    /// `%`
    AnnotationIndicator = 49,
    /// `!`
    MapOperator = 50,
    NotEqual = 51,
    Equal = 52,
    /// `=>`
    Arrow = 53,
    LessThan = 54,
    LessThanOrEqual = 55,
    /// `<<`
    NodeBefore = 56,
    GreaterThan = 57,
    GreaterThanOrEqual = 58,
    /// `>>`
    NodeAfter = 59,
    /// `|`
    Union = 60,
    /// `||`
    Concatenation = 61,
    Plus = 62,
    Minus = 63,
    Star = 64,
    /// `/`
    DirectDescendantsPath = 65,
    /// `//`
    AllDescendantsPath = 66,

    // === Comments, pragmas, PIs, CDATA (80-97) ===
    /// `(:`
    CommentStartTag = 80,
    Comment = 81,
    /// `:)`
    CommentEndTag = 82,
    /// The `~` that turns a comment into a documentation comment.
    XqDocCommentMarker = 83,
    XqDocContents = 84,
    /// `@name` inside a documentation comment.
    XqDocTag = 85,
    /// `<!--`
    XmlCommentStartTag = 86,
    XmlComment = 87,
    /// `-->`
    XmlCommentEndTag = 88,
    /// `(#`
    PragmaBegin = 89,
    PragmaContents = 90,
    /// `#)`
    PragmaEnd = 91,
    /// `<?`
    ProcessingInstructionBegin = 92,
    ProcessingInstructionContents = 93,
    /// `?>`
    ProcessingInstructionEnd = 94,
    /// `<![CDATA[`
    CdataSectionStartTag = 95,
    CdataSection = 96,
    /// `]]>`
    CdataSectionEndTag = 97,

    // === Markup (112-126) ===
    /// `<` opening a start tag.
    OpenXmlTag = 112,
    /// `</`
    CloseXmlTag = 113,
    /// `>` ending a start or end tag.
    EndXmlTag = 114,
    /// `/>`
    SelfClosingXmlTag = 115,
    XmlTagNcName = 116,
    XmlTagQNameSeparator = 117,
    XmlAttributeNcName = 118,
    XmlAttributeQNameSeparator = 119,
    XmlEqual = 120,
    XmlWhiteSpace = 121,
    XmlAttributeValueStart = 122,
    XmlAttributeValueContents = 123,
    XmlAttributeValueEnd = 124,
    XmlElementContents = 125,
    XmlPiTargetNcName = 126,

    // === Trivia & diagnostics (240-243) ===
    WhiteSpace = 240,
    /// A code point that cannot start any token in the current mode.
    BadCharacter = 241,
    /// An unrecognized `<!` or `<![` prefix.
    Invalid = 242,
    /// Zero-length marker after a construct the input never closed.
    UnexpectedEndOfBlock = 243,

    // === Keywords (256-) ===
    KNaN = 256,
    KAfter = 257,
    KAllowing = 258,
    KAncestor = 259,
    KAncestorOrSelf = 260,
    KAnd = 261,
    KArray = 262,
    KArrayNode = 263,
    KAs = 264,
    KAscending = 265,
    KAssignable = 266,
    KAt = 267,
    KAttribute = 268,
    KBaseUri = 269,
    KBefore = 270,
    KBinary = 271,
    KBooleanNode = 272,
    KBoundarySpace = 273,
    KBy = 274,
    KCase = 275,
    KCast = 276,
    KCastable = 277,
    KCatch = 278,
    KChild = 279,
    KCollation = 280,
    KComment = 281,
    KConstruction = 282,
    KContext = 283,
    KCopy = 284,
    KCopyNamespaces = 285,
    KCount = 286,
    KDecimalFormat = 287,
    KDecimalSeparator = 288,
    KDeclare = 289,
    KDefault = 290,
    KDelete = 291,
    KDescendant = 292,
    KDescendantOrSelf = 293,
    KDescending = 294,
    KDigit = 295,
    KDiv = 296,
    KDocument = 297,
    KDocumentNode = 298,
    KElement = 299,
    KElse = 300,
    KEmpty = 301,
    KEmptySequence = 302,
    KEncoding = 303,
    KEnd = 304,
    KEnum = 305,
    KEq = 306,
    KEvery = 307,
    KExcept = 308,
    KExit = 309,
    KExponentSeparator = 310,
    KExternal = 311,
    KFirst = 312,
    KFollowing = 313,
    KFollowingSibling = 314,
    KFor = 315,
    KFunction = 316,
    KGe = 317,
    KGreatest = 318,
    KGroup = 319,
    KGroupingSeparator = 320,
    KGt = 321,
    KIdiv = 322,
    KIf = 323,
    KImport = 324,
    KIn = 325,
    KInfinity = 326,
    KInherit = 327,
    KInsert = 328,
    KInstance = 329,
    KIntersect = 330,
    KInto = 331,
    KIs = 332,
    KItem = 333,
    KLast = 334,
    KLax = 335,
    KLe = 336,
    KLeast = 337,
    KLet = 338,
    KLt = 339,
    KMap = 340,
    KMinusSign = 341,
    KMod = 342,
    KModify = 343,
    KModule = 344,
    KNamespace = 345,
    KNamespaceNode = 346,
    KNe = 347,
    KNext = 348,
    KNoInherit = 349,
    KNoPreserve = 350,
    KNode = 351,
    KNodes = 352,
    KNullNode = 353,
    KNumberNode = 354,
    KObjectNode = 355,
    KOf = 356,
    KOnly = 357,
    KOption = 358,
    KOr = 359,
    KOrder = 360,
    KOrdered = 361,
    KOrdering = 362,
    KParent = 363,
    KPatternSeparator = 364,
    KPerMille = 365,
    KPercent = 366,
    KPreceding = 367,
    KPrecedingSibling = 368,
    KPreserve = 369,
    KPrevious = 370,
    KProcessingInstruction = 371,
    KRename = 372,
    KReplace = 373,
    KReturn = 374,
    KReturning = 375,
    KRevalidation = 376,
    KSatisfies = 377,
    KSchema = 378,
    KSchemaAttribute = 379,
    KSchemaElement = 380,
    KSelf = 381,
    KSequential = 382,
    KSimple = 383,
    KSkip = 384,
    KSliding = 385,
    KSome = 386,
    KStable = 387,
    KStart = 388,
    KStrict = 389,
    KStrip = 390,
    KSwitch = 391,
    KText = 392,
    KThen = 393,
    KTo = 394,
    KTransform = 395,
    KTreat = 396,
    KTry = 397,
    KTumbling = 398,
    KTuple = 399,
    KType = 400,
    KTypeswitch = 401,
    KUnassignable = 402,
    KUnion = 403,
    KUnordered = 404,
    KUpdate = 405,
    KUpdating = 406,
    KValidate = 407,
    KValue = 408,
    KVariable = 409,
    KVersion = 410,
    KWhen = 411,
    KWhere = 412,
    KWhile = 413,
    KWindow = 414,
    KWith = 415,
    KXquery = 416,
    KZeroDigit = 417,
}

impl TokenKind {
    /// The stable numeric identity of this kind.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns `true` for keyword kinds (one per spelling).
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.as_u16() >= Self::KNaN.as_u16()
    }

    /// The spelling of a keyword kind, `None` for everything else.
    pub fn keyword_text(self) -> Option<&'static str> {
        if self.is_keyword() {
            keywords::spelling_of(self)
        } else {
            None
        }
    }

    /// How downstream conformance checks treat this keyword's spelling.
    ///
    /// Non-keyword kinds report [`KeywordCategory::Identifier`].
    pub fn keyword_category(self) -> KeywordCategory {
        self.keyword_text()
            .map_or(KeywordCategory::Identifier, keywords::classify)
    }

    /// Returns `true` for kinds that only occur inside direct-constructor
    /// markup, so a highlighter can switch palettes.
    pub const fn is_markup(self) -> bool {
        matches!(
            self.as_u16(),
            21..=25 | 86..=88 | 92..=97 | 112..=126
        )
    }

    /// Whitespace and comment kinds a parser skips.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WhiteSpace
                | Self::XmlWhiteSpace
                | Self::CommentStartTag
                | Self::Comment
                | Self::CommentEndTag
                | Self::XqDocCommentMarker
                | Self::XqDocContents
                | Self::XqDocTag
        )
    }

    /// Kinds that flag malformed input.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::BadCharacter
                | Self::Invalid
                | Self::UnexpectedEndOfBlock
                | Self::PartialDoubleLiteralExponent
                | Self::PartialEntityReference
                | Self::EmptyEntityReference
                | Self::EntityReferenceNotInString
                | Self::XmlPartialEntityReference
                | Self::XmlEmptyEntityReference
        )
    }
}

/// A lexed token: kind plus `[start, end)` in UTF-16 code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    /// Length in code units. Zero only for
    /// [`TokenKind::UnexpectedEndOfBlock`].
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
