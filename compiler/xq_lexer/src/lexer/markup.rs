//! Direct constructors: tags, attributes, element content, XML comments,
//! CDATA sections and processing instructions.
//!
//! Mode flow for `<a b="{1}">x</a>`:
//!
//! ```text
//! Default --<--> ElemTagName --ws--> ElemAttributes --"--> AttrValueQuot
//!   AttrValueQuot --{--> Default --}--> AttrValueQuot --"--> ElemAttributes
//!   ElemAttributes -->--> ElemContent --</--> ElemClosingTag -->--> Default
//! ```

use xq_lexer_core::char_class::{is_name_start_char, is_whitespace};

use super::references::RefContext;
use super::Lexer;
use crate::state::Mode;
use crate::token::TokenKind;

impl Lexer<'_> {
    // ─── `<` ───────────────────────────────────────────────────────────

    /// `<` in expression context or element content.
    ///
    /// `<` directly followed by a name always opens a tag, even in
    /// expression context.
    pub(super) fn less_than(&mut self) -> TokenKind {
        let in_content = self.state.mode == Mode::ElemContent;
        if self.peek_is(1, '!') {
            return self.markup_declaration();
        }
        if self.peek_is(1, '?') {
            self.state.push(Mode::PiTarget);
            return self.bump(2, TokenKind::ProcessingInstructionBegin);
        }
        if self.peek_is(1, '/') {
            if in_content {
                self.state.mode = Mode::ElemClosingTag;
            } else {
                self.state.push(Mode::ElemClosingTag);
            }
            return self.bump(2, TokenKind::CloseXmlTag);
        }
        if is_name_start_char(self.cursor.nth_code_point(1)) {
            self.state.push(Mode::ElemTagName);
            return self.bump(1, TokenKind::OpenXmlTag);
        }
        if in_content {
            return self.bad_character();
        }
        if self.peek_is(1, '=') {
            self.bump(2, TokenKind::LessThanOrEqual)
        } else if self.peek_is(1, '<') {
            self.bump(2, TokenKind::NodeBefore)
        } else {
            self.bump(1, TokenKind::LessThan)
        }
    }

    /// `<!--` or `<![CDATA[`. Any other `<!` prefix is one `Invalid` token
    /// covering as much of either opener as matched.
    fn markup_declaration(&mut self) -> TokenKind {
        if self.cursor.at_str("<!--") {
            self.state.push(Mode::XmlComment);
            return self.bump(4, TokenKind::XmlCommentStartTag);
        }
        if self.cursor.at_str("<![CDATA[") {
            self.state.push(Mode::CdataSection);
            return self.bump(9, TokenKind::CdataSectionStartTag);
        }
        self.cursor.advance_n(2);
        if self.at('-') {
            self.cursor.advance();
        } else if self.at('[') {
            self.cursor.advance();
            for c in "CDATA".chars() {
                if !self.at(c) {
                    break;
                }
                self.cursor.advance();
            }
        }
        TokenKind::Invalid
    }

    // ─── Tags ──────────────────────────────────────────────────────────

    /// Inside a start tag, in either [`Mode::ElemTagName`] or
    /// [`Mode::ElemAttributes`]; names are tagged by which.
    pub(super) fn start_tag(&mut self) -> TokenKind {
        let in_name = self.state.mode == Mode::ElemTagName;
        let cp = self.cursor.code_point();
        if is_whitespace(cp) {
            self.state.mode = Mode::ElemAttributes;
            return self.whitespace(TokenKind::XmlWhiteSpace);
        }
        if is_name_start_char(cp) {
            self.ncname();
            return if in_name {
                TokenKind::XmlTagNcName
            } else {
                TokenKind::XmlAttributeNcName
            };
        }
        match self.cursor.current_char() {
            Some(':') if in_name => self.bump(1, TokenKind::XmlTagQNameSeparator),
            Some(':') => self.bump(1, TokenKind::XmlAttributeQNameSeparator),
            Some('>') => {
                self.state.mode = Mode::ElemContent;
                self.bump(1, TokenKind::EndXmlTag)
            }
            Some('/') if self.peek_is(1, '>') => {
                self.state.pop();
                self.bump(2, TokenKind::SelfClosingXmlTag)
            }
            Some('=') => self.bump(1, TokenKind::XmlEqual),
            Some('"') => self.attribute_value_start(Mode::AttrValueQuot),
            Some('\'') => self.attribute_value_start(Mode::AttrValueApos),
            _ => self.bad_character(),
        }
    }

    fn attribute_value_start(&mut self, value: Mode) -> TokenKind {
        self.state.mode = Mode::ElemAttributes;
        self.state.push(value);
        self.bump(1, TokenKind::XmlAttributeValueStart)
    }

    /// Inside `</name >`.
    pub(super) fn end_tag(&mut self) -> TokenKind {
        let cp = self.cursor.code_point();
        if is_whitespace(cp) {
            return self.whitespace(TokenKind::XmlWhiteSpace);
        }
        if is_name_start_char(cp) {
            self.ncname();
            return TokenKind::XmlTagNcName;
        }
        match self.cursor.current_char() {
            Some(':') => self.bump(1, TokenKind::XmlTagQNameSeparator),
            Some('>') => {
                self.state.pop();
                self.bump(1, TokenKind::EndXmlTag)
            }
            _ => self.bad_character(),
        }
    }

    // ─── Attribute values & content ────────────────────────────────────

    pub(super) fn attribute_value(&mut self, quote: char) -> TokenKind {
        match self.cursor.current_char() {
            Some(c) if c == quote => {
                if self.peek_is(1, quote) {
                    self.bump(2, TokenKind::XmlEscapedCharacter)
                } else {
                    self.state.pop();
                    self.bump(1, TokenKind::XmlAttributeValueEnd)
                }
            }
            Some('{') if self.peek_is(1, '{') => self.bump(2, TokenKind::XmlEscapedCharacter),
            Some('{') => {
                self.state.push(Mode::Default);
                self.bump(1, TokenKind::BlockOpen)
            }
            Some('}') if self.peek_is(1, '}') => self.bump(2, TokenKind::XmlEscapedCharacter),
            Some('}' | '<') => self.bad_character(),
            Some('&') => self.reference(RefContext::Attribute),
            _ => {
                self.cursor.eat_while(|cp| {
                    !matches!(
                        char::from_u32(cp),
                        Some(c) if c == quote || matches!(c, '{' | '}' | '<' | '&')
                    )
                });
                TokenKind::XmlAttributeValueContents
            }
        }
    }

    pub(super) fn element_content(&mut self) -> TokenKind {
        match self.cursor.current_char() {
            Some('<') => self.less_than(),
            Some('{') if self.peek_is(1, '{') => self.bump(2, TokenKind::EscapedCharacter),
            Some('{') => {
                self.state.push(Mode::Default);
                self.bump(1, TokenKind::BlockOpen)
            }
            Some('}') if self.peek_is(1, '}') => self.bump(2, TokenKind::EscapedCharacter),
            Some('}') => self.bad_character(),
            Some('&') => self.reference(RefContext::Text),
            _ => {
                self.cursor
                    .eat_while(|cp| !matches!(char::from_u32(cp), Some('<' | '{' | '}' | '&')));
                TokenKind::XmlElementContents
            }
        }
    }

    // ─── Comments, CDATA, processing instructions ──────────────────────

    pub(super) fn xml_comment(&mut self) -> TokenKind {
        self.verbatim("-->", TokenKind::XmlComment, TokenKind::XmlCommentEndTag)
    }

    pub(super) fn cdata_section(&mut self) -> TokenKind {
        self.verbatim("]]>", TokenKind::CdataSection, TokenKind::CdataSectionEndTag)
    }

    pub(super) fn pi_contents(&mut self) -> TokenKind {
        self.verbatim(
            "?>",
            TokenKind::ProcessingInstructionContents,
            TokenKind::ProcessingInstructionEnd,
        )
    }

    /// After `<?`: the target name, then whitespace into the contents.
    pub(super) fn pi_target(&mut self) -> TokenKind {
        if self.cursor.at_str("?>") {
            self.state.pop();
            return self.bump(2, TokenKind::ProcessingInstructionEnd);
        }
        let cp = self.cursor.code_point();
        if is_whitespace(cp) {
            self.state.mode = Mode::PiContents;
            return self.whitespace(TokenKind::WhiteSpace);
        }
        if is_name_start_char(cp) {
            self.ncname();
            return TokenKind::XmlPiTargetNcName;
        }
        self.bad_character()
    }

    /// Text up to `end`, or `end` itself (which closes the mode).
    fn verbatim(&mut self, end: &str, contents: TokenKind, end_kind: TokenKind) -> TokenKind {
        if self.cursor.eat_str(end) {
            self.state.pop();
            return end_kind;
        }
        self.eat_until_str(end);
        contents
    }
}
