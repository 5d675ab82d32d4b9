//! Comments `(: ... :)`, documentation comments `(:~ ... :)`, and pragmas
//! `(# name contents #)`.

use xq_lexer_core::char_class::{is_name_char, is_name_start_char, is_whitespace};

use super::Lexer;
use crate::state::Mode;
use crate::token::TokenKind;

impl Lexer<'_> {
    // ─── Comments ──────────────────────────────────────────────────────

    /// The body of an ordinary comment is one token, nested comments
    /// included.
    pub(super) fn comment(&mut self) -> TokenKind {
        if self.cursor.eat_str(":)") {
            self.state.pop();
            return TokenKind::CommentEndTag;
        }
        self.eat_comment_text();
        TokenKind::Comment
    }

    /// Consume text up to the `:)` that closes the current level, stepping
    /// over balanced nested comments. Nesting is counted locally: a token
    /// never ends inside a nested comment, so no depth survives in the
    /// state.
    fn eat_comment_text(&mut self) {
        let mut depth = 0usize;
        while !self.cursor.is_eof() {
            if self.cursor.at_str("(:") {
                depth += 1;
                self.cursor.advance_n(2);
            } else if self.cursor.at_str(":)") {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                self.cursor.advance_n(2);
            } else {
                self.cursor.advance();
            }
        }
    }

    pub(super) fn doc_comment_start(&mut self) -> TokenKind {
        if self.at('~') {
            self.state.mode = Mode::DocComment;
            return self.bump(1, TokenKind::XqDocCommentMarker);
        }
        self.state.mode = Mode::Comment;
        self.comment()
    }

    /// Documentation comment body: free text split at `@tag` names.
    ///
    /// A nested comment is contents, lexed whole (with its own nesting) as
    /// one token, so its `:)` never ends the documentation comment.
    pub(super) fn doc_comment(&mut self) -> TokenKind {
        if self.cursor.eat_str(":)") {
            self.state.pop();
            return TokenKind::CommentEndTag;
        }
        if self.cursor.eat_str("(:") {
            self.eat_comment_text();
            self.cursor.eat_str(":)");
            return TokenKind::XqDocContents;
        }
        if self.at_doc_tag() {
            self.cursor.advance();
            self.cursor.eat_while(is_name_char);
            return TokenKind::XqDocTag;
        }
        let mut after_space = false;
        while !self.cursor.is_eof()
            && !self.cursor.at_str("(:")
            && !self.cursor.at_str(":)")
            && !(after_space && self.at_doc_tag())
        {
            after_space = is_whitespace(self.cursor.code_point());
            self.cursor.advance();
        }
        TokenKind::XqDocContents
    }

    fn at_doc_tag(&self) -> bool {
        self.at('@') && is_name_start_char(self.cursor.nth_code_point(1))
    }

    // ─── Pragmas ───────────────────────────────────────────────────────

    /// After `(#`: optional whitespace, then an NCName, a prefixed name,
    /// or a `Q{uri}local` name.
    pub(super) fn pragma_name(&mut self) -> TokenKind {
        let cp = self.cursor.code_point();
        if is_whitespace(cp) {
            return self.whitespace(TokenKind::WhiteSpace);
        }
        if self.cursor.eat_str("#)") {
            self.state.pop();
            return TokenKind::PragmaEnd;
        }
        if self.at('Q') && self.peek_is(1, '{') {
            self.state.mode = Mode::PragmaQName;
            self.state.push(Mode::BracedUriLiteral);
            return self.bump(2, TokenKind::BracedUriLiteralStart);
        }
        if is_name_start_char(cp) {
            self.ncname();
            self.state.mode =
                if self.at(':') && is_name_start_char(self.cursor.nth_code_point(1)) {
                    Mode::PragmaQName
                } else {
                    Mode::PragmaContents
                };
            return TokenKind::NcName;
        }
        self.state.mode = Mode::PragmaContents;
        self.pragma_contents()
    }

    /// The rest of a qualified pragma name.
    pub(super) fn pragma_qname(&mut self) -> TokenKind {
        if self.at(':') {
            return self.bump(1, TokenKind::QNameSeparator);
        }
        self.state.mode = Mode::PragmaContents;
        if is_name_start_char(self.cursor.code_point()) {
            self.ncname();
            return TokenKind::NcName;
        }
        self.pragma_contents()
    }

    pub(super) fn pragma_contents(&mut self) -> TokenKind {
        if self.cursor.eat_str("#)") {
            self.state.pop();
            return TokenKind::PragmaEnd;
        }
        self.eat_until_str("#)");
        TokenKind::PragmaContents
    }
}
