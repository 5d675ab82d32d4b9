//! Expression-context scanning: punctuation, operators, numbers, names,
//! and the delimiters that open every nested mode.

use xq_lexer_core::char_class::{is_digit, is_name_start_char, is_whitespace};

use super::references::RefContext;
use super::Lexer;
use crate::keywords;
use crate::state::Mode;
use crate::token::TokenKind;

impl Lexer<'_> {
    pub(super) fn default_mode(&mut self) -> TokenKind {
        let cp = self.cursor.code_point();
        if is_whitespace(cp) {
            return self.whitespace(TokenKind::WhiteSpace);
        }
        let Some(c) = self.cursor.current_char() else {
            // Unpaired surrogate.
            return self.bad_character();
        };
        match c {
            '0'..='9' => self.number(),
            '.' => self.dot(),
            '"' => self.enter(1, Mode::StringQuot, TokenKind::StringLiteralStart),
            '\'' => self.enter(1, Mode::StringApos, TokenKind::StringLiteralStart),
            '(' => self.left_paren(),
            ')' => self.bump(1, TokenKind::ParenthesisClose),
            '{' => self.enter(1, Mode::Default, TokenKind::BlockOpen),
            '}' => self.right_brace(),
            '[' => self.bump(1, TokenKind::SquareOpen),
            ']' => self.bump(1, TokenKind::SquareClose),
            ',' => self.bump(1, TokenKind::Comma),
            ';' => self.bump(1, TokenKind::Separator),
            '$' => self.bump(1, TokenKind::VariableIndicator),
            '@' => self.bump(1, TokenKind::AttributeSelector),
            '%' => self.bump(1, TokenKind::AnnotationIndicator),
            '?' => self.bump(1, TokenKind::Optional),
            '+' => self.bump(1, TokenKind::Plus),
            '-' => self.bump(1, TokenKind::Minus),
            '*' => self.bump(1, TokenKind::Star),
            '/' => self.pair('/', TokenKind::AllDescendantsPath, TokenKind::DirectDescendantsPath),
            '|' => self.pair('|', TokenKind::Concatenation, TokenKind::Union),
            '!' => self.pair('=', TokenKind::NotEqual, TokenKind::MapOperator),
            '=' => self.pair('>', TokenKind::Arrow, TokenKind::Equal),
            '>' => self.greater_than(),
            '<' => self.less_than(),
            ':' => self.colon(),
            '#' => self.pair(')', TokenKind::PragmaEnd, TokenKind::FunctionRefLinking),
            '&' => self.reference(RefContext::Expression),
            '`' => self.backtick(),
            'Q' if self.peek_is(1, '{') => {
                self.enter(2, Mode::BracedUriLiteral, TokenKind::BracedUriLiteralStart)
            }
            _ if is_name_start_char(cp) => self.name(),
            _ => self.bad_character(),
        }
    }

    /// Consume `n` code points, push `mode`, report `kind`.
    fn enter(&mut self, n: usize, mode: Mode, kind: TokenKind) -> TokenKind {
        self.state.push(mode);
        self.bump(n, kind)
    }

    /// A one-character operator that becomes `double` when followed by
    /// `second`.
    fn pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek_is(1, second) {
            self.bump(2, double)
        } else {
            self.bump(1, single)
        }
    }

    // ─── Punctuation ───────────────────────────────────────────────────

    fn left_paren(&mut self) -> TokenKind {
        if self.peek_is(1, ':') {
            let body = if self.peek_is(2, '~') {
                Mode::DocCommentStart
            } else {
                Mode::Comment
            };
            return self.enter(2, body, TokenKind::CommentStartTag);
        }
        if self.peek_is(1, '#') {
            return self.enter(2, Mode::PragmaPreQName, TokenKind::PragmaBegin);
        }
        self.bump(1, TokenKind::ParenthesisOpen)
    }

    /// `}` closes the innermost enclosed expression. Inside a string
    /// constructor interpolation only `` }` `` closes; a bare `}` there is
    /// an unbalanced brace and leaves the interpolation open.
    fn right_brace(&mut self) -> TokenKind {
        match self.state.top() {
            Some(Mode::StringConstructor) => {
                if self.peek_is(1, '`') {
                    self.state.pop();
                    self.bump(2, TokenKind::StringInterpolationClose)
                } else {
                    self.bump(1, TokenKind::BlockClose)
                }
            }
            Some(_) => {
                self.state.pop();
                self.bump(1, TokenKind::BlockClose)
            }
            None => self.bump(1, TokenKind::BlockClose),
        }
    }

    fn greater_than(&mut self) -> TokenKind {
        if self.peek_is(1, '=') {
            self.bump(2, TokenKind::GreaterThanOrEqual)
        } else if self.peek_is(1, '>') {
            self.bump(2, TokenKind::NodeAfter)
        } else {
            self.bump(1, TokenKind::GreaterThan)
        }
    }

    fn colon(&mut self) -> TokenKind {
        if self.peek_is(1, ':') {
            self.bump(2, TokenKind::AxisSeparator)
        } else if self.peek_is(1, '=') {
            self.bump(2, TokenKind::AssignEqual)
        } else if self.peek_is(1, ')') {
            self.bump(2, TokenKind::CommentEndTag)
        } else {
            self.bump(1, TokenKind::QNameSeparator)
        }
    }

    fn backtick(&mut self) -> TokenKind {
        if self.cursor.at_str("``[") {
            self.enter(3, Mode::StringConstructor, TokenKind::StringConstructorStart)
        } else {
            self.bad_character()
        }
    }

    fn dot(&mut self) -> TokenKind {
        if is_digit(self.cursor.nth_code_point(1)) {
            self.number()
        } else if self.peek_is(1, '.') {
            self.bump(2, TokenKind::ParentSelector)
        } else {
            self.bump(1, TokenKind::Dot)
        }
    }

    // ─── Numbers ───────────────────────────────────────────────────────

    /// `IntegerLiteral`, `DecimalLiteral` or `DoubleLiteral`.
    ///
    /// An exponent marker without digits is given back and left for
    /// [`Mode::DoubleExponent`], so `1e` lexes as an integer followed by a
    /// partial exponent. Signs are never part of the number.
    fn number(&mut self) -> TokenKind {
        let mut kind = TokenKind::IntegerLiteral;
        self.cursor.eat_while(is_digit);
        if self.at('.') {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
            kind = TokenKind::DecimalLiteral;
        }
        if self.at('e') || self.at('E') {
            self.cursor.save();
            self.cursor.advance();
            if self.at('+') || self.at('-') {
                self.cursor.advance();
            }
            if is_digit(self.cursor.code_point()) {
                self.cursor.eat_while(is_digit);
                return TokenKind::DoubleLiteral;
            }
            self.cursor.restore();
            self.state.push(Mode::DoubleExponent);
        }
        kind
    }

    pub(super) fn double_exponent(&mut self) -> TokenKind {
        self.state.pop();
        if !(self.at('e') || self.at('E')) {
            return self.scan_mode();
        }
        self.cursor.advance();
        if self.at('+') || self.at('-') {
            self.cursor.advance();
        }
        TokenKind::PartialDoubleLiteralExponent
    }

    // ─── Names ─────────────────────────────────────────────────────────

    /// An NCName, tagged with its keyword kind when it spells one.
    fn name(&mut self) -> TokenKind {
        self.ncname();
        keywords::lookup_units(self.cursor.token_units()).unwrap_or(TokenKind::NcName)
    }
}
