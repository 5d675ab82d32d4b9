//! Entity and character references (`&name;`, `&#nnn;`, `&#xHHH;`).
//!
//! One scanner serves every context; the context only picks the token
//! kinds. A reference that breaks off before its `;` is partial and ends
//! at the last code point that still fit the pattern, so the text after it
//! lexes normally.

use xq_lexer_core::char_class::{is_digit, is_hex_digit, is_name_char, is_name_start_char};

use super::Lexer;
use crate::token::TokenKind;

/// Where a reference appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RefContext {
    /// Outside any string. References are not allowed here at all.
    Expression,
    /// String literals, URI literals, element content.
    Text,
    /// Attribute values.
    Attribute,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RefShape {
    Predefined,
    Character,
    Partial,
    Empty,
}

impl Lexer<'_> {
    /// Scan a reference starting at `&`.
    pub(super) fn reference(&mut self, context: RefContext) -> TokenKind {
        let shape = self.reference_shape();
        match (context, shape) {
            (RefContext::Expression, RefShape::Predefined | RefShape::Character) => {
                TokenKind::EntityReferenceNotInString
            }
            (RefContext::Expression | RefContext::Text, RefShape::Partial) => {
                TokenKind::PartialEntityReference
            }
            (RefContext::Expression | RefContext::Text, RefShape::Empty) => {
                TokenKind::EmptyEntityReference
            }
            (RefContext::Text, RefShape::Predefined) => TokenKind::PredefinedEntityReference,
            (RefContext::Text, RefShape::Character) => TokenKind::CharacterReference,
            (RefContext::Attribute, RefShape::Predefined) => {
                TokenKind::XmlPredefinedEntityReference
            }
            (RefContext::Attribute, RefShape::Character) => TokenKind::XmlCharacterReference,
            (RefContext::Attribute, RefShape::Partial) => TokenKind::XmlPartialEntityReference,
            (RefContext::Attribute, RefShape::Empty) => TokenKind::XmlEmptyEntityReference,
        }
    }

    fn reference_shape(&mut self) -> RefShape {
        self.cursor.advance(); // &
        let cp = self.cursor.code_point();
        if is_name_start_char(cp) {
            self.cursor.advance();
            self.cursor.eat_while(is_name_char);
            return self.terminate(RefShape::Predefined);
        }
        if self.at(';') {
            self.cursor.advance();
            return RefShape::Empty;
        }
        if !self.at('#') {
            return RefShape::Partial;
        }
        self.cursor.advance();
        let digits_start = if self.at('x') {
            self.cursor.advance();
            let start = self.cursor.end();
            self.cursor.eat_while(is_hex_digit);
            start
        } else {
            let start = self.cursor.end();
            self.cursor.eat_while(is_digit);
            start
        };
        if self.cursor.end() == digits_start {
            return RefShape::Partial;
        }
        self.terminate(RefShape::Character)
    }

    /// Consume the closing `;`, or downgrade to partial without it.
    fn terminate(&mut self, shape: RefShape) -> RefShape {
        if self.at(';') {
            self.cursor.advance();
            shape
        } else {
            RefShape::Partial
        }
    }
}
