//! Token rows and their text and JSON renderings.

use std::fmt::Write as _;

use serde::Serialize;
use xq_lexer::keywords::{self, KeywordCategory};
use xq_lexer::{tokenize_with_states, Dialect, State, Token};

use crate::error::XqlexError;

/// One lexed token, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// State the token was lexed from, as passed to `--state`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<KeywordInfo>,
}

/// How a keyword token's spelling fares under the selected dialect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeywordInfo {
    pub category: String,
    pub accepted: bool,
}

impl Row {
    fn new(units: &[u16], state: State, token: Token, dialect: &Dialect) -> Self {
        let keyword = token.kind.is_keyword().then(|| {
            let category = token.kind.keyword_category();
            KeywordInfo {
                category: category_label(category),
                accepted: keywords::is_accepted(category, dialect),
            }
        });
        Self {
            kind: format!("{:?}", token.kind),
            start: token.start,
            end: token.end,
            text: String::from_utf16_lossy(&units[token.start..token.end]),
            state: state.to_string(),
            keyword,
        }
    }
}

fn category_label(category: KeywordCategory) -> String {
    match category {
        KeywordCategory::Identifier => "identifier".to_owned(),
        KeywordCategory::Keyword => "keyword".to_owned(),
        KeywordCategory::Reserved => "reserved".to_owned(),
        KeywordCategory::ReservedSince(version) => format!("reserved since {version}"),
        KeywordCategory::ReservedWith(extensions) => {
            let names: Vec<String> = extensions
                .iter_names()
                .map(|(name, _)| name.to_ascii_lowercase())
                .collect();
            format!("reserved with {}", names.join("|"))
        }
    }
}

/// The token stream of one lexed range.
#[derive(Clone, Debug)]
pub struct Dump {
    rows: Vec<Row>,
}

impl Dump {
    pub fn lex(
        units: &[u16],
        from: usize,
        to: usize,
        state: State,
        dialect: Dialect,
    ) -> Result<Self, XqlexError> {
        let rows = tokenize_with_states(units, from, to, state)?
            .into_iter()
            .map(|(state, token)| Row::new(units, state, token, &dialect))
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// One row per token: offsets, starting state, kind, quoted text, and
    /// the keyword verdict where there is one.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            let _ = write!(
                out,
                "{:>6}..{:<6} {:<12} {:<32} {:?}",
                row.start, row.end, row.state, row.kind, row.text
            );
            if let Some(keyword) = &row.keyword {
                let verdict = if keyword.accepted {
                    "accepted"
                } else {
                    "rejected"
                };
                let _ = write!(out, "  [{}, {verdict}]", keyword.category);
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String, XqlexError> {
        let mut json = serde_json::to_string_pretty(self.rows())?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
