//! Property-based tests for the lexer.
//!
//! 1. Round-trip: token texts concatenate back to the input, whatever it is.
//! 2. Resumability: restarting at any token boundary with the state cached
//!    there reproduces the rest of the stream.
//! 3. End of buffer: once exhausted, the lexer stays put.
//!
//! Inputs are either arbitrary strings or sequences of delimiter-heavy
//! fragments that drive the lexer through every mode, including the
//! truncated and malformed forms.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use xq_lexer::{tokenize_with_states, Lexer, State, Token, TokenKind};

// -- Input Strategies --

const FRAGMENTS: &[&str] = &[
    " ", "\n", "x", "let", "$", "a:b", "1", "1e", "2.5E+", ".5", "..", "+", "-", ":=", "=", "!",
    "<", ">", "/", "//", "(", ")", "[", "]", ",", ";", "#", "?", "@", "%", "|", "^", "\"", "'",
    "\"\"", "{", "}", "{{", "}}", "(:", ":)", "(:~", "@param", "(#", "#)", "Q{", "``[", "]``",
    "`{", "}`", "`", "<a", "<a:b", "</a", "/>", "<!--", "-->", "<![CDATA[", "<![CD", "<!",
    "]]>", "<?", "?>", "&", "&amp;", "&#", "&#x1F;", "&#12;", "&;", "\u{E9}", "\u{1F600}",
];

/// At most seven fragments. No fragment opens more than two modes, so even
/// an alternating stack stays within the packed capacity.
fn fragments_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..8).prop_map(|parts| parts.concat())
}

fn units(source: &str) -> Vec<u16> {
    source.encode_utf16().collect()
}

/// Lex `units` fully, pairing each token with the state before it.
fn lex_all(units: &[u16]) -> Vec<(State, Token)> {
    tokenize_with_states(units, 0, units.len(), State::INITIAL).unwrap()
}

fn assert_covers(units: &[u16], tokens: &[(State, Token)]) -> Result<(), TestCaseError> {
    let mut pos = 0;
    for (_, token) in tokens {
        prop_assert_eq!(token.start, pos, "gap or overlap before {:?}", token);
        prop_assert!(
            token.end > token.start || token.kind == TokenKind::UnexpectedEndOfBlock,
            "empty token {:?}",
            token
        );
        pos = token.end;
    }
    prop_assert_eq!(pos, units.len());
    Ok(())
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn arbitrary_text_round_trips(source in "\\PC{0,40}") {
        let units = units(&source);
        let tokens = lex_all(&units);
        assert_covers(&units, &tokens)?;
        let text: String = tokens
            .iter()
            .map(|(_, t)| String::from_utf16_lossy(&units[t.start..t.end]))
            .collect();
        prop_assert_eq!(text, source);
    }

    #[test]
    fn fragments_round_trip(source in fragments_strategy()) {
        let units = units(&source);
        assert_covers(&units, &lex_all(&units))?;
    }

    #[test]
    fn raw_units_round_trip(units in prop::collection::vec(any::<u16>(), 0..32)) {
        assert_covers(&units, &lex_all(&units))?;
    }

    #[test]
    fn resuming_at_any_token_reproduces_the_rest(source in fragments_strategy()) {
        let units = units(&source);
        let tokens = lex_all(&units);
        for (index, (state, token)) in tokens.iter().enumerate() {
            let resumed: Vec<Token> = Lexer::with_range(&units, token.start, units.len(), *state)
                .unwrap()
                .collect();
            let expected: Vec<Token> = tokens[index..].iter().map(|(_, t)| *t).collect();
            prop_assert_eq!(resumed, expected, "resumed at token {} in {:?}", index, source);
        }
    }

    #[test]
    fn end_of_buffer_is_stable(source in fragments_strategy()) {
        let units = units(&source);
        let mut lexer = Lexer::new(&units);
        while lexer.advance().is_some() {}
        let state = lexer.state();
        for _ in 0..3 {
            prop_assert_eq!(lexer.advance(), None);
            prop_assert_eq!(lexer.token_start(), units.len());
            prop_assert_eq!(lexer.token_end(), units.len());
            prop_assert_eq!(lexer.state(), state);
        }
    }

    #[test]
    fn every_cached_state_decodes(source in fragments_strategy()) {
        let units = units(&source);
        for (state, _) in lex_all(&units) {
            prop_assert!(state.unpack().is_ok());
        }
    }
}
