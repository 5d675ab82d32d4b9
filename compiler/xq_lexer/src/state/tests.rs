use super::*;
use pretty_assertions::assert_eq;

fn lex_state(mode: Mode, stack: &[Mode]) -> LexState {
    LexState {
        mode,
        stack: stack.iter().copied().collect(),
    }
}

#[test]
fn initial_state_is_default_with_empty_stack() {
    assert_eq!(State::INITIAL.unpack(), Ok(LexState::new(Mode::Default)));
    assert_eq!(LexState::default().pack(), State::INITIAL);
}

#[test]
fn mode_tags_match_table_order() {
    for (index, mode) in Mode::ALL.iter().enumerate() {
        assert_eq!(usize::from(mode.tag()), index);
        assert_eq!(Mode::from_tag(mode.tag()), Some(*mode));
    }
    assert_eq!(Mode::from_tag(22), None);
    assert_eq!(Mode::from_tag(31), None);
}

#[test]
fn nested_state_round_trips() {
    let state = lex_state(
        Mode::BracedUriLiteral,
        &[Mode::Default, Mode::ElemContent, Mode::AttrValueQuot, Mode::Default],
    );
    assert_eq!(state.pack().unpack(), Ok(state));
}

#[test]
fn capacity_holds_fourteen_alternating_entries() {
    assert_eq!(STACK_CAPACITY, 14);
    let stack: Vec<Mode> = RETURN_MODES.iter().copied().cycle().take(STACK_CAPACITY).collect();
    let state = lex_state(Mode::StringConstructor, &stack);
    assert_eq!(state.pack().unpack(), Ok(state));
}

#[test]
fn repeated_entries_pack_as_runs() {
    // Forty nested elements and forty nested enclosed expressions.
    let mut stack = vec![Mode::Default];
    stack.extend([Mode::ElemContent; 40]);
    stack.extend([Mode::Default; 40]);
    let state = lex_state(Mode::ElemTagName, &stack);
    assert_eq!(state.pack().unpack(), Ok(state));
}

#[test]
fn single_and_long_run_layout() {
    // Default, then three ElemContent: code 1 short, code 2 long with count 3.
    let state = lex_state(
        Mode::ElemTagName,
        &[Mode::Default, Mode::ElemContent, Mode::ElemContent, Mode::ElemContent],
    );
    let raw = u64::from(Mode::ElemTagName.tag()) | (0b0001 << 5) | (0b0001_1010 << 9);
    assert_eq!(state.pack(), State::from_raw(raw));
}

#[test]
fn overflow_keeps_innermost_entries() {
    let alternating: Vec<Mode> = [Mode::Default, Mode::ElemContent]
        .iter()
        .copied()
        .cycle()
        .take(STACK_CAPACITY + 4)
        .collect();
    let state = lex_state(Mode::StringQuot, &alternating);
    let restored = state.pack().unpack().unwrap();
    assert_eq!(restored.mode, Mode::StringQuot);
    assert!(restored.stack.len() >= STACK_CAPACITY);
    assert!(alternating.ends_with(&restored.stack));
}

#[test]
fn entries_below_a_non_return_mode_are_dropped() {
    let state = lex_state(
        Mode::Default,
        &[Mode::ElemContent, Mode::Comment, Mode::Default],
    );
    assert_eq!(
        state.pack().unpack(),
        Ok(lex_state(Mode::Default, &[Mode::Default]))
    );
}

#[test]
fn push_and_pop() {
    let mut state = LexState::new(Mode::Default);
    state.push(Mode::ElemTagName);
    assert_eq!(state.mode, Mode::ElemTagName);
    assert_eq!(state.top(), Some(Mode::Default));
    state.push(Mode::AttrValueApos);
    state.pop();
    assert_eq!(state.mode, Mode::ElemTagName);
    state.pop();
    assert_eq!(state.mode, Mode::Default);
    assert_eq!(state.top(), None);
    state.pop();
    assert_eq!(state, LexState::new(Mode::Default));
}

#[test]
fn unknown_mode_is_rejected() {
    assert_eq!(
        State::from_raw(31).unpack(),
        Err(StateError::UnknownMode { tag: 31 })
    );
}

#[test]
fn long_run_cut_off_by_the_word_end_is_rejected() {
    // Thirteen short Default runs fill bits 5..57. The long run flagged at
    // bit 60 would need its count in bits 61..65.
    let mut raw = (1 << 57) | (1 << 60);
    for run in 0..13 {
        raw |= 1 << (5 + 4 * run);
    }
    assert_eq!(
        State::from_raw(raw).unpack(),
        Err(StateError::TruncatedRun { raw })
    );
}

#[test]
fn bits_beyond_the_stack_are_rejected() {
    let raw = 1 << 40;
    assert_eq!(
        State::from_raw(raw).unpack(),
        Err(StateError::TrailingBits { raw })
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        StateError::TrailingBits { raw: 0x100 }.to_string(),
        "lexer state 0x100 has bits set beyond its stack"
    );
}

mod proptest_state {
    use super::*;
    use proptest::prelude::*;

    fn mode() -> impl Strategy<Value = Mode> {
        (0..Mode::ALL.len()).prop_map(|index| Mode::ALL[index])
    }

    fn return_mode() -> impl Strategy<Value = Mode> {
        (0..RETURN_MODES.len()).prop_map(|index| RETURN_MODES[index])
    }

    /// Stacks shaped like real nesting: a few modes, each repeated.
    fn nested_stack() -> impl Strategy<Value = Vec<Mode>> {
        prop::collection::vec((return_mode(), 1..=17usize), 0..6).prop_map(|runs| {
            runs.into_iter()
                .flat_map(|(mode, count)| std::iter::repeat(mode).take(count))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn pack_unpack_round_trips(
            current in mode(),
            stack in prop::collection::vec(return_mode(), 0..=STACK_CAPACITY),
        ) {
            let state = lex_state(current, &stack);
            prop_assert_eq!(state.pack().unpack(), Ok(state));
        }

        #[test]
        fn repeated_runs_round_trip(current in mode(), stack in nested_stack()) {
            let state = lex_state(current, &stack);
            prop_assert_eq!(state.pack().unpack(), Ok(state));
        }

        #[test]
        fn valid_raw_values_repack_equivalently(raw in any::<u64>()) {
            if let Ok(state) = State::from_raw(raw).unpack() {
                prop_assert_eq!(state.pack().unpack(), Ok(state));
            }
        }
    }
}
