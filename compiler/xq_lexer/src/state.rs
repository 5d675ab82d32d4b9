//! Lexical modes and the resumable lexer state.
//!
//! Inside the lexer the state is an explicit pair: the current [`Mode`]
//! and a stack of the modes to return to as nested constructs close. At the
//! API boundary that pair is packed into an opaque [`State`] integer, which
//! hosts store per line (or per token) and hand back to resume lexing.
//!
//! # Layout
//!
//! ```text
//!  bit 0      5                                               64
//!      | mode | run 0 | run 1 | ... | 0 0 0 ...               |
//!
//!  run: | code (3) | long (1) | count - 2 (4, long runs only) |
//! ```
//!
//! Only seven modes are ever returned to (see [`RETURN_MODES`]), so a stack
//! entry needs a 3-bit code, with code 0 ending the stack. Consecutive
//! equal entries share one run: a single entry costs 4 bits and a run of
//! 2 to 17 costs 8, so nested elements or nested enclosed expressions stay
//! cheap however deep they go. Run 0 is the bottom of the stack. The
//! packer always emits the longest runs it can, so every state the lexer
//! produces has exactly one packed form.

use smallvec::SmallVec;
use tracing::debug;

const MODE_BITS: u32 = 5;
const MODE_MASK: u64 = (1 << MODE_BITS) - 1;
const STACK_SHIFT: u32 = MODE_BITS;

const CODE_BITS: u32 = 3;
const CODE_MASK: u64 = (1 << CODE_BITS) - 1;
const SHORT_RUN_BITS: u32 = CODE_BITS + 1;
const COUNT_BITS: u32 = 4;
const COUNT_MASK: u64 = (1 << COUNT_BITS) - 1;
const LONG_RUN_BITS: u32 = SHORT_RUN_BITS + COUNT_BITS;
const MAX_RUN: usize = (1 << COUNT_BITS) + 1;

/// Stack depth at which every state the lexer produces packs exactly.
///
/// Deeper stacks stay exact as long as they repeat modes; only stacks that
/// alternate modes for more than this many levels lose their outermost
/// entries.
pub const STACK_CAPACITY: usize = ((u64::BITS - STACK_SHIFT) / SHORT_RUN_BITS) as usize;

/// The modes a construct can return to when it closes, in stack-code
/// order (code 1 is `Default`).
pub const RETURN_MODES: [Mode; 7] = [
    Mode::Default,
    Mode::ElemContent,
    Mode::ElemAttributes,
    Mode::AttrValueQuot,
    Mode::AttrValueApos,
    Mode::StringConstructor,
    Mode::PragmaQName,
];

/// A lexical context governing which sub-scanner runs.
///
/// The tag values are part of the packed state format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Expression context.
    #[default]
    Default = 0,
    StringQuot = 1,
    StringApos = 2,
    /// Just after a number whose exponent marker has no digits.
    DoubleExponent = 3,
    Comment = 4,
    /// Between `(:` and the `~` that makes a documentation comment.
    DocCommentStart = 5,
    DocComment = 6,
    XmlComment = 7,
    CdataSection = 8,
    /// After `(#`, before the pragma name.
    PragmaPreQName = 9,
    /// Inside a prefixed or URI-qualified pragma name.
    PragmaQName = 10,
    PragmaContents = 11,
    /// Inside a start tag, before any whitespace.
    ElemTagName = 12,
    ElemAttributes = 13,
    ElemClosingTag = 14,
    AttrValueQuot = 15,
    AttrValueApos = 16,
    /// Character data between a start tag and its end tag.
    ElemContent = 17,
    PiTarget = 18,
    PiContents = 19,
    /// `Q{...}`
    BracedUriLiteral = 20,
    /// Between ``` ``[ ``` and ``` ]`` ```.
    StringConstructor = 21,
}

impl Mode {
    /// Every mode, indexed by tag.
    pub const ALL: [Mode; 22] = [
        Self::Default,
        Self::StringQuot,
        Self::StringApos,
        Self::DoubleExponent,
        Self::Comment,
        Self::DocCommentStart,
        Self::DocComment,
        Self::XmlComment,
        Self::CdataSection,
        Self::PragmaPreQName,
        Self::PragmaQName,
        Self::PragmaContents,
        Self::ElemTagName,
        Self::ElemAttributes,
        Self::ElemClosingTag,
        Self::AttrValueQuot,
        Self::AttrValueApos,
        Self::ElemContent,
        Self::PiTarget,
        Self::PiContents,
        Self::BracedUriLiteral,
        Self::StringConstructor,
    ];

    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Option<Mode> {
        Self::ALL.get(usize::from(tag)).copied()
    }
}

/// Opaque, resumable lexer state.
///
/// Treat it as a black box: store it, compare it, hand it back to
/// [`Lexer::start`](crate::Lexer::start). [`State::INITIAL`] starts a
/// document from scratch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(u64);

impl State {
    /// Default mode, empty stack.
    pub const INITIAL: State = State(0);

    /// Wrap a raw value previously obtained from [`State::raw`].
    ///
    /// Not validated here; [`Lexer::try_start`](crate::Lexer::try_start)
    /// and [`State::unpack`] reject malformed values.
    pub const fn from_raw(raw: u64) -> Self {
        State(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Decode into the explicit `(mode, stack)` pair.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "values are masked to at most 5 bits before narrowing"
    )]
    pub fn unpack(self) -> Result<LexState, StateError> {
        let raw = self.0;
        let mode_tag = (raw & MODE_MASK) as u8;
        let mode = Mode::from_tag(mode_tag).ok_or(StateError::UnknownMode { tag: mode_tag })?;

        let mut stack = SmallVec::new();
        let mut shift = STACK_SHIFT;
        while shift + SHORT_RUN_BITS <= u64::BITS {
            let code = (raw >> shift) & CODE_MASK;
            if code == 0 {
                break;
            }
            // Codes 1..=7 cover RETURN_MODES exactly.
            let entry = RETURN_MODES[code as usize - 1];
            let count = if (raw >> (shift + CODE_BITS)) & 1 == 1 {
                if shift + LONG_RUN_BITS > u64::BITS {
                    return Err(StateError::TruncatedRun { raw });
                }
                shift += LONG_RUN_BITS;
                ((raw >> (shift - COUNT_BITS)) & COUNT_MASK) as usize + 2
            } else {
                shift += SHORT_RUN_BITS;
                1
            };
            stack.extend(std::iter::repeat(entry).take(count));
        }

        if shift < u64::BITS && raw >> shift != 0 {
            return Err(StateError::TrailingBits { raw });
        }

        Ok(LexState { mode, stack })
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Stack code of a return mode, `None` for modes nothing returns to.
fn return_code(mode: Mode) -> Option<u64> {
    RETURN_MODES
        .iter()
        .position(|&m| m == mode)
        .map(|index| index as u64 + 1)
}

const fn run_bits(count: usize) -> u32 {
    if count == 1 {
        SHORT_RUN_BITS
    } else {
        LONG_RUN_BITS
    }
}

/// A packed value that does not decode to a lexer state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("unknown lexer mode tag {tag}")]
    UnknownMode { tag: u8 },
    #[error("lexer state {raw:#x} ends inside a stack run")]
    TruncatedRun { raw: u64 },
    #[error("lexer state {raw:#x} has bits set beyond its stack")]
    TrailingBits { raw: u64 },
}

/// The explicit form of a [`State`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexState {
    pub mode: Mode,
    /// Modes to return to, innermost last.
    pub stack: SmallVec<[Mode; 8]>,
}

impl LexState {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            stack: SmallVec::new(),
        }
    }

    /// Enter `next`, remembering the current mode.
    #[inline]
    pub fn push(&mut self, next: Mode) {
        self.stack.push(self.mode);
        self.mode = next;
    }

    /// Return to the enclosing mode, or [`Mode::Default`] at the top level.
    #[inline]
    pub fn pop(&mut self) {
        self.mode = self.stack.pop().unwrap_or(Mode::Default);
    }

    /// The mode [`pop`](Self::pop) would return to, if any.
    #[inline]
    pub fn top(&self) -> Option<Mode> {
        self.stack.last().copied()
    }

    /// Encode as an opaque [`State`].
    ///
    /// Runs are packed innermost first until the bits run out; whatever
    /// does not fit is dropped from the bottom, and resuming from such a
    /// state returns to [`Mode::Default`] early. The same happens below an
    /// entry that is not one of the [`RETURN_MODES`], which the lexer never
    /// pushes.
    pub fn pack(&self) -> State {
        let mut budget = u64::BITS - STACK_SHIFT;
        let mut kept: SmallVec<[(u64, usize); 8]> = SmallVec::new();
        let mut packed = 0;
        for (mode, count) in runs(&self.stack).into_iter().rev() {
            let Some(code) = return_code(mode) else {
                break;
            };
            let fits = if run_bits(count) <= budget {
                count
            } else if SHORT_RUN_BITS <= budget {
                1
            } else {
                break;
            };
            budget -= run_bits(fits);
            packed += fits;
            kept.push((code, fits));
            if fits < count {
                break;
            }
        }
        if packed < self.stack.len() {
            debug!(
                depth = self.stack.len(),
                dropped = self.stack.len() - packed,
                "lexer mode stack exceeds packed capacity"
            );
        }

        let mut raw = u64::from(self.mode.tag());
        let mut shift = STACK_SHIFT;
        for &(code, count) in kept.iter().rev() {
            raw |= code << shift;
            if count > 1 {
                raw |= 1 << (shift + CODE_BITS);
                raw |= (count as u64 - 2) << (shift + SHORT_RUN_BITS);
            }
            shift += run_bits(count);
        }
        State(raw)
    }
}

/// Split a stack into `(mode, count)` runs, bottom first, none longer than
/// the packed format allows.
fn runs(stack: &[Mode]) -> SmallVec<[(Mode, usize); 8]> {
    let mut runs: SmallVec<[(Mode, usize); 8]> = SmallVec::new();
    for &mode in stack {
        match runs.last_mut() {
            Some((last, count)) if *last == mode && *count < MAX_RUN => *count += 1,
            _ => runs.push((mode, 1)),
        }
    }
    runs
}

#[cfg(test)]
mod tests;
