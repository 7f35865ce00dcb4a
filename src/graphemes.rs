//! Graphemes splitter, GB1–GB13 (spec §4.5).
//!
//! The rule cascade itself is `crate::state::State::transition`, kept
//! exactly as the teacher (`grapheme_machine::state::State`) wrote it:
//! a small explicit `enum State` plus a `transition(self, prev, next) ->
//! (bool, State)` method, advanced one character at a time. The teacher's
//! public API drives that state machine from `char`/`u8char` values with
//! no concept of a byte buffer at all -- that API survives unchanged as
//! [`crate::GraphemeMachine`] for callers with their own character
//! source and no interest in buffering.
//!
//! [`GraphemesSplitter`] is the adaptation needed to run the same state
//! machine under the uniform byte-slice [`Splitter`] driver alongside
//! Words and Sentences: it decodes runes directly from bytes via
//! `crate::properties::lookup_bytes` instead of requiring a pre-decoded
//! `u8char`, and it runs the cascade forward until `transition` reports a
//! boundary, so one `split()` call yields exactly one grapheme cluster
//! (which may span several runes) rather than one rune.
//!
//! Unlike Words and Sentences, Graphemes never needs the `crate::scan`
//! look-back/look-ahead helpers: every GB rule is decidable from the
//! immediately preceding rune's properties plus the small amount of
//! run-length state `State` already carries (regional indicator parity,
//! the GB9c/GB11 in-progress markers), per spec §4.5.

use crate::properties::CharProperties;
use crate::segmenter::{Segmenter, SplitOutcome, Splitter};
use crate::state::State;

#[cfg(feature = "std")]
use crate::reader::ReaderSegmenter;

fn lookup(bytes: &[u8], at_eof: bool) -> (CharProperties, u8) {
    crate::properties::lookup_bytes(bytes, at_eof)
}

/// Graphemes splitter implementing GB1–GB13 (including GB9c).
///
/// Like [`crate::words::WordsSplitter`] and
/// [`crate::sentences::SentencesSplitter`], this type carries no state
/// between calls to [`Splitter::split`]: everything the cascade needs
/// within one grapheme cluster (the running [`State`] and the previous
/// rune's properties) is local to the scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemesSplitter;

impl GraphemesSplitter {
    pub fn new() -> Self {
        Self
    }
}

impl Splitter for GraphemesSplitter {
    fn split(&mut self, data: &[u8], at_eof: bool) -> SplitOutcome {
        if data.is_empty() {
            return if at_eof { SplitOutcome::Done } else { SplitOutcome::NeedMoreData };
        }
        let (first_props, first_width) = lookup(data, at_eof);
        if first_width == 0 {
            return SplitOutcome::NeedMoreData;
        }
        // GB1: start-of-text always begins a cluster. Discard the
        // (always-true) boundary result and keep only the state update,
        // exactly matching what `GraphemeMachine::new()` + one
        // `next_char_properties` call would produce.
        let (_, mut state) = State::Base.transition(CharProperties::NONE, first_props);
        let mut prev = first_props;
        let mut pos = first_width as usize;

        loop {
            if pos >= data.len() {
                // GB2: end-of-text always ends a cluster.
                return if at_eof { SplitOutcome::Token(pos) } else { SplitOutcome::NeedMoreData };
            }
            let (cur_props, width) = lookup(&data[pos..], at_eof);
            if width == 0 {
                return SplitOutcome::NeedMoreData;
            }
            let (boundary, next_state) = state.transition(prev, cur_props);
            if boundary {
                return SplitOutcome::Token(pos);
            }
            pos += width as usize;
            prev = cur_props;
            state = next_state;
        }
    }
}

/// Segments a byte buffer into grapheme clusters.
pub fn from_bytes(data: &[u8]) -> Segmenter<'_, GraphemesSplitter> {
    Segmenter::new(data, GraphemesSplitter::new())
}

/// Segments a `&str` into grapheme clusters.
pub fn from_str(text: &str) -> Segmenter<'_, GraphemesSplitter> {
    Segmenter::new(text.as_bytes(), GraphemesSplitter::new())
}

/// Segments a streaming byte source into grapheme clusters.
#[cfg(feature = "std")]
pub fn from_reader<R: std::io::Read>(reader: R) -> ReaderSegmenter<GraphemesSplitter, R> {
    ReaderSegmenter::new(reader, GraphemesSplitter::new())
}
