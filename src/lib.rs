//! An implementation of [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/)
//! that partitions a byte buffer, a `&str`, or a streaming byte source into
//! **words**, **sentences**, or **grapheme clusters**, plus a closely
//! related **phrase** segmenter built on top of words.
//!
//! This library implements the segmentation algorithms as of Unicode
//! 16.0.0, using character database tables from that release.
//!
//! The four segmenters share one shape: construct an iterator over your
//! input with [`words::from_bytes`]/[`words::from_str`]/[`words::from_reader`]
//! (and the matching functions in [`sentences`], [`graphemes`], and
//! [`phrases`]), then drive it with the [`Segments`] trait's `next`/`value`/
//! `start`/`end`. Concatenating every yielded segment, in order, always
//! reproduces the input byte-for-byte -- even when the input isn't valid
//! UTF-8, in which case malformed bytes are yielded one at a time rather
//! than rejected.
//!
//! ---
//!
//! The canonical Rust library for UAX #29 is
//! [`unicode_segmentation`](https://docs.rs/unicode-segmentation/latest/unicode_segmentation/),
//! and so that's actually probably what you should use in most cases. This
//! library has the following main distinctions (as of
//! `unicode_segmentation` v1.12.0):
//!
//! - `unicode_segmentation`'s primary entry points expect the entire text
//!   to be in memory as a single buffer, with a separate, harder-to-use
//!   `GraphemeCursor` for non-contiguous buffers. This library instead
//!   gives every segmenter kind (words, sentences, graphemes, phrases) a
//!   uniform streaming-friendly driver: each one can be fed a partial
//!   buffer or a [`std::io::Read`] directly and will ask for more bytes
//!   only when a rune or a multi-rune pattern genuinely straddles the
//!   buffer edge, never mis-splitting a boundary it can't yet decide.
//!
//! - `unicode_segmentation` finds character properties using binary search
//!   over its internal tables after converting input into Rust [`char`]
//!   values. This library's property lookup instead fuses UTF-8 decoding
//!   and property lookup into one pass over raw bytes, so the common
//!   ASCII case never materializes a `char` at all.
//!
//! - This library exposes its category bitmasks
//!   ([`categories::WordsProps`], [`categories::SentencesProps`],
//!   [`GCBProperty`]/[`InCBProperty`] for graphemes) as part of its public
//!   API, so it can double as a bare property-lookup library even if you
//!   don't use any of its segmenters.
//!
//! - The original, character-at-a-time [`GraphemeMachine`] API (this
//!   library's ancestor: see the crate's `DESIGN.md`) is kept unchanged
//!   alongside the byte-slice-driven [`graphemes`] module, for callers
//!   with their own character source and no interest in buffering a
//!   whole cluster at once.
//!
//! Unless you have a good reason to prefer this library, it's probably
//! better to use
//! [`unicode_segmentation`](https://docs.rs/unicode-segmentation/latest/unicode_segmentation/)
//! because it's widely used in the Rust community and well maintained by
//! an established team.
//!
//! # An important caveat
//!
//! The full Unicode property trie is ordinarily a generated, checked-in
//! build artifact refreshed by an offline tool that reads
//! `WordBreakProperty.txt`, `SentenceBreakProperty.txt`,
//! `GraphemeBreakProperty.txt`, and friends from the Unicode Character
//! Database. That generator is out of scope for this crate (see
//! `DESIGN.md`), so the range tables checked in here are a hand-curated
//! subset covering ASCII plus the scalar ranges the UAX rules and this
//! crate's own test fixtures actually exercise, not the full scalar
//! space. If staying fully conformant across the entire Unicode range is
//! important to you, prefer `unicode_segmentation` instead.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

/// The Unicode Character Database version these segmentation tables were
/// curated against (spec §3 "Version constant").
pub const UNICODE_VERSION: (u32, u32, u32) = (16, 0, 0);

pub mod categories;
mod error;
mod joiners;
pub mod graphemes;
pub mod phrases;
#[cfg(feature = "std")]
mod reader;
mod scan;
mod segmenter;
pub mod sentences;
mod state;
mod trie;
pub mod words;

mod properties;

pub use error::{JoinersError, SegmenterError};
pub use joiners::Joiners;
pub use properties::{CharProperties, GCBProperty, InCBProperty};
#[cfg(feature = "std")]
pub use reader::ReaderSegmenter;
pub use segmenter::{Segmenter, Segments};

use state::State;
use u8char::u8char;

/// A finite state machine for detecting grapheme cluster boundaries one
/// character at a time, with no buffer of its own.
///
/// This is the original entry point this crate grew from: a caller with
/// its own character source (e.g. characters arriving over a network
/// socket) and no interest in buffering more than the current cluster can
/// drive this directly, avoiding the byte-slice [`Segmenter`] machinery in
/// [`graphemes`] entirely. Most callers working from an in-memory buffer,
/// a `&str`, or a [`std::io::Read`] should prefer
/// [`graphemes::from_bytes`]/[`graphemes::from_str`]/[`graphemes::from_reader`]
/// instead.
///
/// As new characters arrive, feed them into the state machine sequentially
/// using [`Self::next_char_properties`], [`Self::next_u8char`], or
/// [`Self::next_char`], each of which will return an indicator for whether
/// that new character should be treated as the beginning of a new grapheme
/// cluster or as a continuation of the one already in progress.
///
/// Internally a `GraphemeMachine` tracks only the properties of the most
/// recently presented character (if any) and the current state from a finite
/// state machine that effectively encodes everything the segmentation
/// algorithm needs to know about all of the characters submitted so far into
/// a single byte. Each newly-submitted character therefore updates the
/// record of the most recent character and advances the internal state
/// machine based on the new character.
#[derive(Debug)]
pub struct GraphemeMachine {
    state: State,
    prev: Option<CharProperties>,
}

impl GraphemeMachine {
    /// Constructs a new [`GraphemeMachine`] in an initial "start of input"
    /// state.
    pub fn new() -> Self {
        GraphemeMachine {
            state: State::Base,
            prev: None,
        }
    }

    /// Advances the state machine for a character with the given properties,
    /// returning the action to take at the boundary between this and the
    /// previous character (if any).
    ///
    /// If the result is [`ClusterAction::Split`] then the character whose
    /// properties were submitted should be treated as the beginning of a new
    /// grapheme cluster. If [`ClusterAction::Continue`] then the new character
    /// should be treated as an extension of the current grapheme cluster.
    ///
    /// At the start of input when there is no previous character the action
    /// is always [`ClusterAction::Split`], because there is no current
    /// grapheme cluster to possibly extend.
    pub fn next_char_properties(&mut self, next: CharProperties) -> ClusterAction {
        let prev = self.prev.unwrap_or(CharProperties::NONE);
        let (boundary, next_state) = self.state.transition(prev, next);
        self.state = next_state;
        self.prev = Some(next);
        if boundary {
            ClusterAction::Split
        } else {
            ClusterAction::Continue
        }
    }

    /// Looks up the [`CharProperties`] for the given character and then
    /// advances the state machine by passing it to [`Self::next_char_properties`].
    ///
    /// Refer to the documentation of that function for information on the
    /// meaning of the result.
    pub fn next_u8char(&mut self, c: u8char) -> ClusterAction {
        let props = CharProperties::for_u8char(c);
        self.next_char_properties(props)
    }

    /// Looks up the [`CharProperties`] for the given character and then
    /// advances the state machine by passing it to [`Self::next_char_properties`].
    ///
    /// Refer to the documentation of that function for information on the
    /// meaning of the result.
    ///
    /// Note that this library's lookup table for [`CharProperties`] is optimized
    /// for fast lookup of [`u8char`] rather than [`char`], so this will
    /// first convert the given character to the `u8char` representation. If
    /// you already have the character in `u8char` form then you can avoid
    /// unnecessary conversions by calling [`Self::next_u8char`] instead.
    pub fn next_char(&mut self, c: char) -> ClusterAction {
        let props = CharProperties::for_char(c);
        self.next_char_properties(props)
    }

    /// Tells the state machine that the input stream has ended.
    ///
    /// This resets the state machine to the "start of input" state so that
    /// any subsequently-submitted character cannot be treated as a continuation
    /// of the current grapheme cluster.
    ///
    /// This is named "end of input" because that's the terminology used in
    /// the Unicode text segmentation spec, but this could be used for any
    /// situation where the caller knows there is some non-text-related
    /// boundary between characters in a stream, such as when parsing a markup
    /// language and encountering the start of a tag or delimiter instead of
    /// literal text. In that case it's typically expected that whatever literal
    /// character follows the tag is treated as the beginning of a new grapheme
    /// cluster, regardless of what came before the tag.
    ///
    /// For consistency with the other machine-advancing methods this returns
    /// an action to take, but at the end of input the action is always
    /// [`ClusterAction::Split`] to mark the end of the final grapheme cluster.
    pub fn end_of_input(&mut self) -> ClusterAction {
        self.state = State::Base;
        self.prev = None;
        ClusterAction::Split
    }
}

impl Default for GraphemeMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// What to do with a new character after presenting it to a [GraphemeMachine].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    /// Treat the new character as an extension of the current grapheme cluster.
    Continue,
    /// Treat the current grapheme cluster as complete and begin a new one
    /// that initially consists only of the new character.
    Split,
}

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod tests;
