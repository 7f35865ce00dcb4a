//! Sentences splitter, SB1–SB11 + SB998 (spec §4.4).
//!
//! Mirrors `words.rs`'s shape (a stateless-between-calls `Splitter` that
//! scans forward from one boundary to the next) but additionally threads
//! the shadow variables spec §4.4/§9 call for: `last_ex_ignore`,
//! `last_ex_ignore_sp`, `last_ex_ignore_close`, `last_ex_ignore_sp_close`.
//! They're recomputed in the order the spec requires — less specific
//! first — so each is always in sync with the others.

use crate::categories::{PropMask, SentencesProps};
use crate::scan;
use crate::segmenter::{Segmenter, SplitOutcome, Splitter};
use crate::trie::{self, Range};

#[cfg(feature = "std")]
use crate::reader::ReaderSegmenter;

use SentencesProps as P;

/// A hand-curated subset of `SentenceBreakProperty.txt`, sorted by scalar
/// range. See `crate::trie` for why this isn't the full Unicode scalar
/// space.
const TABLE: &[Range<SentencesProps>] = &[
    (0x09, 0x09, P::SP),
    (0x0A, 0x0A, P::LF),
    (0x0D, 0x0D, P::CR),
    (0x20, 0x20, P::SP),
    (0x21, 0x21, P::STERM),  // !
    (0x22, 0x22, P::CLOSE),  // "
    (0x27, 0x27, P::CLOSE),  // '
    (0x28, 0x29, P::CLOSE),  // ( )
    (0x2C, 0x2C, P::SCONTINUE),
    (0x2E, 0x2E, P::ATERM),  // .
    (0x30, 0x39, P::NUMERIC),
    (0x3A, 0x3A, P::SCONTINUE),
    (0x3F, 0x3F, P::STERM),  // ?
    (0x41, 0x5A, P::UPPER),
    (0x5B, 0x5B, P::CLOSE),  // [
    (0x5D, 0x5D, P::CLOSE),  // ]
    (0x61, 0x7A, P::LOWER),
    (0x85, 0x85, P::SEP),
    (0x300, 0x36F, P::EXTEND),
    (0x2018, 0x2019, P::CLOSE),
    (0x201C, 0x201D, P::CLOSE),
    (0x2028, 0x2029, P::SEP),
    (0xFE00, 0xFE0F, P::EXTEND),
];

fn lookup(bytes: &[u8], at_eof: bool) -> (SentencesProps, u8) {
    trie::lookup(TABLE, bytes, at_eof)
}

/// Tracks the "most recent non-Ignore rune" at increasing levels of
/// specificity, per spec §4.4/§9. Each call to [`Shadows::push`] updates
/// all four in the canonical order (least to most specific) so SB8's
/// forward scan and SB8a/9/10/11's look-backs always see a consistent
/// view.
#[derive(Debug, Clone, Copy)]
struct Shadows {
    last_ex_ignore: SentencesProps,
    /// The non-Ignore rune immediately before `last_ex_ignore` -- needed by
    /// SB7, which (unlike SB8/8a/9/10/11) has no `Close*`/`Sp*` wildcard and
    /// so must see the true immediate predecessor of an `ATerm`.
    last_last_ex_ignore: SentencesProps,
    last_ex_ignore_sp: SentencesProps,
    last_ex_ignore_close: SentencesProps,
    last_ex_ignore_sp_close: SentencesProps,
}

impl Shadows {
    const INITIAL: Self = Self {
        last_ex_ignore: P::NONE,
        last_last_ex_ignore: P::NONE,
        last_ex_ignore_sp: P::NONE,
        last_ex_ignore_close: P::NONE,
        last_ex_ignore_sp_close: P::NONE,
    };

    /// Updates every shadow in canonical order: the least specific
    /// (`last_ex_ignore`) first, so the more specific ones can see what it
    /// was about to become.
    fn push(&mut self, props: SentencesProps) {
        self.last_last_ex_ignore = self.last_ex_ignore;
        self.last_ex_ignore = props;
        if !props.contains(P::SP) {
            self.last_ex_ignore_sp = props;
        }
        if !props.contains(P::CLOSE) {
            self.last_ex_ignore_close = props;
        }
        if !props.contains(P::SP) && !props.contains(P::CLOSE) {
            self.last_ex_ignore_sp_close = props;
        }
    }
}

enum Decision {
    Break,
    NoBreak,
    NeedMore,
}

/// Sentences splitter implementing SB1–SB11 and SB998.
#[derive(Debug, Clone, Default)]
pub struct SentencesSplitter;

impl SentencesSplitter {
    pub fn new() -> Self {
        Self
    }

    /// `from_cur` is the remaining buffer *starting at* `cur` itself (not
    /// after it) -- SB8's wildcard scan needs to test `cur` as its own
    /// first candidate, since the `Close*`/`Sp*` prefix it's looking past
    /// may already have been fully consumed by the time `cur` is reached.
    fn decide(&self, last: SentencesProps, shadows: &Shadows, cur: SentencesProps, from_cur: &[u8], at_eof: bool) -> Decision {
        // SB3: CR x LF.
        if last.contains(P::CR) && cur.contains(P::LF) {
            return Decision::NoBreak;
        }
        // SB4: hard break after a paragraph separator.
        if last.contains(P::PARASEP) {
            return Decision::Break;
        }
        // SB5: Extend/Format are transparent, always attaching forward.
        if cur.contains(P::IGNORE) {
            return Decision::NoBreak;
        }
        let last = shadows.last_ex_ignore;

        // SB6: ATerm x Numeric.
        if last.contains(P::ATERM) && cur.contains(P::NUMERIC) {
            return Decision::NoBreak;
        }
        // SB7: (Upper|Lower) ATerm x Upper. No Close*/Sp* wildcard here, so
        // the rune strictly before the ATerm must itself be Upper or Lower.
        if last.contains(P::ATERM) && cur.contains(P::UPPER) {
            let before_aterm = shadows.last_last_ex_ignore;
            if before_aterm.contains(P::UPPER) || before_aterm.contains(P::LOWER) {
                return Decision::NoBreak;
            }
        }
        // SB8: ATerm Close* Sp* x (¬(OLetter|Upper|Lower|ParaSep|SATerm))* Lower.
        // The runes skipped on the way to a possible `Lower` are everything
        // *outside* the terminating set, which isn't expressible as a
        // positive "ignore" mask (it includes Sp, Numeric, SContinue,
        // Close, and plain "Other" runes alike) -- so this scans with
        // `subsequent_until` against the terminating set itself, stopping
        // at the first rune that belongs to it and testing that one for
        // `Lower`.
        if shadows.last_ex_ignore_sp_close.contains(P::ATERM) {
            let terminating =
                P::from_bits(P::OLETTER.bits() | P::UPPER.bits() | P::LOWER.bits() | P::PARASEP.bits() | P::SATERM.bits());
            match scan::subsequent_until(TABLE, P::LOWER, terminating, from_cur, at_eof) {
                scan::Subsequent::Found { .. } => return Decision::NoBreak,
                scan::Subsequent::NeedMore => return Decision::NeedMore,
                scan::Subsequent::NotFound => {}
            }
        }
        // SB8a: SATerm Close* Sp* x (SContinue|SATerm).
        if shadows.last_ex_ignore_sp_close.contains(P::SATERM) && (cur.contains(P::SCONTINUE) || cur.contains(P::SATERM)) {
            return Decision::NoBreak;
        }
        // SB9: SATerm Close* x (Close|Sp|ParaSep) -- no break before Close/Sp/ParaSep
        // directly following a SATerm run (possibly through Close).
        if shadows.last_ex_ignore_close.contains(P::SATERM) && (cur.contains(P::CLOSE) || cur.contains(P::SP) || cur.contains(P::PARASEP)) {
            return Decision::NoBreak;
        }
        // SB10: SATerm Close* Sp* x (Sp|ParaSep) -- swallow trailing spaces
        // (and a trailing paragraph separator) into the same non-break run
        // before the eventual SB11 break.
        if shadows.last_ex_ignore_sp_close.contains(P::SATERM) && (cur.contains(P::SP) || cur.contains(P::PARASEP)) {
            return Decision::NoBreak;
        }
        // SB11: SATerm Close* Sp* ÷ -- otherwise, once a sentence-terminating
        // run is behind us, break.
        if shadows.last_ex_ignore_sp_close.contains(P::SATERM) {
            return Decision::Break;
        }

        // SB998: otherwise, no break.
        Decision::NoBreak
    }
}

impl Splitter for SentencesSplitter {
    fn split(&mut self, data: &[u8], at_eof: bool) -> SplitOutcome {
        if data.is_empty() {
            return if at_eof { SplitOutcome::Done } else { SplitOutcome::NeedMoreData };
        }
        let (first_props, first_width) = lookup(data, at_eof);
        if first_width == 0 {
            return SplitOutcome::NeedMoreData;
        }
        let mut pos = first_width as usize;
        let mut last = first_props;
        let mut shadows = Shadows::INITIAL;
        shadows.push(first_props);

        loop {
            if pos >= data.len() {
                return if at_eof { SplitOutcome::Token(pos) } else { SplitOutcome::NeedMoreData };
            }
            let (cur_props, width) = lookup(&data[pos..], at_eof);
            if width == 0 {
                return SplitOutcome::NeedMoreData;
            }
            let decision = self.decide(last, &shadows, cur_props, &data[pos..], at_eof);
            match decision {
                Decision::Break => return SplitOutcome::Token(pos),
                Decision::NeedMore => return SplitOutcome::NeedMoreData,
                Decision::NoBreak => {
                    pos += width as usize;
                    last = cur_props;
                    if !cur_props.contains(P::IGNORE) {
                        shadows.push(cur_props);
                    }
                }
            }
        }
    }
}

/// Segments a byte buffer into sentences.
pub fn from_bytes(data: &[u8]) -> Segmenter<'_, SentencesSplitter> {
    Segmenter::new(data, SentencesSplitter::new())
}

/// Segments a `&str` into sentences.
pub fn from_str(text: &str) -> Segmenter<'_, SentencesSplitter> {
    Segmenter::new(text.as_bytes(), SentencesSplitter::new())
}

/// Segments a streaming byte source into sentences.
#[cfg(feature = "std")]
pub fn from_reader<R: std::io::Read>(reader: R) -> ReaderSegmenter<SentencesSplitter, R> {
    ReaderSegmenter::new(reader, SentencesSplitter::new())
}
