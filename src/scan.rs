//! Lookback/lookahead helpers shared by the Words and Sentences splitters.
//!
//! Graphemes doesn't use these: every GB rule is expressible against the
//! immediately-previous property plus a little run-length state (regional
//! indicator parity), per spec §4.5.

use crate::categories::PropMask;
use crate::trie::{self, Range};

/// Scans `data` backwards looking for the nearest non-`ignore` rune,
/// skipping `ignore` runes transparently (WB4/SB5). Returns the byte offset
/// where that rune starts if its mask intersects `target`; returns `None`
/// if the nearest non-ignore rune doesn't match, or if `data` is exhausted
/// first.
///
/// This is *not* an unbounded back-scan: it stops at the first non-ignore
/// rune it finds, matching or not.
pub(crate) fn previous_index<M: PropMask>(
    table: &[Range<M>],
    target: M,
    ignore: M,
    data: &[u8],
) -> Option<usize> {
    let mut pos = data.len();
    loop {
        if pos == 0 {
            return None;
        }
        let (scalar, width) = trie::decode_last(&data[..pos]);
        let width = width.max(1) as usize;
        let start = pos.saturating_sub(width);
        let props = trie::mask_for_scalar(table, scalar);
        if props.intersects(ignore) {
            pos = start;
            continue;
        }
        return if props.intersects(target) { Some(start) } else { None };
    }
}

/// `previous_index(..) != None`.
#[allow(dead_code)]
pub(crate) fn previous<M: PropMask>(table: &[Range<M>], target: M, ignore: M, data: &[u8]) -> bool {
    previous_index(table, target, ignore, data).is_some()
}

/// Outcome of a forward lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Subsequent {
    /// The nearest non-ignore rune (after skipping `ignore` runes at
    /// `data[..advance]`) matches `target`; it starts at byte offset
    /// `advance` within `data`.
    Found { advance: usize },
    /// The nearest non-ignore rune doesn't match `target`.
    NotFound,
    /// `data` ran out while still inside a run of `ignore` runes, or mid-rune
    /// at the buffer edge, and `!at_eof`: the caller needs more bytes before
    /// it can decide.
    NeedMore,
}

/// Scans `data` forwards from its start, skipping `ignore` runes
/// transparently, looking for the nearest non-ignore rune and testing it
/// against `target`.
pub(crate) fn subsequent<M: PropMask>(
    table: &[Range<M>],
    target: M,
    ignore: M,
    data: &[u8],
    at_eof: bool,
) -> Subsequent {
    let mut offset = 0usize;
    loop {
        if offset >= data.len() {
            return if at_eof { Subsequent::NotFound } else { Subsequent::NeedMore };
        }
        let (mask, width) = trie::lookup(table, &data[offset..], at_eof);
        if width == 0 {
            return Subsequent::NeedMore;
        }
        if mask.intersects(ignore) {
            offset += width as usize;
            continue;
        }
        return if mask.intersects(target) {
            Subsequent::Found { advance: offset }
        } else {
            Subsequent::NotFound
        };
    }
}

/// Scans `data` forwards from its start, skipping runes whose mask does
/// **not** intersect `stop`, until it finds one that does, and tests that
/// rune against `target`. This is `subsequent`'s complement-polarity
/// sibling: `subsequent` names a transparent "ignore" set and matches
/// whatever isn't in it, whereas some rules (SB8's `(¬(OLetter|Upper|Lower|
/// ParaSep|SATerm))* Lower`) instead name the set that *stops* the skip and
/// only test the rune that belongs to it -- which can't be expressed as a
/// positive "ignore" mask, since the runes being skipped over (`Sp`,
/// `Numeric`, `SContinue`, `Close`, `Other`, ...) aren't a single named
/// category union the way `Extend|Format|ZWJ` is.
pub(crate) fn subsequent_until<M: PropMask>(
    table: &[Range<M>],
    target: M,
    stop: M,
    data: &[u8],
    at_eof: bool,
) -> Subsequent {
    let mut offset = 0usize;
    loop {
        if offset >= data.len() {
            return if at_eof { Subsequent::NotFound } else { Subsequent::NeedMore };
        }
        let (mask, width) = trie::lookup(table, &data[offset..], at_eof);
        if width == 0 {
            return Subsequent::NeedMore;
        }
        if !mask.intersects(stop) {
            offset += width as usize;
            continue;
        }
        return if mask.intersects(target) {
            Subsequent::Found { advance: offset }
        } else {
            Subsequent::NotFound
        };
    }
}
