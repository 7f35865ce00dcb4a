//! Words splitter, WB1–WB15 plus the Joiners extension (spec §4.3).

#[cfg_attr(not(test), allow(unused_imports))]
use alloc::vec::Vec;

use crate::categories::{PropMask, WordsProps};
use crate::joiners::Joiners;
use crate::scan::{self, Subsequent};
use crate::segmenter::{Segmenter, SplitOutcome, Splitter};
use crate::trie::{self, Range};

#[cfg(feature = "std")]
use crate::reader::ReaderSegmenter;

use WordsProps as P;

/// A hand-curated subset of `WordBreakProperty.txt` plus the derived
/// `Extended_Pictographic` flag, sorted by scalar range. See
/// `crate::trie` for why this isn't the full Unicode scalar space.
const TABLE: &[Range<WordsProps>] = &[
    (0x09, 0x09, P::NONE), // tab: Other, same as most punctuation below
    (0x0A, 0x0A, P::LF),
    (0x0B, 0x0C, P::NEWLINE),
    (0x0D, 0x0D, P::CR),
    (0x20, 0x20, P::WSEGSPACE),
    (0x22, 0x22, P::DOUBLE_QUOTE),
    (0x27, 0x27, P::from_bits(P::MIDNUMLET.bits() | P::SINGLE_QUOTE.bits())),
    (0x2C, 0x2C, P::MIDNUM),
    (0x2E, 0x2E, P::MIDNUMLET), // full stop: Word_Break = MidNumLet
    (0x30, 0x39, P::NUMERIC),
    (0x3A, 0x3A, P::MIDLETTER),
    (0x3B, 0x3B, P::MIDNUM),
    (0x41, 0x5A, P::ALETTER),
    (0x5F, 0x5F, P::EXTENDNUMLET),
    (0x61, 0x7A, P::ALETTER),
    (0x85, 0x85, P::NEWLINE),
    (0x300, 0x36F, P::EXTEND),
    (0x5D0, 0x5EA, P::HEBREW_LETTER),
    (0x2028, 0x2029, P::NEWLINE),
    (0x200D, 0x200D, P::ZWJ),
    (0x30A0, 0x30FF, P::KATAKANA),
    (0xFE00, 0xFE0F, P::EXTEND),
    (0x1F1E6, 0x1F1FF, P::REGIONAL_INDICATOR),
    (0x1F300, 0x1F5FF, P::EXTENDED_PICTOGRAPHIC),
    (0x1F3FB, 0x1F3FF, P::EXTEND),
    (0x1F600, 0x1F64F, P::EXTENDED_PICTOGRAPHIC),
    (0x1F680, 0x1FAFF, P::EXTENDED_PICTOGRAPHIC),
];

fn lookup(bytes: &[u8], at_eof: bool) -> (WordsProps, u8) {
    trie::lookup(TABLE, bytes, at_eof)
}

fn scalar_of(bytes: &[u8]) -> u32 {
    match trie::decode(bytes, true) {
        trie::Decoded::Scalar { value, .. } => value,
        _ => 0,
    }
}

/// Outcome of evaluating the cascade at one rune boundary.
enum Decision {
    Break,
    NoBreak,
    NeedMore,
}

/// Words splitter implementing WB1–WB15, WB999, and the Joiners extension.
///
/// Each call to [`Splitter::split`] scans forward from a word boundary to
/// the next one, so unlike the Graphemes splitter this type carries no
/// cross-call state at all beyond the (immutable, shared) `Joiners`
/// configuration — every other piece of memory the cascade needs (`last`,
/// `last_ex_ignore`, the regional-indicator run length) is local to one
/// scan.
#[derive(Debug, Clone, Default)]
pub struct WordsSplitter {
    joiners: Option<Joiners>,
}

impl WordsSplitter {
    pub fn new() -> Self {
        Self { joiners: None }
    }

    /// Applies a Joiners configuration to this splitter (spec §4.3/§6).
    pub fn with_joiners(joiners: Joiners) -> Self {
        Self { joiners: Some(joiners) }
    }

    fn decide(
        &self,
        last: WordsProps,
        last_ex_ignore: WordsProps,
        last_ex_ignore_scalar: u32,
        ri_run: u32,
        consumed: &[u8],
        cur_scalar: u32,
        cur: WordsProps,
        rest: &[u8],
        at_eof: bool,
    ) -> Decision {
        // WB3: CR x LF.
        if last.contains(P::CR) && cur.contains(P::LF) {
            return Decision::NoBreak;
        }
        // WB3a/3b: break around Newline/CR/LF.
        if last.contains(P::NEWLINE) || last.contains(P::CR) || last.contains(P::LF) {
            return Decision::Break;
        }
        if cur.contains(P::NEWLINE) || cur.contains(P::CR) || cur.contains(P::LF) {
            return Decision::Break;
        }
        // WB3c: ZWJ x Extended_Pictographic.
        if last.contains(P::ZWJ) && cur.contains(P::EXTENDED_PICTOGRAPHIC) {
            return Decision::NoBreak;
        }
        // WB3d: WSegSpace x WSegSpace.
        if last.contains(P::WSEGSPACE) && cur.contains(P::WSEGSPACE) {
            return Decision::NoBreak;
        }
        // WB4: Ignore runes are always transparent, attaching to whatever
        // precedes them.
        if cur.contains(P::IGNORE) {
            return Decision::NoBreak;
        }

        // From here on, `last_ex_ignore` (not raw `last`) is the effective
        // predecessor, per WB4.
        let last = last_ex_ignore;
        let last_scalar = last_ex_ignore_scalar;

        // WB5.
        if last.contains(P::AHLETTER) && cur.contains(P::AHLETTER) {
            return Decision::NoBreak;
        }
        // WB6: AHLetter x (MidLetter|MidNumLetQ) AHLetter.
        if last.contains(P::AHLETTER) && (cur.contains(P::MIDLETTER) || cur.contains(P::MIDNUMLETQ)) {
            match scan::subsequent(TABLE, P::AHLETTER, P::IGNORE, rest, at_eof) {
                Subsequent::Found { .. } => return Decision::NoBreak,
                Subsequent::NeedMore => return Decision::NeedMore,
                Subsequent::NotFound => {}
            }
        }
        // WB7: (MidLetter|MidNumLetQ) x AHLetter, looking back past the
        // joining rune for an AHLetter.
        if cur.contains(P::AHLETTER) && (last.contains(P::MIDLETTER) || last.contains(P::MIDNUMLETQ)) {
            let before = &consumed[..consumed.len() - last_width(consumed)];
            if scan::previous_index(TABLE, P::AHLETTER, P::IGNORE, before).is_some() {
                return Decision::NoBreak;
            }
        }
        // WB7a: Hebrew_Letter x Single_Quote.
        if last.contains(P::HEBREW_LETTER) && cur.contains(P::SINGLE_QUOTE) {
            return Decision::NoBreak;
        }
        // WB7b: Hebrew_Letter x Double_Quote Hebrew_Letter.
        if last.contains(P::HEBREW_LETTER) && cur.contains(P::DOUBLE_QUOTE) {
            match scan::subsequent(TABLE, P::HEBREW_LETTER, P::IGNORE, rest, at_eof) {
                Subsequent::Found { .. } => return Decision::NoBreak,
                Subsequent::NeedMore => return Decision::NeedMore,
                Subsequent::NotFound => {}
            }
        }
        // WB7c: Double_Quote x Hebrew_Letter, looking back for Hebrew_Letter.
        if cur.contains(P::HEBREW_LETTER) && last.contains(P::DOUBLE_QUOTE) {
            let before = &consumed[..consumed.len() - last_width(consumed)];
            if scan::previous_index(TABLE, P::HEBREW_LETTER, P::IGNORE, before).is_some() {
                return Decision::NoBreak;
            }
        }
        // WB8/9/10.
        if last.contains(P::NUMERIC) && cur.contains(P::NUMERIC) {
            return Decision::NoBreak;
        }
        if last.contains(P::AHLETTER) && cur.contains(P::NUMERIC) {
            return Decision::NoBreak;
        }
        if last.contains(P::NUMERIC) && cur.contains(P::AHLETTER) {
            return Decision::NoBreak;
        }
        // WB11: Numeric x (MidNum|MidNumLetQ) Numeric.
        if last.contains(P::NUMERIC) && (cur.contains(P::MIDNUM) || cur.contains(P::MIDNUMLETQ)) {
            match scan::subsequent(TABLE, P::NUMERIC, P::IGNORE, rest, at_eof) {
                Subsequent::Found { .. } => return Decision::NoBreak,
                Subsequent::NeedMore => return Decision::NeedMore,
                Subsequent::NotFound => {}
            }
        }
        // WB12: (MidNum|MidNumLetQ) x Numeric, looking back for Numeric.
        if cur.contains(P::NUMERIC) && (last.contains(P::MIDNUM) || last.contains(P::MIDNUMLETQ)) {
            let before = &consumed[..consumed.len() - last_width(consumed)];
            if scan::previous_index(TABLE, P::NUMERIC, P::IGNORE, before).is_some() {
                return Decision::NoBreak;
            }
        }
        // WB13: Katakana x Katakana.
        if last.contains(P::KATAKANA) && cur.contains(P::KATAKANA) {
            return Decision::NoBreak;
        }
        // WB13a: (AHLetter|Numeric|Katakana|ExtendNumLet) x ExtendNumLet.
        let word_ish = P::from_bits(P::AHLETTER.bits() | P::NUMERIC.bits() | P::KATAKANA.bits() | P::EXTENDNUMLET.bits());
        if last.contains(word_ish) && cur.contains(P::EXTENDNUMLET) {
            return Decision::NoBreak;
        }
        // WB13b: ExtendNumLet x (AHLetter|Numeric|Katakana).
        let word_ish_no_enl = P::from_bits(P::AHLETTER.bits() | P::NUMERIC.bits() | P::KATAKANA.bits());
        if last.contains(P::EXTENDNUMLET) && cur.contains(word_ish_no_enl) {
            return Decision::NoBreak;
        }
        // WB15/16: Regional Indicator pairs, breaking after every second.
        if last.contains(P::REGIONAL_INDICATOR) && cur.contains(P::REGIONAL_INDICATOR) {
            return if ri_run % 2 == 1 { Decision::NoBreak } else { Decision::Break };
        }

        // Joiners extension, evaluated before the WB999 fallback.
        if let Some(joiners) = &self.joiners {
            if (last.contains(P::AHLETTER) || last.contains(P::NUMERIC)) && joiners.is_middle(cur_scalar) {
                match scan::subsequent(
                    TABLE,
                    P::from_bits(P::AHLETTER.bits() | P::NUMERIC.bits()),
                    P::IGNORE,
                    rest,
                    at_eof,
                ) {
                    Subsequent::Found { .. } => return Decision::NoBreak,
                    Subsequent::NeedMore => return Decision::NeedMore,
                    Subsequent::NotFound => {}
                }
            }
            if (cur.contains(P::AHLETTER) || cur.contains(P::NUMERIC)) && joiners.is_middle(last_scalar) {
                let before = &consumed[..consumed.len() - last_width(consumed)];
                if scan::previous_index(
                    TABLE,
                    P::from_bits(P::AHLETTER.bits() | P::NUMERIC.bits()),
                    P::IGNORE,
                    before,
                )
                .is_some()
                {
                    return Decision::NoBreak;
                }
            }
            if joiners.is_leading(last_scalar) && (cur.contains(P::AHLETTER) || cur.contains(P::NUMERIC)) {
                return Decision::NoBreak;
            }
        }

        Decision::Break
    }
}

/// Width of the rune ending at `data`'s tail, used to strip it off before a
/// look-back call that needs to see "the rune *before* the one we're
/// currently deciding about".
fn last_width(data: &[u8]) -> usize {
    trie::decode_last(data).1.max(1) as usize
}

impl Splitter for WordsSplitter {
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
        let mut last_ex_ignore = first_props;
        let mut last_ex_ignore_scalar = scalar_of(data);
        let mut ri_run = if first_props.contains(P::REGIONAL_INDICATOR) { 1 } else { 0 };

        loop {
            if pos >= data.len() {
                return if at_eof { SplitOutcome::Token(pos) } else { SplitOutcome::NeedMoreData };
            }
            let (cur_props, width) = lookup(&data[pos..], at_eof);
            if width == 0 {
                return SplitOutcome::NeedMoreData;
            }
            let cur_scalar = scalar_of(&data[pos..]);
            let decision = self.decide(
                last,
                last_ex_ignore,
                last_ex_ignore_scalar,
                ri_run,
                &data[..pos],
                cur_scalar,
                cur_props,
                &data[pos + width as usize..],
                at_eof,
            );
            match decision {
                Decision::Break => return SplitOutcome::Token(pos),
                Decision::NeedMore => return SplitOutcome::NeedMoreData,
                Decision::NoBreak => {
                    pos += width as usize;
                    last = cur_props;
                    if !cur_props.contains(P::IGNORE) {
                        last_ex_ignore = cur_props;
                        last_ex_ignore_scalar = cur_scalar;
                        ri_run = if cur_props.contains(P::REGIONAL_INDICATOR) { ri_run + 1 } else { 0 };
                    }
                }
            }
        }
    }

    /// All-ASCII-word-characters fast path (spec §4.3).
    fn first(&self, data: &[u8], at_eof: bool) -> Option<usize> {
        let is_ascii_word = |b: u8| b.is_ascii_alphanumeric();
        let mut n = 0;
        while n < data.len() && is_ascii_word(data[n]) {
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let boundary_ok = n == data.len() || data[n] == b' ';
        if boundary_ok {
            Some(n)
        } else {
            let mut scratch = self.clone();
            match scratch.split(data, at_eof) {
                SplitOutcome::Token(n) => Some(n),
                _ => None,
            }
        }
    }
}

/// Segments a byte buffer into words.
pub fn from_bytes(data: &[u8]) -> Segmenter<'_, WordsSplitter> {
    Segmenter::new(data, WordsSplitter::new())
}

/// Segments a `&str` into words.
pub fn from_str(text: &str) -> Segmenter<'_, WordsSplitter> {
    Segmenter::new(text.as_bytes(), WordsSplitter::new())
}

/// Segments a byte buffer into words using a Joiners configuration.
pub fn from_bytes_with_joiners(data: &[u8], joiners: Joiners) -> Segmenter<'_, WordsSplitter> {
    Segmenter::new(data, WordsSplitter::with_joiners(joiners))
}

/// Segments a `&str` into words using a Joiners configuration.
pub fn from_str_with_joiners(text: &str, joiners: Joiners) -> Segmenter<'_, WordsSplitter> {
    Segmenter::new(text.as_bytes(), WordsSplitter::with_joiners(joiners))
}

/// Segments a streaming byte source into words.
#[cfg(feature = "std")]
pub fn from_reader<R: std::io::Read>(reader: R) -> ReaderSegmenter<WordsSplitter, R> {
    ReaderSegmenter::new(reader, WordsSplitter::new())
}
