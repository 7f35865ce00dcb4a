//! Phrases splitter (spec §4.6 / SPEC_FULL §4.6): a thin derivative of
//! Words that additionally breaks after any word segment consisting
//! entirely of clause-ending or clause-separating punctuation, merging
//! adjacent whitespace-only segments into the *following* phrase rather
//! than the one that just closed.
//!
//! spec.md calls phrase segmentation out of scope for respecification but
//! names it as existing upstream and describes it as "a thin derivative
//! of words + punctuation heuristics" -- this is that thin derivative,
//! nothing more: no tailoring beyond what [`crate::words::WordsSplitter`]
//! already exposes via [`crate::joiners::Joiners`].

use crate::segmenter::{Segmenter, SplitOutcome, Splitter};
use crate::trie::{self, Decoded};
use crate::words::WordsSplitter;

#[cfg(feature = "std")]
use crate::reader::ReaderSegmenter;

/// Clause-ending/clause-separating punctuation that closes a phrase,
/// beyond the sentence terminators in [`SATERM`]: `,` `;` `:` `—` `(` `)`
/// `"` `'`.
const CLAUSE_PUNCT: &[u32] = &[0x2C, 0x3B, 0x3A, 0x2014, 0x28, 0x29, 0x22, 0x27];

/// The Sentences splitter's `SATerm` set (`STerm ∪ ATerm`): `.` `!` `?`
/// plus the smart-quote/typographic equivalents already in
/// `crate::sentences`'s curated table as `Close`, which aren't terminators
/// themselves but travel with one -- kept out here since a lone closing
/// quote shouldn't by itself end a phrase. Scalars below are the
/// terminators proper.
const SATERM: &[u32] = &[0x2E, 0x21, 0x3F];

fn token_scalars_all_match(token: &[u8], set: &[u32]) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut pos = 0;
    while pos < token.len() {
        let (scalar, width) = match trie::decode(&token[pos..], true) {
            Decoded::Scalar { value, width } => (value, width as usize),
            Decoded::Invalid | Decoded::Incomplete => return false,
        };
        if !set.contains(&scalar) {
            return false;
        }
        pos += width;
    }
    true
}

fn is_clause_punct(token: &[u8]) -> bool {
    token_scalars_all_match(token, CLAUSE_PUNCT) || token_scalars_all_match(token, SATERM)
}

/// Phrases splitter: runs the Words cascade (WB1–WB15) internally and
/// groups consecutive word tokens into one phrase until a token made
/// entirely of clause punctuation or a sentence terminator closes it.
#[derive(Debug, Clone, Default)]
pub struct PhrasesSplitter {
    words: WordsSplitter,
}

impl PhrasesSplitter {
    pub fn new() -> Self {
        Self {
            words: WordsSplitter::new(),
        }
    }
}

impl Splitter for PhrasesSplitter {
    fn split(&mut self, data: &[u8], at_eof: bool) -> SplitOutcome {
        if data.is_empty() {
            return if at_eof { SplitOutcome::Done } else { SplitOutcome::NeedMoreData };
        }
        let mut pos = 0usize;
        loop {
            match self.words.split(&data[pos..], at_eof) {
                SplitOutcome::Token(n) => {
                    let token = &data[pos..pos + n];
                    pos += n;
                    if is_clause_punct(token) {
                        return SplitOutcome::Token(pos);
                    }
                    // Everything else -- ordinary words and whitespace
                    // alike -- just keeps extending the open phrase. Since
                    // only a punctuation token closes a phrase, whitespace
                    // is never left dangling at the end of one: it always
                    // ends up at the start of whichever phrase absorbs the
                    // next non-punctuation token.
                }
                SplitOutcome::NeedMoreData => return SplitOutcome::NeedMoreData,
                SplitOutcome::Done => {
                    return if pos > 0 { SplitOutcome::Token(pos) } else { SplitOutcome::Done };
                }
            }
        }
    }
}

/// Segments a byte buffer into phrases.
pub fn from_bytes(data: &[u8]) -> Segmenter<'_, PhrasesSplitter> {
    Segmenter::new(data, PhrasesSplitter::new())
}

/// Segments a `&str` into phrases.
pub fn from_str(text: &str) -> Segmenter<'_, PhrasesSplitter> {
    Segmenter::new(text.as_bytes(), PhrasesSplitter::new())
}

/// Segments a streaming byte source into phrases.
#[cfg(feature = "std")]
pub fn from_reader<R: std::io::Read>(reader: R) -> ReaderSegmenter<PhrasesSplitter, R> {
    ReaderSegmenter::new(reader, PhrasesSplitter::new())
}

#[cfg(test)]
mod tests;
