//! Property-based tests for the universal invariants spec §8 lists for
//! *every* splitter: round-trip, non-empty segments, coverage, contiguity,
//! determinism, streaming equivalence, and tolerance of invalid UTF-8.
//!
//! Grounded on the pack's own use of `quickcheck`/`quickcheck_macros` for
//! exactly this shape of property (e.g. `model-checking-kani`'s `proptest`
//! arbitrary-string round-trips, `Voultapher-bstr`'s fuzz-oriented tests):
//! generate arbitrary byte vectors -- `quickcheck`'s `Vec<u8>` `Arbitrary`
//! impl makes no attempt to stay valid UTF-8, which is exactly the "any
//! byte sequence, including non-UTF-8" input spec §8 calls for -- and
//! assert the invariants hold rather than hand-picking cases.
//!
//! Each of the four splitters (words, sentences, graphemes, phrases) gets
//! the same battery; the shared plumbing below is generic over
//! `crate::segmenter::Segmenter` so the actual properties aren't repeated
//! four times.

use alloc::vec::Vec;
use quickcheck_macros::quickcheck;

use crate::segmenter::{Segmenter, Segments, Splitter};

/// Runs a non-streaming `Segmenter` to completion, checking coverage,
/// contiguity, and non-emptiness as it goes, and returns the segments
/// collected so callers can additionally check round-trip/determinism.
fn run<S: Splitter>(mut seg: Segmenter<'_, S>) -> Option<Vec<Vec<u8>>> {
    let mut out = Vec::new();
    let mut prev_end = 0usize;
    while seg.next() {
        if seg.start() != prev_end {
            return None; // contiguity (spec §8 property 4)
        }
        if seg.value().is_empty() {
            return None; // non-empty (property 2)
        }
        out.push(seg.value().to_vec());
        prev_end = seg.end();
    }
    Some(out)
}

fn rebuild(segs: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::new();
    for s in segs {
        out.extend_from_slice(s);
    }
    out
}

/// Splits `data` into a deterministic sequence of small, varying-size
/// chunks derived from the data itself, so `quickcheck`'s shrinking stays
/// reproducible without pulling in a separate RNG dependency just for this.
fn chunks_of(data: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < data.len() {
        let step = 1 + (data[i] as usize % 4);
        let end = (i + step).min(data.len());
        out.push(&data[i..end]);
        i = end;
    }
    out
}

macro_rules! universal_invariants {
    ($mod_name:ident, $segmod:path) => {
        mod $mod_name {
            use super::*;
            use $segmod as target;

            #[quickcheck]
            fn round_trips_and_covers_input(data: Vec<u8>) -> bool {
                let Some(segs) = run(target::from_bytes(&data)) else {
                    return false;
                };
                rebuild(&segs) == data
            }

            #[quickcheck]
            fn deterministic(data: Vec<u8>) -> bool {
                let Some(a) = run(target::from_bytes(&data)) else {
                    return false;
                };
                let Some(b) = run(target::from_bytes(&data)) else {
                    return false;
                };
                a == b
            }

            #[cfg(feature = "std")]
            #[quickcheck]
            fn streaming_matches_non_streaming(data: Vec<u8>) -> bool {
                let Some(expected) = run(target::from_bytes(&data)) else {
                    return false;
                };

                struct ChunkedReader<'a> {
                    chunks: alloc::vec::IntoIter<&'a [u8]>,
                }
                impl<'a> std::io::Read for ChunkedReader<'a> {
                    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                        match self.chunks.next() {
                            None => Ok(0),
                            Some(chunk) => {
                                let n = chunk.len().min(buf.len());
                                buf[..n].copy_from_slice(&chunk[..n]);
                                Ok(n)
                            }
                        }
                    }
                }

                let reader = ChunkedReader {
                    chunks: chunks_of(&data).into_iter(),
                };
                let mut seg = target::from_reader(reader);
                let mut got = Vec::new();
                let mut prev_end = 0usize;
                while seg.next() {
                    if seg.start() != prev_end || seg.value().is_empty() {
                        return false;
                    }
                    got.push(seg.value().to_vec());
                    prev_end = seg.end();
                }
                seg.err().is_none() && got == expected
            }
        }
    };
}

universal_invariants!(words_invariants, crate::words);
universal_invariants!(sentences_invariants, crate::sentences);
universal_invariants!(graphemes_invariants, crate::graphemes);
universal_invariants!(phrases_invariants, crate::phrases);

/// spec §8 scenario 8: round-trip holds on a sizeable, non-UTF-8-guaranteed
/// random buffer, checked against all four splitters at once rather than
/// leaving it to `quickcheck`'s default (small) generated sizes.
#[test]
fn five_kb_arbitrary_bytes_round_trips_on_every_splitter() {
    // A small deterministic xorshift, seeded fixed, stands in for "a PRNG"
    // per spec §8 without adding a `rand` dependency just for one test.
    let mut state: u64 = 0x2545F4914F6CDD1D;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let data: Vec<u8> = (0..5000).map(|_| (next() & 0xFF) as u8).collect();

    let words = run(crate::words::from_bytes(&data)).expect("words invariants hold");
    assert_eq!(rebuild(&words), data);
    let sentences = run(crate::sentences::from_bytes(&data)).expect("sentences invariants hold");
    assert_eq!(rebuild(&sentences), data);
    let graphemes = run(crate::graphemes::from_bytes(&data)).expect("graphemes invariants hold");
    assert_eq!(rebuild(&graphemes), data);
    let phrases = run(crate::phrases::from_bytes(&data)).expect("phrases invariants hold");
    assert_eq!(rebuild(&phrases), data);
}
