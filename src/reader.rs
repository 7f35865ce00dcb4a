//! Streaming backing over `std::io::Read`, per spec §4.6 "Streaming
//! semantics" and §5.
//!
//! Grounded on the ring-buffer idiom the pack's `jsonmodem` crate uses for
//! its own streaming input (`parser/buffer.rs`): a `VecDeque<u8>` that's
//! reserved in bulk on push and drained from the front slice on consume.
//! This module generalizes that to bytes (rather than `char`s, since our
//! trie needs to decode UTF-8 itself) and drives it against a
//! [`Splitter`] instead of a hand-written character scanner.

extern crate std;

use alloc::collections::VecDeque;
use std::io::Read;

use crate::error::SegmenterError;
use crate::segmenter::{SplitOutcome, Splitter};
use crate::segmenter::Segments;

const INITIAL_FILL: usize = 4096;

/// Driver over a streaming `std::io::Read` byte source. Maintains an
/// internal ring buffer: it feeds the splitter with `at_eof = false` until
/// the reader signals EOF, refilling and retrying whenever the splitter
/// asks for more data.
pub struct ReaderSegmenter<S, R> {
    reader: R,
    splitter: S,
    ring: VecDeque<u8>,
    reader_done: bool,
    /// Absolute byte offset of `ring`'s front relative to the start of the
    /// stream.
    base: usize,
    start: usize,
    end: usize,
    done: bool,
    err: Option<SegmenterError>,
    /// A copy of the most recently yielded token. `Value()` is specified to
    /// return memory valid until the next `Next()` call (spec §4.6); since
    /// the ring buffer's front is drained as soon as a token is recognized,
    /// streaming backings can't return a borrow into the ring itself and
    /// copy the token out instead.
    last_token: alloc::vec::Vec<u8>,
    /// The first segment, computed and cached the first time `first()` is
    /// called. Only well-defined when called before the first `next()`
    /// (see doc comment on `first`).
    first_cache: Option<alloc::vec::Vec<u8>>,
}

impl<S: Splitter, R: Read> ReaderSegmenter<S, R> {
    pub(crate) fn new(reader: R, splitter: S) -> Self {
        Self {
            reader,
            splitter,
            ring: VecDeque::with_capacity(INITIAL_FILL),
            reader_done: false,
            base: 0,
            start: 0,
            end: 0,
            done: false,
            err: None,
            last_token: alloc::vec::Vec::new(),
            first_cache: None,
        }
    }

    /// Pulls more bytes from the reader into the ring. Returns `Ok(true)`
    /// if any bytes were read, `Ok(false)` at EOF.
    fn fill(&mut self) -> Result<bool, SegmenterError> {
        let mut chunk = [0u8; INITIAL_FILL];
        loop {
            match self.reader.read(&mut chunk) {
                Ok(0) => {
                    self.reader_done = true;
                    return Ok(false);
                }
                Ok(n) => {
                    self.ring.extend(&chunk[..n]);
                    return Ok(true);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SegmenterError::Io(e)),
            }
        }
    }

    fn contiguous(&mut self) -> &[u8] {
        self.ring.make_contiguous()
    }

    /// Replaces the backing reader/splitter and resets all state.
    pub fn set_reader(&mut self, reader: R, splitter: S) {
        *self = Self::new(reader, splitter);
    }

    /// Returns the first segment of the stream. Well defined only when
    /// called before any call to `next()` has advanced the cursor — after
    /// that, the ring may have discarded bytes belonging to the first
    /// segment, and this returns the cached value from the first call
    /// instead of re-deriving it (spec §9, Open Question (a) territory:
    /// the design note calls `First()` "optional but testable", and this
    /// is the documented limitation of this streaming implementation).
    pub fn first(&mut self) -> Result<&[u8], SegmenterError> {
        if self.first_cache.is_none() {
            let mut scratch = self.splitter.clone();
            loop {
                let data = self.contiguous();
                match scratch.split(data, self.reader_done) {
                    SplitOutcome::Token(n) => {
                        self.first_cache = Some(self.contiguous()[..n].to_vec());
                        break;
                    }
                    SplitOutcome::Done => {
                        self.first_cache = Some(alloc::vec::Vec::new());
                        break;
                    }
                    SplitOutcome::NeedMoreData => {
                        if !self.fill()? {
                            // Treat remainder as a final degenerate token.
                            let data = self.contiguous();
                            self.first_cache = Some(data.to_vec());
                            break;
                        }
                    }
                }
            }
        }
        Ok(self.first_cache.as_deref().unwrap_or(&[]))
    }
}

impl<S: Splitter, R: Read> Segments for ReaderSegmenter<S, R> {
    fn next(&mut self) -> bool {
        if self.done || self.err.is_some() {
            return false;
        }
        loop {
            let at_eof = self.reader_done;
            let data = self.contiguous();
            match self.splitter.split(data, at_eof) {
                SplitOutcome::Token(n) => {
                    self.start = self.base;
                    self.end = self.base + n;
                    self.base = self.end;
                    self.last_token = self.ring.drain(..n).collect();
                    return true;
                }
                SplitOutcome::Done => {
                    self.done = true;
                    return false;
                }
                SplitOutcome::NeedMoreData => match self.fill() {
                    Ok(true) => continue,
                    Ok(false) => {
                        // EOF arrived; loop once more with at_eof = true so
                        // the splitter can finalize a trailing token.
                        continue;
                    }
                    Err(e) => {
                        self.err = Some(e);
                        self.done = true;
                        return false;
                    }
                },
            }
        }
    }

    fn value(&self) -> &[u8] {
        &self.last_token
    }

    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn err(&self) -> Option<&SegmenterError> {
        self.err.as_ref()
    }
}
