//! Error taxonomy, per spec §7.
//!
//! Malformed UTF-8 is not an error: the trie and splitters degrade to a
//! one-byte, no-properties rune and keep going (§7, "Recoverable,
//! inline"). The only terminal, sticky error a [`crate::segmenter::Segmenter`]
//! can report is a streaming read failure, which is `std`-only since the
//! non-streaming backings never perform I/O.
//!
//! Grounded on `AaronFriel-jsonmodem`'s `parser/error.rs`: a small,
//! `thiserror`-derived enum with `#[error("...")]` display strings and a
//! `#[from]` conversion, rather than a hand-rolled `Display` impl.

/// Terminal error surface for a [`crate::segmenter::Segmenter`].
///
/// Once an error is recorded it is sticky: subsequent calls to `next()`
/// return `false` without attempting further reads, and `err()` keeps
/// returning this value.
#[derive(Debug, thiserror::Error)]
pub enum SegmenterError {
    /// The underlying reader of a streaming backing failed. Malformed
    /// UTF-8 in the *data* itself is never reported this way; this is only
    /// for I/O failures reading the stream.
    #[cfg(feature = "std")]
    #[error("I/O error reading streaming input: {0}")]
    Io(#[from] std::io::Error),
}

/// Returned when a [`crate::joiners::Joiners`] configuration is given a
/// scalar outside the valid, non-surrogate Unicode range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JoinersError {
    #[error("scalar value {0:#X} is not a valid, non-surrogate Unicode scalar")]
    InvalidScalar(u32),
}
