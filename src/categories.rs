//! Category bitmasks shared by the Words and Sentences splitters.
//!
//! Each splitter defines its own small `u32` bitmask type, since the Words
//! and Sentences property spaces (`Word_Break` plus the derived
//! `Extended_Pictographic` flag, and `Sentence_Break`) are independent of
//! each other and of the Graphemes property space in `crate::graphemes`.
//! [`PropMask`] is the common currency the lookback/lookahead helpers in
//! [`crate::scan`] and the generic trie walk in [`crate::trie`] are written
//! against, so that one copy of that logic serves both splitters.

/// A splitter-specific property bitmask: one bit per base category, plus
/// precomputed unions (e.g. `AHLetter = ALetter | HebrewLetter`) as
/// additional associated constants on the concrete type.
pub trait PropMask: Copy + core::fmt::Debug + PartialEq + Eq {
    /// The empty mask, i.e. "none of this splitter's categories apply".
    const NONE: Self;

    fn raw(self) -> u32;
    fn from_raw(raw: u32) -> Self;

    fn intersects(self, other: Self) -> bool {
        self.raw() & other.raw() != 0
    }

    fn union(self, other: Self) -> Self {
        Self::from_raw(self.raw() | other.raw())
    }
}

macro_rules! prop_mask_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(u32);

        impl $name {
            /// Builds a mask directly from a raw bit pattern. Used internally
            /// by the generated scalar tables; prefer the named constants
            /// elsewhere.
            pub const fn from_bits(bits: u32) -> Self {
                Self(bits)
            }

            pub const fn bits(self) -> u32 {
                self.0
            }

            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub const fn merge(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                self.merge(rhs)
            }
        }

        impl $crate::categories::PropMask for $name {
            const NONE: Self = Self(0);

            fn raw(self) -> u32 {
                self.0
            }

            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

prop_mask_type!(
    /// `Word_Break` category bits, plus the derived `Extended_Pictographic`
    /// flag (WB3c needs it alongside the ordinary Word_Break value, exactly
    /// as Graphemes needs it alongside `Grapheme_Cluster_Break`).
    WordsProps
);

impl WordsProps {
    pub const NONE: Self = Self(0);
    pub const CR: Self = Self(1 << 0);
    pub const LF: Self = Self(1 << 1);
    pub const NEWLINE: Self = Self(1 << 2);
    pub const EXTEND: Self = Self(1 << 3);
    pub const FORMAT: Self = Self(1 << 4);
    pub const ZWJ: Self = Self(1 << 5);
    pub const WSEGSPACE: Self = Self(1 << 6);
    pub const ALETTER: Self = Self(1 << 7);
    pub const HEBREW_LETTER: Self = Self(1 << 8);
    pub const NUMERIC: Self = Self(1 << 9);
    pub const MIDLETTER: Self = Self(1 << 10);
    pub const MIDNUM: Self = Self(1 << 11);
    pub const MIDNUMLET: Self = Self(1 << 12);
    pub const SINGLE_QUOTE: Self = Self(1 << 13);
    pub const DOUBLE_QUOTE: Self = Self(1 << 14);
    pub const KATAKANA: Self = Self(1 << 15);
    pub const EXTENDNUMLET: Self = Self(1 << 16);
    pub const REGIONAL_INDICATOR: Self = Self(1 << 17);
    pub const EXTENDED_PICTOGRAPHIC: Self = Self(1 << 18);

    /// WB5/6/7/9/10/13a/13b: `ALetter` and `Hebrew_Letter` behave alike.
    pub const AHLETTER: Self = Self(Self::ALETTER.0 | Self::HEBREW_LETTER.0);
    /// WB6/7/11/12: `MidNumLet` and `Single_Quote` behave alike.
    pub const MIDNUMLETQ: Self = Self(Self::MIDNUMLET.0 | Self::SINGLE_QUOTE.0);
    /// WB4: transparent categories skipped by every rule from WB5 onward.
    pub const IGNORE: Self = Self(Self::EXTEND.0 | Self::FORMAT.0 | Self::ZWJ.0);
}

prop_mask_type!(
    /// `Sentence_Break` category bits.
    SentencesProps
);

impl SentencesProps {
    pub const NONE: Self = Self(0);
    pub const CR: Self = Self(1 << 0);
    pub const LF: Self = Self(1 << 1);
    pub const SEP: Self = Self(1 << 2);
    pub const EXTEND: Self = Self(1 << 3);
    pub const FORMAT: Self = Self(1 << 4);
    pub const SP: Self = Self(1 << 5);
    pub const LOWER: Self = Self(1 << 6);
    pub const UPPER: Self = Self(1 << 7);
    pub const OLETTER: Self = Self(1 << 8);
    pub const NUMERIC: Self = Self(1 << 9);
    pub const ATERM: Self = Self(1 << 10);
    pub const SCONTINUE: Self = Self(1 << 11);
    pub const STERM: Self = Self(1 << 12);
    pub const CLOSE: Self = Self(1 << 13);

    /// SB4: hard paragraph breaks.
    pub const PARASEP: Self = Self(Self::SEP.0 | Self::CR.0 | Self::LF.0);
    /// SB7/8/8a/9/10/11: `STerm` and `ATerm` behave alike as sentence
    /// terminators.
    pub const SATERM: Self = Self(Self::STERM.0 | Self::ATERM.0);
    /// SB5: transparent categories.
    pub const IGNORE: Self = Self(Self::EXTEND.0 | Self::FORMAT.0);
}
