//! Hand-curated grapheme cluster conformance fixtures.
//!
//! Modeled on the shape of Unicode's official `GraphemeBreakTest.txt` (each
//! case is an input string plus its expected split into clusters) but this
//! is a small, hand-picked subset rather than a generated transcription of
//! that file -- see `crate::properties::table` for why. Coverage here
//! favors one representative case per GB rule plus the two scenarios from
//! the crate's own spec (👍🏼🐶 and 가각), not exhaustiveness.

pub(crate) struct Test {
    pub(crate) desc: &'static str,
    pub(crate) input: &'static [u8],
    pub(crate) expected: &'static [&'static [u8]],
}

pub(crate) static UNICODE_GRAPHEME_CLUSTER_TESTS: &[Test] = &[
    Test {
        desc: "GB3: CRLF never splits",
        input: b"\r\n",
        expected: &[b"\r\n"],
    },
    Test {
        desc: "GB4/GB5: controls always split, even from each other",
        input: b"a\nb",
        expected: &[b"a", b"\n", b"b"],
    },
    Test {
        desc: "GB6/GB7/GB8: Hangul syllables stay within one cluster",
        input: "가각".as_bytes(),
        expected: &["가".as_bytes(), "각".as_bytes()],
    },
    Test {
        desc: "GB9: Extend attaches to the previous cluster",
        input: "e\u{0301}".as_bytes(), // e + combining acute accent
        expected: &["e\u{0301}".as_bytes()],
    },
    Test {
        desc: "GB9a: SpacingMark attaches to the previous cluster",
        input: "\u{0915}\u{0940}".as_bytes(), // devanagari KA + vowel sign II
        expected: &["\u{0915}\u{0940}".as_bytes()],
    },
    Test {
        desc: "GB9b: Prepend attaches forward to the next cluster",
        input: "\u{0600}a".as_bytes(),
        expected: &["\u{0600}a".as_bytes()],
    },
    Test {
        desc: "GB9c: Devanagari consonant conjunct joined by a virama stays together",
        input: "\u{0915}\u{094D}\u{0915}".as_bytes(), // KA + virama + KA
        expected: &["\u{0915}\u{094D}\u{0915}".as_bytes()],
    },
    Test {
        desc: "GB11: ZWJ-joined emoji sequence with a skin tone modifier stays together",
        input: "\u{1F44D}\u{1F3FC}\u{200D}\u{1F44D}".as_bytes(), // thumbs up + modifier + ZWJ + thumbs up
        expected: &["\u{1F44D}\u{1F3FC}\u{200D}\u{1F44D}".as_bytes()],
    },
    Test {
        desc: "GB9 (Extend): thumbs up with a skin tone modifier and a standalone dog face",
        input: "\u{1F44D}\u{1F3FC}\u{1F436}".as_bytes(),
        expected: &["\u{1F44D}\u{1F3FC}".as_bytes(), "\u{1F436}".as_bytes()],
    },
    Test {
        desc: "GB12/GB13: regional indicator pairs bind, but a third one starts a new cluster",
        input: "\u{1F1EB}\u{1F1F7}\u{1F1E9}".as_bytes(), // FR flag pair + lone D
        expected: &["\u{1F1EB}\u{1F1F7}".as_bytes(), "\u{1F1E9}".as_bytes()],
    },
    Test {
        desc: "GB999: otherwise, every character is its own cluster",
        input: b"ab",
        expected: &[b"a", b"b"],
    },
];
