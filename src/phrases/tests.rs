use super::*;
use crate::segmenter::Segments;
use pretty_assertions::assert_eq;

fn segments(text: &str) -> Vec<String> {
    let mut seg = from_str(text);
    let mut out = Vec::new();
    while seg.next() {
        out.push(core::str::from_utf8(seg.value()).unwrap().to_string());
    }
    out
}

#[test]
fn two_clauses_split_after_comma() {
    assert_eq!(segments("Hello, world."), vec!["Hello,", " world."]);
}

#[test]
fn no_punctuation_is_one_phrase() {
    assert_eq!(segments("Hello world"), vec!["Hello world"]);
}

#[test]
fn whitespace_after_punctuation_merges_into_next_phrase() {
    let got = segments("Wait: really? Yes.");
    assert_eq!(got, vec!["Wait:", " really?", " Yes."]);
    // The leading space of every phrase after the first belongs to that
    // phrase, never trailing on the one before it.
    for phrase in &got[1..] {
        assert!(phrase.starts_with(' '));
    }
}

#[test]
fn round_trip_holds() {
    let input = "Mr. Smith said: \"Hello, world!\" Then he left.";
    let mut seg = from_bytes(input.as_bytes());
    let mut rebuilt = Vec::new();
    while seg.next() {
        rebuilt.extend_from_slice(seg.value());
    }
    assert_eq!(rebuilt, input.as_bytes());
}
