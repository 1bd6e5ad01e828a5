//! Integration tests for word comparison
//!
//! Tests the full path: text → tokenizer → similarity → MistakeSet

use pretty_assertions::assert_eq;
use stenoscore::core::{compare, similarity, token_count, tokenize};
use stenoscore::types::{MistakeKind, MistakeSet};
use stenoscore::MISSPELLING_THRESHOLD;

const PASSAGES: [&str; 5] = [
    "the quick brown fox",
    "The committee shall convene at nine o'clock on the first Monday.",
    "  leading and   trailing   ",
    "",
    "a",
];

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Compare a passage with itself
#[test]
fn test_self_comparison_is_empty() {
    for passage in PASSAGES {
        assert!(compare(passage, passage).is_empty(), "{:?}", passage);
    }
}

/// Same inputs, same result
#[test]
fn test_idempotent() {
    let reference = "The committee shall convene at nine o'clock";
    let typed = "The comittee shal convene at 9 o'clock sharp";
    assert_eq!(compare(reference, typed), compare(reference, typed));
}

/// Exact identical passage
#[test]
fn test_identical_passage() {
    let result = compare("the quick brown fox", "the quick brown fox");
    assert_eq!(result, MistakeSet::default());
}

/// "quikc" is two edits from "quick": 3/5 = 0.6, not above 0.7
#[test]
fn test_transposed_letters_are_wrong() {
    assert!((similarity("quick", "quikc") - 0.6).abs() < 1e-12);
    assert!(similarity("quick", "quikc") <= MISSPELLING_THRESHOLD);

    let result = compare("the quick brown fox", "the quikc brown fox");
    assert_eq!(result.wrong(), words(&["quikc"]).as_slice());
    assert!(result.missed().is_empty());
    assert!(result.misspelled().is_empty());
}

#[test]
fn test_unrelated_word() {
    let result = compare("the quick brown fox", "the slow brown fox");
    assert_eq!(result.wrong(), words(&["slow"]).as_slice());
    assert_eq!(result.total(), 1);
}

#[test]
fn test_missed_and_extra_words() {
    assert_eq!(compare("a b c", "a b").missed(), words(&["c"]).as_slice());
    assert_eq!(compare("a b", "a b c").wrong(), words(&["c"]).as_slice());
}

/// Realistic transcript with every kind of mistake
#[test]
fn test_mixed_transcript() {
    let reference = "The committee shall convene at nine o'clock on Monday";
    let typed = "The comittee shal convene at 9 o'clock on";

    let result = compare(reference, typed);

    // comittee: 1 edit / 9 = 0.889; shal: 1 edit / 5 = 0.8
    assert_eq!(result.misspelled(), words(&["committee", "shall"]).as_slice());
    // "9" vs "nine": 4 edits / 4 = 0.0
    assert_eq!(result.wrong(), words(&["9"]).as_slice());
    assert_eq!(result.missed(), words(&["Monday"]).as_slice());
}

/// A dropped word shifts every later position
#[test]
fn test_positional_alignment() {
    let result = compare("one two three four", "one three four");
    // two/three, three/four are wrong, four is missed
    assert_eq!(result.wrong(), words(&["three", "four"]).as_slice());
    assert_eq!(result.missed(), words(&["four"]).as_slice());
    assert!(result.misspelled().is_empty());
}

/// Mistakes sum to positions minus exact matches
#[test]
fn test_classification_counts() {
    let cases = [
        ("the quick brown fox", "the quikc brown fox jumps over"),
        ("a b c d e", "a x c"),
        ("alpha beta", "alpah beta gamma delta"),
        ("", "stray words"),
        ("only reference", ""),
    ];

    for (reference, typed) in cases {
        let r = tokenize(reference);
        let t = tokenize(typed);
        let exact = r.iter().zip(t.iter()).filter(|(a, b)| a == b).count();
        let expected = r.len().max(t.len()) - exact;

        let result = compare(reference, typed);
        assert_eq!(result.total(), expected, "{:?} vs {:?}", reference, typed);
        assert_eq!(result.iter().count(), expected);
    }
}

/// Empty text has zero words, not one empty word
#[test]
fn test_empty_input_tokenizes_to_nothing() {
    assert_eq!(token_count(""), 0);
    assert_eq!(token_count(" \t\n"), 0);
    assert!(compare("", "   ").is_empty());
}

/// Mistake set serializes to the stored shape
#[test]
fn test_json_shape() {
    let result = compare("a b c", "a x");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"missed": ["c"], "wrong": ["x"], "misspelled": []})
    );

    let back: MistakeSet = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_iter_order_and_kinds() {
    let result = compare("cat brown c", "dog brwn");
    let items: Vec<(MistakeKind, &str)> = result.iter().collect();
    assert_eq!(
        items,
        vec![
            (MistakeKind::Missed, "c"),
            (MistakeKind::Wrong, "dog"),
            (MistakeKind::Misspelled, "brown"),
        ]
    );
}
