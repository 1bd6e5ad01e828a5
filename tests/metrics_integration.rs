//! Integration tests for WPM, accuracy and attempt scoring

use stenoscore::core::{accuracy, compare, score_attempt, words_per_minute};
use stenoscore::types::AttemptRecord;
use stenoscore::Error;

#[test]
fn test_wpm_five_words_one_minute() {
    assert_eq!(words_per_minute("one two three four five", 60.0).unwrap(), 5);
}

#[test]
fn test_wpm_fractional_duration() {
    // 6 words in 45s = 8 wpm
    assert_eq!(words_per_minute("a b c d e f", 45.0).unwrap(), 8);
    // 7 words in 90s = 4.67
    assert_eq!(words_per_minute("a b c d e f g", 90.0).unwrap(), 5);
}

#[test]
fn test_wpm_zero_duration_is_invalid_argument() {
    match words_per_minute("a b c", 0.0) {
        Err(Error::InvalidArgument(msg)) => assert!(msg.contains("duration")),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_accuracy_is_100_when_no_mistakes() {
    let pairs = [
        ("the quick brown fox", "the quick brown fox"),
        ("  spaced   out  ", "spaced out"),
    ];
    for (reference, typed) in pairs {
        assert!(compare(reference, typed).is_empty());
        assert_eq!(accuracy(reference, typed).unwrap(), 100);
    }
}

#[test]
fn test_accuracy_counts_every_kind() {
    // 10 words: 1 misspelled (quikk), 1 wrong (cat), 1 missed (dog)
    let reference = "the quick brown fox jumps over the lazy old dog";
    let typed = "the quikk brown cat jumps over the lazy old";
    let mistakes = compare(reference, typed);
    assert_eq!(mistakes.misspelled().len(), 1);
    assert_eq!(mistakes.wrong().len(), 1);
    assert_eq!(mistakes.missed().len(), 1);
    assert_eq!(accuracy(reference, typed).unwrap(), 70);
}

#[test]
fn test_accuracy_goes_negative_for_long_transcripts() {
    let reference = "hello world";
    let typed = "hello world and a lot of extra words";
    // 6 extra words over 2 reference words
    assert_eq!(accuracy(reference, typed).unwrap(), -200);
}

#[test]
fn test_accuracy_empty_reference_is_invalid_argument() {
    assert!(matches!(accuracy("", "typed"), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_score_attempt_json_roundtrip() {
    let record = score_attempt(Some(3), "the quick brown fox", "the quick brwn fox", 30).unwrap();
    assert_eq!(record.wpm, 8);
    assert_eq!(record.accuracy, 75);
    assert_eq!(record.mistakes.misspelled(), ["brown".to_string()].as_slice());

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"typed_content\""));
    assert!(json.contains("\"mistakes\""));
    assert!(json.contains("\"timestamp\""));

    let back: AttemptRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_parseable_output_format() {
    let record = score_attempt(None, "a b c", "a b", 60).unwrap();
    let formatted = record.to_parseable_string();
    assert!(formatted.contains("wpm=2"));
    assert!(formatted.contains("accuracy=67"));
    assert!(formatted.contains("missed=1"));
    assert!(formatted.contains("duration=60s"));
}
