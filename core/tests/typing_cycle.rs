use folio_core::typing::parse_phrases;
use folio_core::{TypingMachine, TypingPhase, TypingTimings};

fn machine(phrases: &[&str]) -> TypingMachine {
    let phrases = phrases.iter().map(|phrase| phrase.to_string()).collect();
    TypingMachine::new(phrases, TypingTimings::default()).expect("phrases present")
}

#[test]
fn full_cycle_frames_match_timings() {
    let frames: Vec<(String, u32)> = machine(&["A", "Bb"])
        .take(15)
        .map(|frame| (frame.text, frame.delay_ms))
        .collect();
    let expected = vec![
        ("", 38),
        ("A", 38),
        ("A", 900),
        ("A", 24),
        ("", 24),
        ("", 260),
        ("", 38),
        ("B", 38),
        ("Bb", 38),
        ("Bb", 900),
        ("Bb", 24),
        ("B", 24),
        ("", 24),
        ("", 260),
        ("", 38),
    ];
    let expected: Vec<(String, u32)> = expected
        .into_iter()
        .map(|(text, delay)| (text.to_string(), delay))
        .collect();
    assert_eq!(frames, expected);
}

#[test]
fn visible_changes_follow_type_then_delete() {
    let mut shown: Vec<String> = Vec::new();
    for frame in machine(&["A", "Bb"]).take(14) {
        if shown.last() != Some(&frame.text) {
            shown.push(frame.text);
        }
    }
    assert_eq!(shown, vec!["", "A", "", "B", "Bb", "B", ""]);
}

#[test]
fn phrase_index_wraps() {
    let mut typing = machine(&["ab", "c"]);
    let mut phrases_seen = Vec::new();
    for _ in 0..40 {
        let cursor = typing.cursor();
        if cursor.phase == TypingPhase::Forward && cursor.chars == 0 {
            phrases_seen.push(cursor.phrase);
        }
        typing.next_frame();
    }
    assert_eq!(&phrases_seen[..4], &[0, 1, 0, 1]);
}

#[test]
fn displayed_text_is_always_a_prefix() {
    let phrases = ["hello", "wörld", ""];
    let mut typing = machine(&phrases);
    for _ in 0..200 {
        let phrase = phrases[typing.cursor().phrase];
        let frame = typing.next_frame();
        assert!(phrase.starts_with(&frame.text), "{:?} not a prefix of {phrase:?}", frame.text);
    }
}

#[test]
fn custom_timings_are_used() {
    let timings = TypingTimings {
        type_ms: 1,
        hold_full_ms: 2,
        delete_ms: 3,
        hold_empty_ms: 4,
    };
    let delays: Vec<u32> = TypingMachine::new(vec!["x".to_string()], timings)
        .expect("phrases present")
        .take(6)
        .map(|frame| frame.delay_ms)
        .collect();
    assert_eq!(delays, vec![1, 1, 2, 3, 3, 4]);
}

#[test]
fn phrases_come_from_json_attribute() {
    let phrases = parse_phrases(Some(r#"["Rust developer","Web builder"]"#));
    assert_eq!(phrases.len(), 2);
    assert!(TypingMachine::new(parse_phrases(Some("[]")), TypingTimings::default()).is_none());
}
