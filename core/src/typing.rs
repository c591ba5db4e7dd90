//! Typing effect: types a phrase one character at a time, holds it, deletes
//! it, holds the empty line, then moves on to the next phrase forever.
//!
//! The machine only computes frames. Whoever drives it shows `frame.text` and
//! waits `frame.delay_ms` before asking for the next one, which keeps the loop
//! cancellable at every step.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingTimings {
    pub type_ms: u32,
    pub hold_full_ms: u32,
    pub delete_ms: u32,
    pub hold_empty_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: 38,
            hold_full_ms: 900,
            delete_ms: 24,
            hold_empty_ms: 260,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Forward,
    HoldFull,
    Backward,
    HoldEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingCursor {
    pub phrase: usize,
    pub chars: usize,
    pub phase: TypingPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TypingMachine {
    phrases: Vec<Vec<char>>,
    timings: TypingTimings,
    cursor: TypingCursor,
}

/// Phrase list from a `data-words` attribute. Anything that is not a JSON
/// array of strings yields no phrases.
pub fn parse_phrases(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
}

impl TypingMachine {
    /// `None` when there is nothing to type.
    pub fn new(phrases: Vec<String>, timings: TypingTimings) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.iter().map(|phrase| phrase.chars().collect()).collect(),
            timings,
            cursor: TypingCursor {
                phrase: 0,
                chars: 0,
                phase: TypingPhase::Forward,
            },
        })
    }

    pub fn cursor(&self) -> TypingCursor {
        self.cursor
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    pub fn next_frame(&mut self) -> TypingFrame {
        let phrase = &self.phrases[self.cursor.phrase];
        let len = phrase.len();
        let text: String = phrase[..self.cursor.chars].iter().collect();
        let (delay_ms, next) = match self.cursor.phase {
            TypingPhase::Forward => {
                let next = if self.cursor.chars < len {
                    self.at(self.cursor.phrase, self.cursor.chars + 1, TypingPhase::Forward)
                } else {
                    self.at(self.cursor.phrase, len, TypingPhase::HoldFull)
                };
                (self.timings.type_ms, next)
            }
            TypingPhase::HoldFull => (
                self.timings.hold_full_ms,
                self.at(self.cursor.phrase, len, TypingPhase::Backward),
            ),
            TypingPhase::Backward => {
                let next = if self.cursor.chars > 0 {
                    self.at(self.cursor.phrase, self.cursor.chars - 1, TypingPhase::Backward)
                } else {
                    self.at(self.cursor.phrase, 0, TypingPhase::HoldEmpty)
                };
                (self.timings.delete_ms, next)
            }
            TypingPhase::HoldEmpty => {
                let phrase = (self.cursor.phrase + 1) % self.phrases.len();
                (self.timings.hold_empty_ms, self.at(phrase, 0, TypingPhase::Forward))
            }
        };
        self.cursor = next;
        TypingFrame { text, delay_ms }
    }

    fn at(&self, phrase: usize, chars: usize, phase: TypingPhase) -> TypingCursor {
        TypingCursor {
            phrase,
            chars,
            phase,
        }
    }
}

impl Iterator for TypingMachine {
    type Item = TypingFrame;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_phrases_degrade_to_empty() {
        assert!(parse_phrases(None).is_empty());
        assert!(parse_phrases(Some("not json")).is_empty());
        assert!(parse_phrases(Some(r#"{"a":1}"#)).is_empty());
        assert_eq!(parse_phrases(Some(r#"["a","b"]"#)), vec!["a", "b"]);
    }

    #[test]
    fn empty_list_does_no_work() {
        assert!(TypingMachine::new(Vec::new(), TypingTimings::default()).is_none());
    }

    #[test]
    fn multibyte_phrases_are_cut_on_char_boundaries() {
        let mut machine =
            TypingMachine::new(vec!["héé".to_string()], TypingTimings::default()).unwrap();
        let texts: Vec<String> = machine.by_ref().take(4).map(|frame| frame.text).collect();
        assert_eq!(texts, vec!["", "h", "hé", "héé"]);
    }
}
