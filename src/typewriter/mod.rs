//! Phrase-cycling typewriter loop.
//!
//! Types a phrase out one character at a time, holds it, deletes it, and
//! moves on to the next phrase, wrapping forever. The same shape as the
//! engine's deferred clearing: no timers inside, just a stepper that
//! mutates state and tells the caller how long to wait before stepping
//! again.
//!
//! ```
//! use memory_match::typewriter::Typewriter;
//!
//! let mut tw = Typewriter::new(vec!["hi".into()]);
//! tw.set_active(true);
//!
//! tw.step().unwrap();
//! assert_eq!(tw.visible(), "h");
//! tw.step().unwrap();
//! assert_eq!(tw.visible(), "hi");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Pacing for the typewriter. Defaults are the original site's values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay between revealing characters.
    pub typing_interval: Duration,

    /// Delay between hiding characters.
    pub deleting_interval: Duration,

    /// How long a fully typed phrase stays on screen.
    pub pause: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(10),
            deleting_interval: Duration::from_millis(1),
            pause: Duration::from_millis(8000),
        }
    }
}

/// What the next step will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Revealing one more character per step.
    Typing,
    /// Full phrase shown; the next step starts deleting.
    Holding,
    /// Hiding one character per step.
    Deleting,
}

/// The typewriter state machine.
///
/// Each [`Typewriter::step`] advances one transition and returns the delay
/// the caller should wait before the next step, or `None` while the
/// typewriter is inactive (the original gated it on viewport visibility)
/// or has no phrases.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    /// Index into `phrases`; wraps.
    current: usize,
    /// Characters of the current phrase shown.
    shown: usize,
    stage: Stage,
    active: bool,
}

impl Typewriter {
    /// Create a typewriter with default pacing. Starts inactive.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self::with_config(phrases, TypewriterConfig::default())
    }

    /// Create a typewriter with explicit pacing. Starts inactive.
    #[must_use]
    pub fn with_config(phrases: Vec<String>, config: TypewriterConfig) -> Self {
        Self {
            phrases,
            config,
            current: 0,
            shown: 0,
            stage: Stage::Typing,
            active: false,
        }
    }

    /// Activate or freeze the typewriter.
    ///
    /// While inactive, `step` does nothing and the visible text stays put.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Is the typewriter currently stepping?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// What the next step will do.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The phrase currently being typed or deleted.
    #[must_use]
    pub fn current_phrase(&self) -> &str {
        self.phrases.get(self.current).map_or("", String::as_str)
    }

    /// The currently visible prefix of the current phrase.
    ///
    /// Always lands on a char boundary.
    #[must_use]
    pub fn visible(&self) -> &str {
        if self.phrases.is_empty() {
            return "";
        }
        let phrase = &self.phrases[self.current];
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(idx, _)| idx);
        &phrase[..end]
    }

    /// Advance one transition.
    ///
    /// Returns the delay before the caller should step again, or `None`
    /// while inactive or without phrases.
    pub fn step(&mut self) -> Option<Duration> {
        if !self.active || self.phrases.is_empty() {
            return None;
        }

        let phrase_chars = self.phrases[self.current].chars().count();

        match self.stage {
            Stage::Typing => {
                if self.shown < phrase_chars {
                    self.shown += 1;
                }
                if self.shown == phrase_chars {
                    self.stage = Stage::Holding;
                    Some(self.config.pause)
                } else {
                    Some(self.config.typing_interval)
                }
            }
            Stage::Holding => {
                self.stage = Stage::Deleting;
                Some(self.config.deleting_interval)
            }
            Stage::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.current = (self.current + 1) % self.phrases.len();
                    self.stage = Stage::Typing;
                    Some(self.config.typing_interval)
                } else {
                    Some(self.config.deleting_interval)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(phrases: &[&str]) -> Typewriter {
        let mut tw = Typewriter::new(phrases.iter().map(|s| s.to_string()).collect());
        tw.set_active(true);
        tw
    }

    #[test]
    fn test_types_out_phrase() {
        let mut tw = active(&["abc"]);

        assert_eq!(tw.visible(), "");
        assert_eq!(tw.step(), Some(TypewriterConfig::default().typing_interval));
        assert_eq!(tw.visible(), "a");
        tw.step();
        assert_eq!(tw.visible(), "ab");

        // Completing the phrase yields the long pause
        assert_eq!(tw.step(), Some(TypewriterConfig::default().pause));
        assert_eq!(tw.visible(), "abc");
        assert_eq!(tw.stage(), Stage::Holding);
    }

    #[test]
    fn test_deletes_and_advances() {
        let mut tw = active(&["ab", "cd"]);

        // Type "ab" and hold
        tw.step();
        tw.step();
        assert_eq!(tw.stage(), Stage::Holding);

        // Hold ends, then delete back to empty
        tw.step();
        assert_eq!(tw.stage(), Stage::Deleting);
        tw.step();
        assert_eq!(tw.visible(), "a");
        tw.step();
        assert_eq!(tw.visible(), "");

        // Advanced to the next phrase, typing again
        assert_eq!(tw.stage(), Stage::Typing);
        assert_eq!(tw.current_phrase(), "cd");
        tw.step();
        assert_eq!(tw.visible(), "c");
    }

    #[test]
    fn test_wraps_around() {
        let mut tw = active(&["a", "b"]);

        for _ in 0..2 {
            // type, hold, delete -> next phrase
            tw.step();
            tw.step();
            tw.step();
        }

        assert_eq!(tw.current_phrase(), "a");
    }

    #[test]
    fn test_inactive_is_frozen() {
        let mut tw = active(&["abc"]);
        tw.step();
        assert_eq!(tw.visible(), "a");

        tw.set_active(false);
        assert_eq!(tw.step(), None);
        assert_eq!(tw.visible(), "a");

        tw.set_active(true);
        tw.step();
        assert_eq!(tw.visible(), "ab");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = Typewriter::new(vec![]);
        tw.set_active(true);

        assert_eq!(tw.step(), None);
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_multibyte_char_boundaries() {
        let mut tw = active(&["héllo"]);

        tw.step();
        assert_eq!(tw.visible(), "h");
        tw.step();
        assert_eq!(tw.visible(), "hé");
        tw.step();
        assert_eq!(tw.visible(), "hél");
    }

    #[test]
    fn test_custom_pacing() {
        let config = TypewriterConfig {
            typing_interval: Duration::from_millis(50),
            deleting_interval: Duration::from_millis(20),
            pause: Duration::from_secs(2),
        };
        let mut tw = Typewriter::with_config(vec!["xy".into()], config);
        tw.set_active(true);

        assert_eq!(tw.step(), Some(Duration::from_millis(50)));
        assert_eq!(tw.step(), Some(Duration::from_secs(2)));
        assert_eq!(tw.step(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn test_empty_phrase_holds_immediately() {
        let mut tw = active(&[""]);

        // Zero chars: the first step completes typing and holds
        assert_eq!(tw.step(), Some(TypewriterConfig::default().pause));
        assert_eq!(tw.stage(), Stage::Holding);
        assert_eq!(tw.visible(), "");
    }
}
