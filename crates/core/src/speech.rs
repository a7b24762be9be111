//! Platform-independent pieces of spoken and audible feedback.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identical text spoken again within this window is dropped.
pub const DEDUPE_WINDOW_MS: i64 = 350;

//
// ─── VOICES ───────────────────────────────────────────────────────────────────
//

/// A synthesis voice as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub lang: String,
}

impl VoiceInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
        }
    }

    /// `Name (lang)`, as shown in diagnostics.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.lang)
    }

    fn lang_contains(&self, needle: &str) -> bool {
        self.lang.to_ascii_lowercase().contains(needle)
    }
}

/// Choose the friendliest available voice.
///
/// Preference: US-English "Samantha", then any US-English voice, then any
/// English voice, then whatever comes first.
#[must_use]
pub fn pick_voice(voices: &[VoiceInfo]) -> Option<&VoiceInfo> {
    voices
        .iter()
        .find(|v| v.lang_contains("en-us") && v.name.to_ascii_lowercase().contains("samantha"))
        .or_else(|| voices.iter().find(|v| v.lang_contains("en-us")))
        .or_else(|| voices.iter().find(|v| v.lang_contains("en")))
        .or_else(|| voices.first())
}

//
// ─── UTTERANCES & TONES ───────────────────────────────────────────────────────
//

/// Text to speak plus the voice parameters tuned for small children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<String>,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    /// Stop anything already queued before speaking.
    pub interrupt: bool,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: None,
            rate: 0.95,
            pitch: 1.1,
            volume: 1.0,
            interrupt: false,
        }
    }

    #[must_use]
    pub fn with_voice(mut self, voice: Option<&VoiceInfo>) -> Self {
        self.voice = voice.map(|v| v.name.clone());
        self
    }

    #[must_use]
    pub fn interrupting(mut self, interrupt: bool) -> Self {
        self.interrupt = interrupt;
        self
    }
}

/// Short sine beep played after an answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub gain: f32,
}

impl Tone {
    pub const SUCCESS: Tone = Tone {
        frequency_hz: 880,
        duration_ms: 120,
        gain: 0.08,
    };

    pub const FAILURE: Tone = Tone {
        frequency_hz: 220,
        duration_ms: 220,
        gain: 0.08,
    };

    #[must_use]
    pub fn for_answer(correct: bool) -> Self {
        if correct { Self::SUCCESS } else { Self::FAILURE }
    }
}

//
// ─── DEDUPE GATE ──────────────────────────────────────────────────────────────
//

/// Drops repeats of the same text inside `DEDUPE_WINDOW_MS`.
#[derive(Debug, Clone, Default)]
pub struct SpeechGate {
    last: Option<(String, DateTime<Utc>)>,
}

impl SpeechGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `text` should be spoken now and remembers it.
    /// `force` always admits.
    pub fn admit(&mut self, text: &str, now: DateTime<Utc>, force: bool) -> bool {
        if !force {
            if let Some((last_text, at)) = &self.last {
                if last_text == text && now - *at < Duration::milliseconds(DEDUPE_WINDOW_MS) {
                    return false;
                }
            }
        }
        self.last = Some((text.to_owned(), now));
        true
    }
}
