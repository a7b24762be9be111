use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::model::{GameKind, PREP_STEPS, PrepStep};

/// Key under which the whole `AppState` document is persisted.
pub const STORAGE_KEY: &str = "kids_learning_v1";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("progress document could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("progress document could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode one field, keeping its default when the stored value has the wrong
/// shape. A single bad counter must not cost the child every other star.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_voice<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

//
// ─── COUNTERS ─────────────────────────────────────────────────────────────────
//

/// Cumulative stars and completed rounds for one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameProgress {
    #[serde(deserialize_with = "lenient")]
    pub stars: u32,
    #[serde(deserialize_with = "lenient")]
    pub done: u32,
}

impl GameProgress {
    fn record(&mut self) {
        self.stars = self.stars.saturating_add(1);
        self.done = self.done.saturating_add(1);
    }
}

/// Prep counters plus the position in the guided sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrepProgress {
    #[serde(flatten)]
    pub tally: GameProgress,
    #[serde(deserialize_with = "lenient")]
    pub step_index: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    #[serde(deserialize_with = "lenient")]
    pub colors: GameProgress,
    #[serde(deserialize_with = "lenient")]
    pub counting: GameProgress,
    #[serde(deserialize_with = "lenient")]
    pub letters: GameProgress,
    #[serde(deserialize_with = "lenient")]
    pub prep: PrepProgress,
}

impl Progress {
    #[must_use]
    pub fn game(&self, game: GameKind) -> GameProgress {
        match game {
            GameKind::Colors => self.colors,
            GameKind::Counting => self.counting,
            GameKind::Letters => self.letters,
            GameKind::Prep => self.prep.tally,
        }
    }

    fn game_mut(&mut self, game: GameKind) -> &mut GameProgress {
        match game {
            GameKind::Colors => &mut self.colors,
            GameKind::Counting => &mut self.counting,
            GameKind::Letters => &mut self.letters,
            GameKind::Prep => &mut self.prep.tally,
        }
    }
}

//
// ─── APP STATE ────────────────────────────────────────────────────────────────
//

/// Everything the app persists between launches.
///
/// Decoding is lenient: any field missing from the stored document, or stored
/// with the wrong shape, falls back to its default while the rest is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    #[serde(deserialize_with = "lenient_voice")]
    pub voice_on: bool,
    #[serde(deserialize_with = "lenient")]
    pub progress: Progress,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            voice_on: true,
            progress: Progress::default(),
        }
    }
}

impl AppState {
    /// Decode a stored document, merging it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Decode` if the text is not a JSON object.
    pub fn from_json(raw: &str) -> Result<Self, ProgressError> {
        serde_json::from_str(raw).map_err(ProgressError::Decode)
    }

    /// # Errors
    ///
    /// Returns `ProgressError::Encode` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressError> {
        serde_json::to_string(self).map_err(ProgressError::Encode)
    }

    /// Award one star and one completion to `game`.
    pub fn record_correct(&mut self, game: GameKind) {
        self.progress.game_mut(game).record();
    }

    /// Zero every counter and turn the voice back on.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Flip the voice switch and return the new value.
    pub fn toggle_voice(&mut self) -> bool {
        self.voice_on = !self.voice_on;
        self.voice_on
    }

    /// Current prep step. An out-of-range stored index is clamped and written back.
    pub fn prep_step(&mut self) -> &'static PrepStep {
        let last = PREP_STEPS.len() - 1;
        self.progress.prep.step_index = self.progress.prep.step_index.min(last);
        &PREP_STEPS[self.progress.prep.step_index]
    }

    /// Move to the next prep step, wrapping after the last one.
    pub fn advance_prep(&mut self) -> &'static PrepStep {
        let next = (self.progress.prep.step_index % PREP_STEPS.len() + 1) % PREP_STEPS.len();
        self.progress.prep.step_index = next;
        &PREP_STEPS[next]
    }

    /// Start the current prep step: awards a prep star and returns the step
    /// whose game should be opened.
    pub fn start_prep_step(&mut self) -> &'static PrepStep {
        let step = self.prep_step();
        self.record_correct(GameKind::Prep);
        step
    }
}
