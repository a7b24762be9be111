use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kids_core::model::AppState;
use kids_core::speech::{SpeechGate, Tone, Utterance, VoiceInfo, pick_voice};
use thiserror::Error;
use tracing::{debug, warn};

use crate::Clock;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AudioError {
    #[error("audio output is not available")]
    Unavailable,
    #[error("audio backend failed: {0}")]
    Backend(String),
}

/// Platform seam for speech synthesis and beeps.
///
/// Implementations are fire-and-forget: they start playback and return.
pub trait AudioBackend: Send + Sync {
    fn is_supported(&self) -> bool;

    /// # Errors
    ///
    /// Returns `AudioError` if playback could not be started.
    fn speak(&self, utterance: &Utterance) -> Result<(), AudioError>;

    /// # Errors
    ///
    /// Returns `AudioError` if playback could not be started.
    fn play_tone(&self, tone: Tone) -> Result<(), AudioError>;
}

/// Backend for platforms without audio; reports itself unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn is_supported(&self) -> bool {
        false
    }

    fn speak(&self, _utterance: &Utterance) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    fn play_tone(&self, _tone: Tone) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

/// What happened to a speech request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakOutcome {
    Spoken,
    Deduped,
    /// The child's voice switch is off.
    Off,
    /// Speech has not been unlocked by a user gesture yet.
    Locked,
    Unsupported,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechStatus {
    pub supported: bool,
    pub unlocked: bool,
    pub ready: bool,
    pub voices: usize,
    pub voice_name: Option<String>,
}

#[derive(Default)]
struct SpeechState {
    gate: SpeechGate,
    unlocked: bool,
    voices: Vec<VoiceInfo>,
}

/// Spoken prompts and answer beeps, deduplicated and degraded gracefully.
pub struct FeedbackService {
    clock: Clock,
    backend: Arc<dyn AudioBackend>,
    state: Mutex<SpeechState>,
}

impl FeedbackService {
    #[must_use]
    pub fn new(clock: Clock, backend: Arc<dyn AudioBackend>) -> Self {
        Self {
            clock,
            backend,
            state: Mutex::new(SpeechState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SpeechState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark speech as allowed after the first user gesture.
    ///
    /// Returns `false` when the platform has no speech support.
    pub fn unlock(&self) -> bool {
        if !self.backend.is_supported() {
            return false;
        }
        self.lock().unlocked = true;
        true
    }

    /// Replace the known voice list (platforms report voices lazily).
    pub fn set_voices(&self, voices: Vec<VoiceInfo>) {
        let mut state = self.lock();
        state.voices = voices;
        debug!(
            voices = state.voices.len(),
            picked = ?pick_voice(&state.voices).map(VoiceInfo::display_name),
            "voices updated"
        );
    }

    #[must_use]
    pub fn status(&self) -> SpeechStatus {
        let state = self.lock();
        SpeechStatus {
            supported: self.backend.is_supported(),
            unlocked: state.unlocked,
            ready: !state.voices.is_empty(),
            voices: state.voices.len(),
            voice_name: pick_voice(&state.voices).map(VoiceInfo::display_name),
        }
    }

    /// Speak `text` if the voice switch is on and speech is unlocked.
    pub fn speak(&self, app: &AppState, text: &str) -> SpeakOutcome {
        if !self.backend.is_supported() {
            return SpeakOutcome::Unsupported;
        }
        if !app.voice_on {
            return SpeakOutcome::Off;
        }
        self.speak_gated(text, false)
    }

    /// Speak `text` right away, unlocking speech and bypassing the voice
    /// switch and the dedupe window. Used by the "Test Voice" button.
    pub fn speak_forced(&self, text: &str) -> SpeakOutcome {
        if !self.unlock() {
            return SpeakOutcome::Unsupported;
        }
        self.speak_gated(text, true)
    }

    fn speak_gated(&self, text: &str, force: bool) -> SpeakOutcome {
        let utterance = {
            let mut state = self.lock();
            if !state.unlocked {
                return SpeakOutcome::Locked;
            }
            if !state.gate.admit(text, self.clock.now(), force) {
                return SpeakOutcome::Deduped;
            }
            Utterance::new(text)
                .with_voice(pick_voice(&state.voices))
                .interrupting(force)
        };

        match self.backend.speak(&utterance) {
            Ok(()) => SpeakOutcome::Spoken,
            Err(err) => {
                warn!(error = %err, "speech failed");
                SpeakOutcome::Failed
            }
        }
    }

    /// Play the right/wrong beep. Returns `false` if it could not be played.
    pub fn beep(&self, correct: bool) -> bool {
        if !self.backend.is_supported() {
            return false;
        }
        match self.backend.play_tone(Tone::for_answer(correct)) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "beep failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kids_core::time::fixed_clock;

    #[derive(Default)]
    struct RecordingAudio {
        spoken: Mutex<Vec<Utterance>>,
        tones: Mutex<Vec<Tone>>,
        fail: bool,
    }

    impl AudioBackend for RecordingAudio {
        fn is_supported(&self) -> bool {
            true
        }

        fn speak(&self, utterance: &Utterance) -> Result<(), AudioError> {
            if self.fail {
                return Err(AudioError::Backend("blocked".into()));
            }
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }

        fn play_tone(&self, tone: Tone) -> Result<(), AudioError> {
            self.tones.lock().unwrap().push(tone);
            Ok(())
        }
    }

    fn service() -> (FeedbackService, Arc<RecordingAudio>) {
        let audio = Arc::new(RecordingAudio::default());
        let svc = FeedbackService::new(fixed_clock(), audio.clone());
        (svc, audio)
    }

    #[test]
    fn locked_until_unlocked() {
        let (svc, audio) = service();
        let app = AppState::default();
        assert_eq!(svc.speak(&app, "Home"), SpeakOutcome::Locked);
        assert!(svc.unlock());
        assert_eq!(svc.speak(&app, "Home"), SpeakOutcome::Spoken);
        assert_eq!(audio.spoken.lock().unwrap().len(), 1);
    }

    #[test]
    fn voice_switch_off_silences_prompts_but_not_test_voice() {
        let (svc, audio) = service();
        svc.unlock();
        let mut app = AppState::default();
        app.toggle_voice();
        assert_eq!(svc.speak(&app, "Home"), SpeakOutcome::Off);
        assert_eq!(
            svc.speak_forced("Hello! Voice is working."),
            SpeakOutcome::Spoken
        );
        assert_eq!(audio.spoken.lock().unwrap().len(), 1);
    }

    #[test]
    fn only_forced_speech_interrupts() {
        let (svc, audio) = service();
        svc.unlock();
        svc.speak(&AppState::default(), "Find the letter B.");
        svc.speak_forced("Hello! Voice is working.");
        let spoken = audio.spoken.lock().unwrap();
        assert!(!spoken[0].interrupt);
        assert!(spoken[1].interrupt);
    }

    #[test]
    fn repeats_are_deduped_at_the_same_instant() {
        let (svc, audio) = service();
        svc.unlock();
        let app = AppState::default();
        assert_eq!(svc.speak(&app, "Try again"), SpeakOutcome::Spoken);
        assert_eq!(svc.speak(&app, "Try again"), SpeakOutcome::Deduped);
        assert_eq!(svc.speak_forced("Try again"), SpeakOutcome::Spoken);
        assert_eq!(audio.spoken.lock().unwrap().len(), 2);
    }

    #[test]
    fn picked_voice_is_attached() {
        let (svc, audio) = service();
        svc.unlock();
        svc.set_voices(vec![
            VoiceInfo::new("Daniel", "en-GB"),
            VoiceInfo::new("Samantha", "en-US"),
        ]);
        svc.speak(&AppState::default(), "Find the letter A.");
        let spoken = audio.spoken.lock().unwrap();
        assert_eq!(spoken[0].voice.as_deref(), Some("Samantha"));

        let status = svc.status();
        assert!(status.ready);
        assert_eq!(status.voices, 2);
        assert_eq!(status.voice_name.as_deref(), Some("Samantha (en-US)"));
    }

    #[test]
    fn backend_failure_degrades() {
        let audio = Arc::new(RecordingAudio {
            fail: true,
            ..RecordingAudio::default()
        });
        let svc = FeedbackService::new(fixed_clock(), audio);
        svc.unlock();
        assert_eq!(
            svc.speak(&AppState::default(), "Home"),
            SpeakOutcome::Failed
        );
    }

    #[test]
    fn unsupported_platform_is_quiet() {
        let svc = FeedbackService::new(fixed_clock(), Arc::new(NullAudio));
        assert!(!svc.unlock());
        assert!(!svc.beep(true));
        assert_eq!(
            svc.speak(&AppState::default(), "Home"),
            SpeakOutcome::Unsupported
        );
        assert_eq!(svc.speak_forced("Hi"), SpeakOutcome::Unsupported);
        assert!(!svc.status().supported);
    }

    #[test]
    fn beeps_use_answer_tones() {
        let (svc, audio) = service();
        assert!(svc.beep(true));
        assert!(svc.beep(false));
        let tones = audio.tones.lock().unwrap();
        assert_eq!(*tones, vec![Tone::SUCCESS, Tone::FAILURE]);
    }
}
