//! Speech and beeps played through the webview's Web Audio and speech APIs.

mod scripts;

use dioxus::core::spawn_forever;
use dioxus::document::eval;
use dioxus::prelude::*;
use kids_core::speech::{Tone, Utterance, VoiceInfo};
use services::{AudioBackend, AudioError};
use tracing::warn;

use crate::views::show_toast;
use crate::vm::ToastVm;
use scripts::{VOICES_SCRIPT, speak_script, speech_failure_message, tone_script};

pub(crate) use scripts::VOICE_ERROR_ID;

/// `AudioBackend` that drives `speechSynthesis` and `AudioContext` via `eval`.
///
/// Must be called from inside the Dioxus runtime (event handlers, effects).
/// Speech runs asynchronously in the webview, so a failure reported later by
/// the engine is shown as a toast instead of being returned from `speak`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebviewAudio;

impl AudioBackend for WebviewAudio {
    fn is_supported(&self) -> bool {
        true
    }

    fn speak(&self, utterance: &Utterance) -> Result<(), AudioError> {
        let script = speak_script(utterance).map_err(|err| AudioError::Backend(err.to_string()))?;
        let mut outcome = eval(&script);
        let interrupt = utterance.interrupt;
        let toast = try_consume_context::<Signal<ToastVm>>();
        let _ = spawn_forever(async move {
            let Ok(event) = outcome.recv::<String>().await else {
                return;
            };
            if let Some(message) = speech_failure_message(&event, interrupt) {
                warn!(%event, "webview speech failed");
                if let Some(toast) = toast {
                    show_toast(toast, message);
                }
            }
        });
        Ok(())
    }

    fn play_tone(&self, tone: Tone) -> Result<(), AudioError> {
        let _ = eval(&tone_script(tone));
        Ok(())
    }
}

/// Ask the webview for its synthesis voices, waiting briefly for lazy lists.
pub async fn load_voices() -> Vec<VoiceInfo> {
    match eval(VOICES_SCRIPT).join::<Vec<VoiceInfo>>().await {
        Ok(voices) => voices,
        Err(err) => {
            warn!(error = ?err, "could not read voices");
            Vec::new()
        }
    }
}
