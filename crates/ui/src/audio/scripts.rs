use kids_core::speech::{Tone, Utterance};

/// Element that receives a hint when the platform blocks speech.
pub(crate) const VOICE_ERROR_ID: &str = "voice-error";

pub(crate) const VOICES_SCRIPT: &str = r#"
    const synth = window.speechSynthesis;
    if (!synth) { return []; }
    let voices = synth.getVoices() || [];
    if (!voices.length) {
        await new Promise((resolve) => {
            const timer = setTimeout(resolve, 1000);
            synth.onvoiceschanged = () => { clearTimeout(timer); resolve(); };
        });
        voices = synth.getVoices() || [];
    }
    return voices.map((v) => ({ name: v.name, lang: v.lang }));
"#;

/// Messages the speak script sends back through `dioxus.send`.
pub(crate) const SPEECH_ENDED: &str = "end";
pub(crate) const SPEECH_FAILED: &str = "error";
pub(crate) const SPEECH_SKIPPED: &str = "skip";

/// Toast text for a message from the speak script, if it reports a failure.
pub(crate) fn speech_failure_message(event: &str, interrupt: bool) -> Option<&'static str> {
    match (event, interrupt) {
        (SPEECH_FAILED, true) => Some("Voice blocked in browser settings"),
        (SPEECH_FAILED, false) => Some("Voice blocked or unavailable"),
        _ => None,
    }
}

/// Script that speaks one utterance and reports exactly one outcome.
/// Text is embedded as a JSON string literal.
pub(crate) fn speak_script(utterance: &Utterance) -> Result<String, serde_json::Error> {
    let text = serde_json::to_string(&utterance.text)?;
    let voice = serde_json::to_string(&utterance.voice)?;
    Ok(format!(
        r#"(function() {{
                const synth = window.speechSynthesis;
                if (!synth || !window.SpeechSynthesisUtterance) {{
                    dioxus.send({skipped:?});
                    return;
                }}
                try {{
                    if (synth.paused) synth.resume();
                    // Cancelling an idle queue can mute some engines; only forced speech always cancels.
                    if ({interrupt} || synth.speaking) synth.cancel();
                    const u = new SpeechSynthesisUtterance({text});
                    const wanted = {voice};
                    if (wanted) {{
                        const match = (synth.getVoices() || []).find((v) => v.name === wanted);
                        if (match) u.voice = match;
                    }}
                    u.rate = {rate};
                    u.pitch = {pitch};
                    u.volume = {volume};
                    u.onend = () => dioxus.send({ended:?});
                    u.onerror = (e) => {{
                        if (e && (e.error === "canceled" || e.error === "interrupted")) {{
                            dioxus.send({ended:?});
                            return;
                        }}
                        const hint = document.getElementById({hint_id:?});
                        if (hint) {{
                            hint.textContent = "Voice may be blocked. Try raising the volume or tap Test Voice.";
                        }}
                        dioxus.send({failed:?});
                    }};
                    synth.speak(u);
                }} catch (e) {{
                    dioxus.send({failed:?});
                }}
            }})();"#,
        text = text,
        voice = voice,
        interrupt = utterance.interrupt,
        rate = utterance.rate,
        pitch = utterance.pitch,
        volume = utterance.volume,
        hint_id = VOICE_ERROR_ID,
        ended = SPEECH_ENDED,
        failed = SPEECH_FAILED,
        skipped = SPEECH_SKIPPED,
    ))
}

pub(crate) fn tone_script(tone: Tone) -> String {
    format!(
        r#"(function() {{
                try {{
                    const AudioCtx = window.AudioContext || window.webkitAudioContext;
                    if (!AudioCtx) return;
                    const ctx = new AudioCtx();
                    const o = ctx.createOscillator();
                    const g = ctx.createGain();
                    o.type = "sine";
                    o.frequency.value = {frequency};
                    g.gain.value = {gain};
                    o.connect(g);
                    g.connect(ctx.destination);
                    o.start();
                    setTimeout(() => {{ o.stop(); ctx.close(); }}, {duration});
                }} catch (e) {{}}
            }})();"#,
        frequency = tone.frequency_hz,
        gain = tone.gain,
        duration = tone.duration_ms,
    )
}
