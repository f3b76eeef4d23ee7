use quiz_core::sound::Tone;

/// Web Audio snippet that plays `tones`, or `None` when there is nothing to play.
pub(super) fn tone_script(tones: &[Tone]) -> Option<String> {
    if tones.is_empty() {
        return None;
    }
    let tones_js = tones
        .iter()
        .map(|tone| {
            format!(
                "{{ f: {}, d: {}, w: {:?}, g: {}, at: {} }}",
                tone.frequency_hz,
                tone.duration_ms,
                tone.waveform.as_str(),
                tone.gain,
                tone.delay_ms
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!(
        r"(function() {{
            const Ctx = window.AudioContext || window.webkitAudioContext;
            if (!Ctx) return;
            const ctx = window.__quizAudio || (window.__quizAudio = new Ctx());
            if (ctx.state === 'suspended') ctx.resume();
            const now = ctx.currentTime;
            for (const t of [{tones_js}]) {{
                const osc = ctx.createOscillator();
                const gain = ctx.createGain();
                osc.type = t.w;
                osc.frequency.value = t.f;
                const start = now + t.at / 1000;
                const end = start + t.d / 1000;
                gain.gain.setValueAtTime(t.g, start);
                gain.gain.exponentialRampToValueAtTime(0.0001, end);
                osc.connect(gain);
                gain.connect(ctx.destination);
                osc.start(start);
                osc.stop(end + 0.02);
            }}
        }})();"
    ))
}

/// Installs or removes the leave-page warning shown while a game runs.
pub(super) fn unload_guard_script(active: bool) -> String {
    format!(
        r"(function() {{
            const guard = window.__quizUnloadGuard || (window.__quizUnloadGuard = function(e) {{
                e.preventDefault();
                e.returnValue = '';
            }});
            window.removeEventListener('beforeunload', guard);
            if ({active}) {{
                window.addEventListener('beforeunload', guard);
            }}
        }})();"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::sound::{SoundCue, SoundSettings};

    #[test]
    fn muted_cue_has_no_script() {
        let muted = SoundSettings::new(false);
        assert!(tone_script(muted.tones_for(SoundCue::Success)).is_none());
    }

    #[test]
    fn wrong_cue_uses_sawtooth() {
        let js = tone_script(SoundCue::Wrong.tones()).unwrap();
        assert!(js.contains("\"sawtooth\""), "{js}");
        assert!(js.contains("f: 220"), "{js}");
    }

    #[test]
    fn guard_script_reflects_state() {
        assert!(unload_guard_script(true).contains("if (true)"));
        assert!(unload_guard_script(false).contains("if (false)"));
    }
}
