//! Feedback tones. The cues are plain data; playback belongs to the UI.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

impl Waveform {
    /// Oscillator type name understood by the Web Audio API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

/// A single oscillator burst, started `delay_ms` after the cue begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub waveform: Waveform,
    pub gain: f32,
    pub delay_ms: u32,
}

const fn sine(frequency_hz: f32, duration_ms: u32, delay_ms: u32) -> Tone {
    Tone {
        frequency_hz,
        duration_ms,
        waveform: Waveform::Sine,
        gain: 0.12,
        delay_ms,
    }
}

const SUCCESS: [Tone; 2] = [sine(600.0, 120, 0), sine(900.0, 120, 120)];
const WRONG: [Tone; 1] = [Tone {
    frequency_hz: 220.0,
    duration_ms: 350,
    waveform: Waveform::Sawtooth,
    gain: 0.14,
    delay_ms: 0,
}];
const TIME_UP: [Tone; 2] = [sine(400.0, 120, 0), sine(260.0, 180, 140)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Success,
    Wrong,
    TimeUp,
}

impl SoundCue {
    #[must_use]
    pub fn tones(self) -> &'static [Tone] {
        match self {
            SoundCue::Success => &SUCCESS,
            SoundCue::Wrong => &WRONG,
            SoundCue::TimeUp => &TIME_UP,
        }
    }
}

/// User-facing mute switch. Has no bearing on game timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSettings {
    enabled: bool,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SoundSettings {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flip the switch and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Tones to play for `cue`, or nothing while muted.
    #[must_use]
    pub fn tones_for(&self, cue: SoundCue) -> &'static [Tone] {
        if self.enabled { cue.tones() } else { &[] }
    }
}
