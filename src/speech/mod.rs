//! Speech synthesis and playback.
//!
//! This module provides:
//! * [`SpeechSynthesizer`] — async trait implemented by all TTS backends.
//! * [`GoogleTranslateTts`] — HTTP synthesizer returning MP3 bytes.
//! * [`SpeechRenderer`] — blank-input short-circuit wrapper producing [`AudioClip`]s.
//! * [`AudioClip`] / [`AudioFormat`] — opaque encoded audio payloads.
//! * [`TtsError`] — error variants for synthesis and playback.
//! * [`playback`] — fire-and-forget playback on the default output device.

pub mod playback;
pub mod renderer;
pub mod synth;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use renderer::{AudioClip, AudioFormat, SpeechRenderer};
pub use synth::{GoogleTranslateTts, SpeechSynthesizer, TtsError};
