//! Fire-and-forget audio playback via `rodio`.
//!
//! The output stream handle is not `Send`, so each clip is played on its own
//! short-lived thread that owns the stream for the duration of the clip.
//! Playback failures are logged and swallowed — a broken output device must
//! never take down the UI.

use std::io::Cursor;

use crate::speech::renderer::AudioClip;
use crate::speech::synth::TtsError;

/// Play `clip` on the default output device, asynchronously.
///
/// Empty clips are ignored. Returns immediately; decoding and device errors
/// are logged at warn level on the playback thread.
pub fn play(clip: &AudioClip) {
    if clip.is_empty() {
        return;
    }

    let bytes = clip.bytes.clone();
    let spawned = std::thread::Builder::new()
        .name("audio-playback".into())
        .spawn(move || {
            if let Err(e) = play_blocking(bytes) {
                log::warn!("audio playback failed: {e}");
            }
        });

    if let Err(e) = spawned {
        log::warn!("failed to spawn playback thread: {e}");
    }
}

/// Decode and play `bytes`, blocking until the clip finishes.
fn play_blocking(bytes: Vec<u8>) -> Result<(), TtsError> {
    let (_stream, handle) =
        rodio::OutputStream::try_default().map_err(|e| TtsError::Playback(e.to_string()))?;
    let sink = rodio::Sink::try_new(&handle).map_err(|e| TtsError::Playback(e.to_string()))?;

    let source =
        rodio::Decoder::new(Cursor::new(bytes)).map_err(|e| TtsError::Playback(e.to_string()))?;

    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}
