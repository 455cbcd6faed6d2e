//! [`SpeechRenderer`] — turns text into [`AudioClip`]s, skipping blank input.
//!
//! The renderer sits between the orchestrator and the raw
//! [`SpeechSynthesizer`]: blank or whitespace-only text short-circuits to the
//! empty clip without touching the provider, so no wasted network calls are
//! made and no audio widget is drawn for blank content. Everything else is
//! forwarded verbatim; provider errors propagate to the caller, which decides
//! per the error tier whether to show a notice or suppress the failure.

use std::sync::Arc;

use crate::speech::synth::{SpeechSynthesizer, TtsError};

// ---------------------------------------------------------------------------
// AudioClip
// ---------------------------------------------------------------------------

/// Encoded audio container format of an [`AudioClip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
}

/// Opaque encoded audio payload plus its format tag.
///
/// An empty payload is a valid, non-error value meaning "nothing to say";
/// callers check [`AudioClip::is_empty`] before drawing a play control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioClip {
    /// The silent clip — no payload, nothing to play.
    pub fn empty() -> Self {
        Self {
            bytes: Vec::new(),
            format: AudioFormat::Mp3,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SpeechRenderer
// ---------------------------------------------------------------------------

/// Produces [`AudioClip`]s on demand from text, via a shared synthesizer.
///
/// Clips are not cached: repeated calls with identical text re-invoke the
/// provider.
#[derive(Clone)]
pub struct SpeechRenderer {
    synth: Arc<dyn SpeechSynthesizer>,
}

impl SpeechRenderer {
    pub fn new(synth: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synth }
    }

    /// Synthesize `text` in `language`.
    ///
    /// Blank or whitespace-only text returns the empty clip immediately,
    /// without invoking the provider. Provider failures propagate unchanged.
    pub async fn render(&self, text: &str, language: &str) -> Result<AudioClip, TtsError> {
        if text.trim().is_empty() {
            return Ok(AudioClip::empty());
        }

        let bytes = self.synth.synthesize(text, language).await?;
        Ok(AudioClip {
            bytes,
            format: AudioFormat::Mp3,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Returns fixed bytes and counts every invocation.
    struct CountingSynth {
        calls: AtomicUsize,
        payload: Vec<u8>,
    }

    impl CountingSynth {
        fn new(payload: Vec<u8>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                payload,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SpeechSynthesizer for CountingSynth {
        async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, TtsError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.payload.clone())
        }
    }

    /// Always returns the given error kind.
    struct AlwaysFails;

    #[async_trait]
    impl SpeechSynthesizer for AlwaysFails {
        async fn synthesize(&self, _text: &str, _language: &str) -> Result<Vec<u8>, TtsError> {
            Err(TtsError::Api { status: 503 })
        }
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn empty_text_returns_empty_clip_without_provider_call() {
        let synth = Arc::new(CountingSynth::new(vec![1, 2, 3]));
        let renderer = SpeechRenderer::new(synth.clone());

        let clip = renderer.render("", "ja").await.unwrap();

        assert!(clip.is_empty());
        assert_eq!(synth.call_count(), 0);
    }

    #[tokio::test]
    async fn whitespace_only_text_returns_empty_clip_without_provider_call() {
        let synth = Arc::new(CountingSynth::new(vec![1, 2, 3]));
        let renderer = SpeechRenderer::new(synth.clone());

        let clip = renderer.render("  \t\n ", "ja").await.unwrap();

        assert!(clip.is_empty());
        assert_eq!(synth.call_count(), 0);
    }

    #[tokio::test]
    async fn non_blank_text_returns_exactly_the_provider_bytes() {
        let payload = vec![0xFF, 0xF3, 0x44, 0x00, 0x12];
        let synth = Arc::new(CountingSynth::new(payload.clone()));
        let renderer = SpeechRenderer::new(synth.clone());

        let clip = renderer.render("こんにちは", "ja").await.unwrap();

        assert_eq!(clip.bytes, payload);
        assert_eq!(clip.format, AudioFormat::Mp3);
        assert_eq!(synth.call_count(), 1);
    }

    #[tokio::test]
    async fn repeated_calls_are_not_cached() {
        let synth = Arc::new(CountingSynth::new(vec![9]));
        let renderer = SpeechRenderer::new(synth.clone());

        renderer.render("こんにちは", "ja").await.unwrap();
        renderer.render("こんにちは", "ja").await.unwrap();

        assert_eq!(synth.call_count(), 2);
    }

    #[tokio::test]
    async fn provider_error_propagates_unchanged() {
        let renderer = SpeechRenderer::new(Arc::new(AlwaysFails));

        let err = renderer.render("こんにちは", "ja").await.unwrap_err();
        assert!(matches!(err, TtsError::Api { status: 503 }));
    }

    #[test]
    fn empty_clip_reports_empty() {
        assert!(AudioClip::empty().is_empty());
        assert!(!AudioClip {
            bytes: vec![1],
            format: AudioFormat::Mp3
        }
        .is_empty());
    }
}
