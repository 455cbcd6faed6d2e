//! Chat-completion provider module.
//!
//! This module provides:
//! * [`ChatClient`] — async trait implemented by chat backends.
//! * [`CohereClient`] — Cohere v2 `/v2/chat` REST client.
//! * [`LessonPrompt`] — fixed lesson-request prompt template.
//! * [`ChatError`] — error variants for chat operations.

pub mod client;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ChatClient, ChatError, CohereClient};
pub use prompt::LessonPrompt;
