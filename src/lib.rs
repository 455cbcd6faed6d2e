//! Translator Tutor — an English → Japanese tutoring chat app.
//!
//! The user types an English sentence; a chat-completion model returns a
//! translation in a fixed line-oriented format (`Japanese:`, `Romaji:`,
//! `Romaji breakdown:`, `JLPT:`, `Explanation:` bullets); the reply is parsed
//! into a [`lesson::Lesson`] and rendered with synthesized audio for the full
//! sentence and for each explanation bullet's head term.
//!
//! # Modules
//!
//! * [`lesson`]  — tolerant line parser for the model's reply (the core).
//! * [`chat`]    — chat-completion client and the fixed lesson prompt.
//! * [`speech`]  — TTS provider, blank-input short-circuit, clip playback.
//! * [`session`] — explicit, append-only chat history.
//! * [`app`]     — egui chat window and orchestrator message types.
//! * [`theme`]   — external color theme asset (required at startup).
//! * [`config`]  — TOML settings and platform paths.

pub mod app;
pub mod chat;
pub mod config;
pub mod lesson;
pub mod session;
pub mod speech;
pub mod theme;
