//! Lesson extraction from the tutor model's raw reply.
//!
//! The chat model is asked for a fixed line-oriented format (`Japanese:`,
//! `Romaji:`, `Romaji breakdown:`, `JLPT:`, then `Explanation:` bullets).
//! Nothing enforces that format on the wire, so [`Lesson::parse`] tolerates
//! any malformation: missing fields come back as empty strings, missing
//! bullets as an empty list, and parsing itself can never fail.

pub mod parser;

pub use parser::{Explanation, Lesson};
