//! Fixed prompt template for the lesson request.
//!
//! [`LessonPrompt::build`] embeds the user's raw English sentence into the
//! teacher-persona instruction block. The requested output grammar (one field
//! per line, `Explanation:` bullets) is what [`Lesson::parse`] expects back;
//! the two must stay in sync.
//!
//! This is pure string templating: direct, unescaped interpolation, no
//! branching, no validation of the user's input.
//!
//! [`Lesson::parse`]: crate::lesson::Lesson::parse

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

const TEMPLATE_HEAD: &str = r#"
You are a friendly Japanese language teacher.

For the English sentence below, do ALL of the following:

1. Translate it into natural Japanese that a native speaker might say.
2. Provide a normal romaji (Latin alphabet) version of the full sentence.
3. Provide a romaji breakdown with clear syllable-style splits (like a dictionary, using dots).
4. Decide the approximate JLPT level (N5-N1) of the Japanese sentence.
5. Give a short grammar and vocabulary explanation that is easy for a beginner to understand.

OUTPUT FORMAT - follow this EXACT format:

Japanese: <Japanese sentence>
Romaji: <full sentence in romaji>
Romaji breakdown: <romaji broken into syllables, using dots, e.g. Wa·ta·shi no na·ma·e wa ...>
JLPT: Nx
Explanation:
- <Japanese word or phrase> (<romaji breakdown for that word>): short explanation in English.
- (2-6 bullet points total; each bullet should start with "- ")

Notes:
- Use clear, easy romaji like "konnichiwa", "tabemasu", "ramen".
- For the romaji breakdown, split at natural mora/syllable boundaries using dots, like "ta·be·mo·no", "ra·a·men".
- The Explanation bullets should also help the learner see *how to pronounce* each key chunk by including that mini breakdown in parentheses.

Now do this for the following sentence:

English: "#;

// ---------------------------------------------------------------------------
// LessonPrompt
// ---------------------------------------------------------------------------

/// Builds the lesson-request prompt sent as a single user message.
pub struct LessonPrompt;

impl LessonPrompt {
    /// Interpolate `english` into the fixed template, quoted but unescaped.
    pub fn build(english: &str) -> String {
        format!("{TEMPLATE_HEAD}\"{english}\"\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
