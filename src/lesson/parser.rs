//! Line-oriented parser for the tutor model's reply.
//!
//! [`Lesson::parse`] is a pure function of the raw text: re-parsing the same
//! reply always yields the same [`Lesson`], and a `Lesson` is recomputed each
//! time a message is rendered rather than stored anywhere.

// ---------------------------------------------------------------------------
// Field prefixes (must match the format requested by the lesson prompt)
// ---------------------------------------------------------------------------

const PREFIX_JAPANESE: &str = "Japanese:";
const PREFIX_ROMAJI: &str = "Romaji:";
const PREFIX_ROMAJI_BREAKDOWN: &str = "Romaji breakdown:";
const PREFIX_JLPT: &str = "JLPT:";
const EXPLANATION_HEADER: &str = "Explanation:";

/// Head-term separators, in priority order. The first separator found in a
/// bullet's core text wins; the others are ignored even when also present.
const HEAD_TERM_SEPARATORS: [&str; 3] = ["(", "：", ":"];

// ---------------------------------------------------------------------------
// Explanation
// ---------------------------------------------------------------------------

/// One explanation bullet from the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// The Japanese word or phrase the bullet is about — the text before the
    /// first `(`, `：` or `:` annotation. May be empty when the bullet has no
    /// content before a separator; such entries are kept, not dropped.
    pub head_term: String,
    /// The full bullet line (trimmed, leading `-` marker included), shown to
    /// the user verbatim.
    pub bullet_text: String,
}

// ---------------------------------------------------------------------------
// Lesson
// ---------------------------------------------------------------------------

/// Labeled fields extracted from one assistant reply.
///
/// The `Japanese:` prefix is stripped from [`japanese_sentence`] because the
/// sentence is also fed to speech synthesis; the other three lines keep their
/// prefix and are displayed as-is. Absent lines yield empty strings.
///
/// [`japanese_sentence`]: Lesson::japanese_sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lesson {
    /// Japanese translation with the `Japanese:` prefix and surrounding
    /// whitespace stripped.
    pub japanese_sentence: String,
    /// Full `Romaji: …` line, prefix retained.
    pub romaji_line: String,
    /// Full `Romaji breakdown: …` line, prefix retained.
    pub romaji_breakdown_line: String,
    /// Full `JLPT: …` line, prefix retained.
    pub jlpt_line: String,
    /// Bullets following the `Explanation:` header, in source order.
    pub explanations: Vec<Explanation>,
}

impl Lesson {
    /// Parse a raw model reply. Total: malformed or partial input produces
    /// empty fields, never an error.
    pub fn parse(raw: &str) -> Self {
        let lines: Vec<&str> = raw.lines().filter(|ln| !ln.trim().is_empty()).collect();

        let japanese_line = first_line_with(&lines, PREFIX_JAPANESE);
        let romaji_line = first_line_with(&lines, PREFIX_ROMAJI);
        let romaji_breakdown_line = first_line_with(&lines, PREFIX_ROMAJI_BREAKDOWN);
        let jlpt_line = first_line_with(&lines, PREFIX_JLPT);

        let japanese_sentence = japanese_line
            .strip_prefix(PREFIX_JAPANESE)
            .unwrap_or("")
            .trim()
            .to_string();

        let explanation_index = lines
            .iter()
            .position(|ln| ln.trim().starts_with(EXPLANATION_HEADER));

        let explanations = match explanation_index {
            Some(idx) => lines[idx + 1..]
                .iter()
                .filter(|ln| ln.trim().starts_with('-'))
                .map(|ln| parse_bullet(ln))
                .collect(),
            None => Vec::new(),
        };

        Self {
            japanese_sentence,
            romaji_line: romaji_line.to_string(),
            romaji_breakdown_line: romaji_breakdown_line.to_string(),
            jlpt_line: jlpt_line.to_string(),
            explanations,
        }
    }
}

/// First line starting with `prefix` wins; later duplicates are ignored.
/// Returns the empty string when no line matches.
fn first_line_with<'a>(lines: &[&'a str], prefix: &str) -> &'a str {
    lines
        .iter()
        .find(|ln| ln.starts_with(prefix))
        .copied()
        .unwrap_or("")
}

/// Split one bullet line into its head term and display text.
fn parse_bullet(line: &str) -> Explanation {
    let bullet = line.trim();
    let core = bullet.trim_start_matches('-').trim();

    let head = HEAD_TERM_SEPARATORS
        .iter()
        .find_map(|sep| core.split_once(sep).map(|(before, _)| before))
        .unwrap_or(core);

    Explanation {
        head_term: head.trim().to_string(),
        bullet_text: bullet.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "\
Japanese: おはよう
Romaji: ohayou
Romaji breakdown: o·ha·yo·u
JLPT: N5
Explanation:
- おはよう (ohayou): good morning greeting.
";

    // -----------------------------------------------------------------------
    // Field extraction
    // -----------------------------------------------------------------------

    #[test]
    fn japanese_prefix_and_leading_space_are_stripped() {
        let lesson = Lesson::parse("Japanese: 私は学生です");
        assert_eq!(lesson.japanese_sentence, "私は学生です");
    }

    #[test]
    fn other_field_lines_keep_their_prefix() {
        let lesson = Lesson::parse(FULL_REPLY);
        assert_eq!(lesson.romaji_line, "Romaji: ohayou");
        assert_eq!(lesson.romaji_breakdown_line, "Romaji breakdown: o·ha·yo·u");
        assert_eq!(lesson.jlpt_line, "JLPT: N5");
    }

    #[test]
    fn missing_jlpt_line_yields_empty_string() {
        let lesson = Lesson::parse("Japanese: はい\nRomaji: hai\n");
        assert_eq!(lesson.jlpt_line, "");
    }

    #[test]
    fn romaji_breakdown_does_not_shadow_romaji() {
        // "Romaji breakdown:" must not be picked up as the "Romaji:" line.
        let lesson = Lesson::parse("Romaji breakdown: ta·be·ru\nRomaji: taberu\n");
        assert_eq!(lesson.romaji_line, "Romaji: taberu");
        assert_eq!(lesson.romaji_breakdown_line, "Romaji breakdown: ta·be·ru");
    }

    #[test]
    fn first_matching_line_wins_over_duplicates() {
        let lesson = Lesson::parse("JLPT: N5\nJLPT: N1\n");
        assert_eq!(lesson.jlpt_line, "JLPT: N5");
    }

    #[test]
    fn blank_lines_are_discarded_before_scanning() {
        let lesson = Lesson::parse("\n   \nJapanese: こんにちは\n\t\n");
        assert_eq!(lesson.japanese_sentence, "こんにちは");
    }

    #[test]
    fn empty_input_yields_all_empty_fields() {
        let lesson = Lesson::parse("");
        assert_eq!(lesson, Lesson::default());
    }

    // -----------------------------------------------------------------------
    // Explanation bullets
    // -----------------------------------------------------------------------

    #[test]
    fn explanation_header_with_no_bullets_yields_empty_items() {
        let lesson = Lesson::parse("Japanese: はい\nExplanation:\nnothing here\n");
        assert!(lesson.explanations.is_empty());
    }

    #[test]
    fn missing_explanation_header_yields_empty_items() {
        let lesson = Lesson::parse("Japanese: はい\n- 水 (mizu): water\n");
        assert!(lesson.explanations.is_empty());
    }

    #[test]
    fn non_bullet_lines_are_skipped_without_terminating_the_scan() {
        let raw = "Explanation:\n- 水 (mizu): water\nsome stray commentary\n- 火 (hi): fire\n";
        let lesson = Lesson::parse(raw);
        let heads: Vec<&str> = lesson
            .explanations
            .iter()
            .map(|e| e.head_term.as_str())
            .collect();
        assert_eq!(heads, vec!["水", "火"]);
    }

    #[test]
    fn head_term_splits_at_ascii_parenthesis() {
        let lesson = Lesson::parse("Explanation:\n- 水 (mizu): water\n");
        assert_eq!(lesson.explanations[0].head_term, "水");
    }

    #[test]
    fn head_term_splits_at_fullwidth_colon() {
        let lesson = Lesson::parse("Explanation:\n- 食べる：to eat\n");
        assert_eq!(lesson.explanations[0].head_term, "食べる");
    }

    #[test]
    fn head_term_splits_at_ascii_colon() {
        let lesson = Lesson::parse("Explanation:\n- taberu: to eat\n");
        assert_eq!(lesson.explanations[0].head_term, "taberu");
    }

    #[test]
    fn fullwidth_parenthesis_is_not_a_separator() {
        // `（` is outside the separator set, so the split lands on the ASCII
        // colon after it and everything before that colon stays in the head.
        let lesson = Lesson::parse("Explanation:\n- 食べる（taberu）: to eat\n");
        assert_eq!(lesson.explanations[0].head_term, "食べる（taberu）");
    }

    #[test]
    fn fullwidth_punctuation_only_bullet_keeps_full_text_as_head() {
        // No separator at all: the whole core becomes the head term.
        let lesson = Lesson::parse("Explanation:\n- 食べる（taberu）\n");
        assert_eq!(lesson.explanations[0].head_term, "食べる（taberu）");
    }

    #[test]
    fn parenthesis_takes_priority_over_colons() {
        let lesson = Lesson::parse("Explanation:\n- です (desu): polite copula: \"to be\"\n");
        assert_eq!(lesson.explanations[0].head_term, "です");
    }

    #[test]
    fn bullet_without_any_separator_keeps_full_text_as_head() {
        let lesson = Lesson::parse("Explanation:\n- おはようございます\n");
        assert_eq!(lesson.explanations[0].head_term, "おはようございます");
        assert_eq!(lesson.explanations[0].bullet_text, "- おはようございます");
    }

    #[test]
    fn bullet_with_nothing_before_separator_yields_empty_head_but_is_kept() {
        let lesson = Lesson::parse("Explanation:\n- (ohayou): good morning\n");
        assert_eq!(lesson.explanations.len(), 1);
        assert_eq!(lesson.explanations[0].head_term, "");
        assert_eq!(lesson.explanations[0].bullet_text, "- (ohayou): good morning");
    }

    #[test]
    fn bullet_text_keeps_the_marker_and_is_trimmed() {
        let lesson = Lesson::parse("Explanation:\n   - 水 (mizu): water   \n");
        assert_eq!(lesson.explanations[0].bullet_text, "- 水 (mizu): water");
    }

    // -----------------------------------------------------------------------
    // End to end + purity
    // -----------------------------------------------------------------------

    #[test]
    fn full_reply_parses_to_every_expected_field() {
        let lesson = Lesson::parse(FULL_REPLY);
        assert_eq!(
            lesson,
            Lesson {
                japanese_sentence: "おはよう".into(),
                romaji_line: "Romaji: ohayou".into(),
                romaji_breakdown_line: "Romaji breakdown: o·ha·yo·u".into(),
                jlpt_line: "JLPT: N5".into(),
                explanations: vec![Explanation {
                    head_term: "おはよう".into(),
                    bullet_text: "- おはよう (ohayou): good morning greeting.".into(),
                }],
            }
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(Lesson::parse(FULL_REPLY), Lesson::parse(FULL_REPLY));
    }
}
