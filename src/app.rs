//! Translator Tutor chat window — egui/eframe application.
//!
//! # Architecture
//!
//! [`TutorApp`] is the top-level [`eframe::App`] that owns the UI state, the
//! [`Session`] history, and two channel endpoints:
//!
//! * `command_tx` — sends [`TutorCommand`] to the tutor orchestrator.
//! * `result_rx`  — receives [`TutorResult`] from the orchestrator.
//!
//! The session is the explicit owner of the append-only turn sequence: the
//! app pushes the user turn on submit and the assistant turn when the reply
//! arrives. Assistant turns are stored verbatim and re-parsed with
//! [`Lesson::parse`] on every frame; only the synthesized audio is carried
//! in the per-turn [`LessonAudio`] record, keyed by turn index.
//!
//! # Error tiers (as rendered)
//!
//! | Failure | Visual |
//! |---------|--------|
//! | chat call | error row under the history; user turn kept |
//! | sentence audio | notice + error text in place of the play button |
//! | head-term audio | suppressed entirely; row renders without a button |

use std::collections::HashMap;
use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::config::TutorConfig;
use crate::lesson::Lesson;
use crate::session::{Role, Session};
use crate::speech::{playback, AudioClip};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Orchestrator message types (owned by the ui module; the orchestrator
// imports them from here).
// ---------------------------------------------------------------------------

/// Commands sent from the UI thread to the tutor orchestrator.
#[derive(Debug, Clone)]
pub enum TutorCommand {
    /// Translate and explain one English sentence.
    Submit { sentence: String },
}

/// Audio outcome for the full Japanese sentence of one reply.
#[derive(Debug, Clone)]
pub enum SentenceAudio {
    /// Synthesis succeeded; a play control is drawn.
    Clip(AudioClip),
    /// Nothing to say (no Japanese line, or an empty one); no control drawn.
    Silent,
    /// Synthesis failed; a notice plus the error text is drawn instead.
    Failed(String),
}

/// Synthesized audio for one assistant reply, aligned with the parsed lesson.
///
/// `words[i]` belongs to explanation bullet `i`; `None` means either a blank
/// head term or a suppressed synthesis failure — no button either way.
#[derive(Debug, Clone)]
pub struct LessonAudio {
    pub sentence: SentenceAudio,
    pub words: Vec<Option<AudioClip>>,
}

/// Results delivered from the orchestrator back to the UI.
#[derive(Debug, Clone)]
pub enum TutorResult {
    /// The model replied; `raw_text` is appended to the session verbatim.
    ReplyReady { raw_text: String, audio: LessonAudio },
    /// The chat call failed; no assistant turn is appended.
    ChatFailed { message: String },
}

// ---------------------------------------------------------------------------
// TutorApp
// ---------------------------------------------------------------------------

/// eframe application — the Translator Tutor chat window.
pub struct TutorApp {
    // ── Conversation state ───────────────────────────────────────────────
    /// Append-only chat history (explicitly owned here, not ambient).
    session: Session,
    /// Synthesized audio per assistant turn, keyed by session turn index.
    audio: HashMap<usize, LessonAudio>,
    /// Chat failure message for the most recent submission, if any.
    last_error: Option<String>,
    /// A submission is in flight; input is disabled until the result lands.
    pending: bool,

    // ── UI state ─────────────────────────────────────────────────────────
    /// Contents of the input box.
    input: String,
    /// The theme is applied once, on the first frame.
    theme_applied: bool,

    // ── Channels ─────────────────────────────────────────────────────────
    command_tx: mpsc::Sender<TutorCommand>,
    result_rx: mpsc::Receiver<TutorResult>,

    // ── Configuration ────────────────────────────────────────────────────
    /// Application configuration (read-only after startup).
    pub config: TutorConfig,
    /// Theme colors loaded at startup.
    theme: Theme,
}

impl TutorApp {
    /// Create a new [`TutorApp`].
    pub fn new(
        command_tx: mpsc::Sender<TutorCommand>,
        result_rx: mpsc::Receiver<TutorResult>,
        config: TutorConfig,
        theme: Theme,
    ) -> Self {
        Self {
            session: Session::new(),
            audio: HashMap::new(),
            last_error: None,
            pending: false,
            input: String::new(),
            theme_applied: false,
            command_tx,
            result_rx,
            config,
            theme,
        }
    }

    // ── Channel polling ──────────────────────────────────────────────────

    /// Drain all pending orchestrator results (non-blocking).
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                TutorResult::ReplyReady { raw_text, audio } => {
                    let idx = self.session.push_assistant(raw_text);
                    self.audio.insert(idx, audio);
                    self.pending = false;
                }
                TutorResult::ChatFailed { message } => {
                    // The user turn stays in the history; no assistant turn.
                    self.last_error = Some(message);
                    self.pending = false;
                }
            }
        }
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Push the typed sentence as a user turn and hand it to the orchestrator.
    fn submit(&mut self) {
        let sentence = self.input.trim().to_string();
        if sentence.is_empty() || self.pending {
            return;
        }

        self.session.push_user(sentence.clone());
        self.last_error = None;
        self.pending = true;
        self.input.clear();

        if self
            .command_tx
            .try_send(TutorCommand::Submit { sentence })
            .is_err()
        {
            log::error!("orchestrator channel closed; cannot submit");
            self.pending = false;
            self.last_error = Some("internal error: tutor task is not running".into());
        }
    }

    // ── History rendering ────────────────────────────────────────────────

    fn draw_history(&mut self, ui: &mut egui::Ui) {
        // Snapshot to avoid holding a borrow of the session while calling
        // rendering helpers on self.
        let turns: Vec<(usize, Role, String)> = self
            .session
            .turns()
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.role, t.content.clone()))
            .collect();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for (idx, role, content) in &turns {
                    match role {
                        Role::User => self.draw_user_turn(ui, content),
                        Role::Assistant => self.draw_assistant_turn(ui, *idx, content),
                    }
                    ui.add_space(8.0);
                }

                if self.pending {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            egui::RichText::new("先生が考えています...")
                                .color(self.theme.muted)
                                .size(12.0),
                        );
                    });
                }

                if let Some(ref msg) = self.last_error {
                    ui.label(
                        egui::RichText::new("Error talking to the chat API.")
                            .color(self.theme.error)
                            .size(13.0),
                    );
                    ui.label(
                        egui::RichText::new(msg.as_str())
                            .color(self.theme.error)
                            .size(11.0),
                    );
                }
            });
    }

    fn draw_user_turn(&self, ui: &mut egui::Ui, content: &str) {
        egui::Frame::new()
            .fill(self.theme.user_bubble)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(content)
                        .color(self.theme.text)
                        .size(13.0),
                );
            });
    }

    /// Render one assistant reply: the lesson fields are re-parsed from the
    /// raw turn text on every frame; audio comes from the per-turn record.
    fn draw_assistant_turn(&self, ui: &mut egui::Ui, idx: usize, raw: &str) {
        let lesson = Lesson::parse(raw);
        let audio = self.audio.get(&idx);

        egui::Frame::new()
            .fill(self.theme.assistant_bubble)
            .corner_radius(egui::CornerRadius::same(6))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                if !lesson.japanese_sentence.is_empty() {
                    ui.label(
                        egui::RichText::new(format!("Japanese: {}", lesson.japanese_sentence))
                            .color(self.theme.text)
                            .strong()
                            .size(15.0),
                    );
                }
                for line in [
                    &lesson.romaji_line,
                    &lesson.romaji_breakdown_line,
                    &lesson.jlpt_line,
                ] {
                    if !line.is_empty() {
                        ui.label(
                            egui::RichText::new(line.as_str())
                                .color(self.theme.muted)
                                .size(12.0),
                        );
                    }
                }

                if let Some(audio) = audio {
                    self.draw_sentence_audio(ui, &audio.sentence);
                }

                if !lesson.explanations.is_empty() {
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Explanation & word-by-word audio:")
                            .color(self.theme.accent)
                            .strong()
                            .size(12.0),
                    );
                    for (i, expl) in lesson.explanations.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(expl.bullet_text.as_str())
                                    .color(self.theme.text)
                                    .size(12.0),
                            );
                            // A button only when a clip exists; blank head
                            // terms and failed syntheses draw nothing.
                            let clip = audio.and_then(|a| a.words.get(i)).and_then(|c| c.as_ref());
                            if let Some(clip) = clip {
                                if ui.small_button("🔊").clicked() {
                                    playback::play(clip);
                                }
                            }
                        });
                    }
                }
            });
    }

    fn draw_sentence_audio(&self, ui: &mut egui::Ui, sentence: &SentenceAudio) {
        match sentence {
            SentenceAudio::Clip(clip) => {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("🔊 Listen to the whole sentence:")
                            .color(self.theme.accent)
                            .size(12.0),
                    );
                    if ui.small_button("Play").clicked() {
                        playback::play(clip);
                    }
                });
            }
            SentenceAudio::Silent => {}
            SentenceAudio::Failed(err) => {
                ui.label(
                    egui::RichText::new("Couldn't generate sentence audio.")
                        .color(self.theme.muted)
                        .size(12.0),
                );
                ui.label(
                    egui::RichText::new(err.as_str())
                        .color(self.theme.muted)
                        .size(10.0),
                );
            }
        }
    }

    // ── Input row ────────────────────────────────────────────────────────

    fn draw_input_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let send_width = 56.0;
            let edit_width = (ui.available_width() - send_width).max(80.0);

            let response = ui.add_sized(
                [edit_width, 24.0],
                egui::TextEdit::singleline(&mut self.input)
                    .hint_text("Type your English sentence..."),
            );

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let clicked = ui
                .add_sized([send_width, 24.0], egui::Button::new("Send"))
                .clicked();

            if enter_pressed || clicked {
                self.submit();
                response.request_focus();
            }
        });
    }
}

// ---------------------------------------------------------------------------
// eframe::App impl
// ---------------------------------------------------------------------------

impl eframe::App for TutorApp {
    /// Called every frame by eframe. Polls channels, then renders the window.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        self.poll_results();

        // Keep polling while a reply is in flight.
        if self.pending {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("input").show(ctx, |ui| {
            ui.add_space(4.0);
            self.draw_input_row(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(
                egui::RichText::new("翻訳 講師 Translator Tutor 🌸")
                    .color(self.theme.accent),
            );
            ui.label(
                egui::RichText::new(
                    "Type any English sentence and get a natural Japanese translation \
                     with romaji, a JLPT estimate, and audio for the whole sentence \
                     plus each key word.",
                )
                .color(self.theme.muted)
                .size(12.0),
            );
            ui.separator();
            self.draw_history(ui);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Translator Tutor closing ({} turns)", self.session.len());
    }
}
