//! Application entry point — Translator Tutor.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load `.env` and read the required `COHERE_API_KEY` (missing key halts
//!    startup before any UI is shown).
//! 3. Load [`TutorConfig`] from disk (returns default on first run).
//! 4. Load the theme asset named by the config (missing file halts startup).
//! 5. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 6. Build the chat client and speech renderer from config.
//! 7. Create orchestrator channels (`command`, `result`).
//! 8. Spawn the tutor orchestrator on the tokio runtime.
//! 9. Run [`eframe::run_native`] — blocks the main thread until the window
//!    is closed.

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use eframe::egui;
use tokio::sync::mpsc;
use translator_tutor::{
    app::{LessonAudio, SentenceAudio, TutorApp, TutorCommand, TutorResult},
    chat::{ChatClient, CohereClient, LessonPrompt},
    config::TutorConfig,
    lesson::Lesson,
    speech::{GoogleTranslateTts, SpeechRenderer},
    theme::Theme,
};

// ---------------------------------------------------------------------------
// Tutor orchestrator
// ---------------------------------------------------------------------------

/// The tutor orchestrator task, running inside the tokio runtime.
///
/// Commands are processed strictly one at a time: each submission runs its
/// chat call, then the sentence synthesis, then one synthesis per head term,
/// sequentially, before the next command is picked up. Failures map onto the
/// three recoverable tiers: a failed chat call aborts the turn (user turn
/// kept, no assistant turn); a failed sentence synthesis degrades to a
/// notice; a failed head-term synthesis is suppressed entirely.
async fn run_tutor(
    chat: Arc<dyn ChatClient>,
    speech: SpeechRenderer,
    language: String,
    mut command_rx: mpsc::Receiver<TutorCommand>,
    result_tx: mpsc::Sender<TutorResult>,
) {
    while let Some(cmd) = command_rx.recv().await {
        match cmd {
            TutorCommand::Submit { sentence } => {
                let prompt = LessonPrompt::build(&sentence);

                let raw = match chat.complete(&prompt).await {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("chat request failed: {e}");
                        let _ = result_tx
                            .send(TutorResult::ChatFailed {
                                message: e.to_string(),
                            })
                            .await;
                        continue;
                    }
                };
                log::info!("chat reply received ({} bytes)", raw.len());

                // The reply is parsed here only to drive synthesis; the UI
                // re-parses the stored raw text on every render.
                let lesson = Lesson::parse(&raw);

                let sentence_audio = match speech.render(&lesson.japanese_sentence, &language).await
                {
                    Ok(clip) if clip.is_empty() => SentenceAudio::Silent,
                    Ok(clip) => SentenceAudio::Clip(clip),
                    Err(e) => {
                        log::warn!("sentence synthesis failed: {e}");
                        SentenceAudio::Failed(e.to_string())
                    }
                };

                let mut words = Vec::with_capacity(lesson.explanations.len());
                for expl in &lesson.explanations {
                    let clip = match speech.render(&expl.head_term, &language).await {
                        Ok(clip) if clip.is_empty() => None,
                        Ok(clip) => Some(clip),
                        Err(e) => {
                            // Per-word failures are fully suppressed.
                            log::debug!("head-term synthesis failed ({:?}): {e}", expl.head_term);
                            None
                        }
                    };
                    words.push(clip);
                }

                let _ = result_tx
                    .send(TutorResult::ReplyReady {
                        raw_text: raw,
                        audio: LessonAudio {
                            sentence: sentence_audio,
                            words,
                        },
                    })
                    .await;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Native options builder
// ---------------------------------------------------------------------------

fn native_options(config: &TutorConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_inner_size([config.ui.window_size.0, config.ui.window_size.1])
        .with_min_inner_size([360.0, 420.0])
        .with_title("Translator Tutor");

    if let Some((x, y)) = config.ui.window_position {
        vp = vp.with_position(egui::pos2(x, y));
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Translator Tutor starting up");

    // 2. Credential — required before anything else happens.
    let _ = dotenvy::dotenv();
    let api_key = std::env::var("COHERE_API_KEY")
        .map_err(|_| anyhow!("COHERE_API_KEY missing — set it in the environment or a .env file"))?;

    // 3. Configuration
    let config = TutorConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        TutorConfig::default()
    });

    // 4. Theme asset — also fatal when missing.
    let theme = Theme::load(Path::new(&config.ui.theme_file))
        .with_context(|| format!("theme asset {} is required", config.ui.theme_file))?;

    // 5. Tokio runtime (2 worker threads — chat + TTS calls run here)
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 6. Provider clients
    let chat: Arc<dyn ChatClient> = Arc::new(CohereClient::new(&config.chat, api_key));
    let speech = SpeechRenderer::new(Arc::new(GoogleTranslateTts::from_config(&config.tts)));

    // 7. Channel setup
    let (command_tx, command_rx) = mpsc::channel::<TutorCommand>(16);
    let (result_tx, result_rx) = mpsc::channel::<TutorResult>(32);

    // 8. Spawn the orchestrator onto the tokio runtime
    rt.spawn(run_tutor(
        chat,
        speech,
        config.tts.language.clone(),
        command_rx,
        result_tx,
    ));

    // 9. Build the egui app and run it (blocks until the window is closed)
    let app = TutorApp::new(command_tx, result_rx, config.clone(), theme);
    let options = native_options(&config);

    eframe::run_native(
        "Translator Tutor",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("event loop error: {e}"))
}
