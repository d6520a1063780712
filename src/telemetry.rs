use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

/// Gameplay events worth logging. Names serialize to the snake_case form
/// used in the event log ("game_started", "word_skipped", ...).
#[derive(Clone, Debug, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Event {
    GameStarted,
    WordCompleted {
        word: String,
    },
    WordSkipped {
        word: String,
        typed: String,
    },
    GameEnded {
        score: u32,
        completed_words: usize,
        skipped_words: usize,
    },
    GameRetry,
}

/// Fire-and-forget event sink. Implementations must never block or fail
/// the caller; a sink that can't write simply drops the event.
pub trait Telemetry {
    fn record(&mut self, event: &Event);
}

/// Sink used when telemetry is disabled.
#[derive(Debug, Default)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn record(&mut self, _event: &Event) {}
}

/// Appends one CSV row per event to a log under the user state directory,
/// emitting a header row when creating the file.
#[derive(Debug)]
pub struct CsvTelemetry {
    path: Option<PathBuf>,
}

impl CsvTelemetry {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::telemetry_log_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: Some(p.as_ref().to_path_buf()),
        }
    }

    fn append(&self, event: &Event) -> csv::Result<()> {
        let path = match &self.path {
            Some(p) => p,
            None => return Ok(()),
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let needs_header = !path.exists();

        let log_file = OpenOptions::new().append(true).create(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(log_file);

        if needs_header {
            writer.write_record([
                "date",
                "event",
                "word",
                "typed",
                "score",
                "completed_words",
                "skipped_words",
            ])?;
        }

        let mut row = vec![
            Local::now().format("%c").to_string(),
            event.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ];
        match event {
            Event::GameStarted | Event::GameRetry => {}
            Event::WordCompleted { word } => {
                row[2] = word.clone();
            }
            Event::WordSkipped { word, typed } => {
                row[2] = word.clone();
                row[3] = typed.clone();
            }
            Event::GameEnded {
                score,
                completed_words,
                skipped_words,
            } => {
                row[4] = score.to_string();
                row[5] = completed_words.to_string();
                row[6] = skipped_words.to_string();
            }
        }

        writer.write_record(&row)?;
        writer.flush()?;
        Ok(())
    }
}

impl Telemetry for CsvTelemetry {
    fn record(&mut self, event: &Event) {
        let _ = self.append(event);
    }
}
