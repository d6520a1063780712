mod ui;

use blitz::{
    config::{Config, ConfigStore, FileConfigStore},
    game::Game,
    pool::Vocabulary,
    runtime::{EventSource, GameEvent, TerminalEvents},
    telemetry::{self, CsvTelemetry, NoopTelemetry, Telemetry},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};
use webbrowser::Browser;

const TICK_RATE_MS: u64 = 1000;

/// fast-paced word-blitz typing game for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A fast-paced typing game: a shuffled strip of words, a countdown, and a tiered reward ladder at the end. Type each word and submit with space, tab or enter before the clock runs out."
)]
pub struct Cli {
    /// number of seconds in a round
    #[clap(short = 's', long)]
    number_of_secs: Option<u32>,

    /// vocabulary to pull words from
    #[clap(short = 'v', long)]
    vocabulary: Option<String>,

    /// disable the local telemetry event log
    #[clap(long)]
    no_telemetry: bool,
}

/// Effective per-run settings: the stored config overridden by CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub number_of_secs: u32,
    pub vocabulary: String,
    pub telemetry: bool,
}

impl Settings {
    fn resolve(cli: &Cli, cfg: &Config) -> Self {
        Self {
            number_of_secs: cli.number_of_secs.unwrap_or(cfg.number_of_secs),
            vocabulary: cli
                .vocabulary
                .clone()
                .unwrap_or_else(|| cfg.vocabulary.clone()),
            telemetry: cfg.telemetry && !cli.no_telemetry,
        }
    }
}

/// Owns the round, the vocabulary it is drawn from, and the telemetry
/// sink. All game mutation goes through these methods; the event loop
/// only translates keys.
pub struct App {
    pub game: Game,
    pub vocabulary: Vocabulary,
    pub settings: Settings,
    telemetry: Box<dyn Telemetry>,
}

impl App {
    pub fn new(settings: Settings, telemetry: Box<dyn Telemetry>) -> Self {
        let vocabulary = Vocabulary::new(&settings.vocabulary);
        let game = Game::new(vocabulary.draw_round(), settings.number_of_secs);
        Self {
            game,
            vocabulary,
            settings,
            telemetry,
        }
    }

    /// A printable key while idle starts the clock and then lands in the
    /// input buffer, so the first word attempt begins with it.
    pub fn on_char(&mut self, c: char) {
        if self.game.is_idle() && self.game.start() {
            self.telemetry.record(&telemetry::Event::GameStarted);
        }
        self.game.write(c);
    }

    pub fn on_backspace(&mut self) {
        self.game.backspace();
    }

    pub fn on_commit(&mut self) {
        if let Some(outcome) = self.game.commit_word() {
            let event = if outcome.correct {
                telemetry::Event::WordCompleted { word: outcome.word }
            } else {
                telemetry::Event::WordSkipped {
                    word: outcome.word,
                    typed: outcome.typed,
                }
            };
            self.telemetry.record(&event);
            self.record_end_if_over();
        }
    }

    pub fn on_tick(&mut self) {
        let was_active = self.game.is_active();
        self.game.on_tick();
        if was_active {
            self.record_end_if_over();
        }
    }

    /// Back to idle over a freshly shuffled round; the next keypress
    /// starts it.
    pub fn retry(&mut self) {
        if !self.game.has_ended() {
            return;
        }
        self.telemetry.record(&telemetry::Event::GameRetry);
        self.game = Game::new(self.vocabulary.draw_round(), self.settings.number_of_secs);
    }

    fn record_end_if_over(&mut self) {
        if self.game.has_ended() {
            self.telemetry.record(&telemetry::Event::GameEnded {
                score: self.game.score,
                completed_words: self.game.completed.len(),
                skipped_words: self.game.skipped.len(),
            });
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let settings = Settings::resolve(&cli, &FileConfigStore::new().load());
    let sink: Box<dyn Telemetry> = if settings.telemetry {
        Box::new(CsvTelemetry::new())
    } else {
        Box::new(NoopTelemetry)
    };
    let mut app = App::new(settings, sink);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = TerminalEvents::spawn(Duration::from_millis(TICK_RATE_MS));
    let res = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &impl EventSource,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui::draw(app, f))?;

    while let Some(event) = events.next() {
        match event {
            GameEvent::Tick => {
                app.on_tick();
                // the idle screen is static; no point repainting it once a second
                if !app.game.is_idle() {
                    terminal.draw(|f| ui::draw(app, f))?;
                }
            }
            GameEvent::Resize => {
                terminal.draw(|f| ui::draw(app, f))?;
            }
            GameEvent::Key(key) => {
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Backspace => app.on_backspace(),
                    KeyCode::Tab | KeyCode::Enter => app.on_commit(),
                    KeyCode::Char(' ') => app.on_commit(),
                    KeyCode::Char(c) => {
                        if app.game.has_ended() {
                            match c {
                                'r' => app.retry(),
                                't' => share_score(app),
                                _ => {}
                            }
                        } else {
                            app.on_char(c);
                        }
                    }
                    _ => {}
                }
                terminal.draw(|f| ui::draw(app, f))?;
            }
        }
    }

    Ok(())
}

fn share_score(app: &App) {
    if Browser::is_available() {
        let text = format!(
            "{}%20words%20in%20{}%20seconds%20of%20word%20blitz",
            app.game.score, app.settings.number_of_secs
        );
        webbrowser::open(&format!("https://twitter.com/intent/tweet?text={text}"))
            .unwrap_or_default();
    }
}
