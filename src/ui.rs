use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::App;
use blitz::game::{classify, Game, Outcome, Phase, WordStatus};
use blitz::score;

const HORIZONTAL_MARGIN: u16 = 5;

pub fn draw(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.game.phase {
            Phase::Idle | Phase::Active => render_round(self, area, buf),
            Phase::Ended => render_end_screen(self, area, buf),
        }
    }
}

fn render_round(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let hint_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let strip_width = game.words.iter().join(" ").width();
    let mut strip_occupied_lines =
        ((strip_width as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;
    if strip_width <= max_chars_per_line as usize {
        strip_occupied_lines = 1;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(
                    (((area.height as f64 - strip_occupied_lines as f64) / 2.0) as u16)
                        .saturating_sub(2),
                ),
                Constraint::Length(2),
                Constraint::Length(strip_occupied_lines),
                Constraint::Length(
                    ((area.height as f64 - strip_occupied_lines as f64) / 2.0) as u16,
                ),
            ]
            .as_ref(),
        )
        .split(area);

    let status = if game.is_idle() {
        Span::styled(
            "press any key to start · space, tab or enter submits a word",
            hint_style,
        )
    } else {
        Span::styled(
            format!("{} pts · {}s left", game.score, game.time_left),
            bold_style,
        )
    };
    Paragraph::new(status)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    let word_spans = game
        .words
        .iter()
        .enumerate()
        .map(|(idx, word)| match game.word_status(idx) {
            WordStatus::Active => active_word_spans(game, word),
            WordStatus::Completed => vec![Span::styled(
                word.clone(),
                Style::default().patch(bold_style).fg(Color::Green),
            )],
            WordStatus::Skipped => vec![Span::styled(
                word.clone(),
                Style::default().patch(bold_style).fg(Color::Red),
            )],
            WordStatus::Pending => vec![Span::styled(word.clone(), dim_bold_style)],
        });

    let spans: Vec<Span> =
        Itertools::intersperse(word_spans, vec![Span::raw(" ")])
            .flatten()
            .collect();

    Paragraph::new(Line::from(spans))
        .alignment(if strip_occupied_lines == 1 {
            // when the strip fits on one line centering gives a nice zen feeling
            Alignment::Center
        } else {
            Alignment::Left
        })
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);
}

/// The active word: typed characters classified against the target, a
/// caret on the next expected character, the rest dimmed. Classification
/// is recomputed from the input buffer on every render, so backspace
/// immediately un-marks a character.
fn active_word_spans(game: &Game, word: &str) -> Vec<Span<'static>> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
    let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
    let dim_bold_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::DIM);
    let underlined_dim_bold_style = Style::default()
        .patch(dim_bold_style)
        .add_modifier(Modifier::UNDERLINED);

    let typed = &game.current_input;
    let mut spans: Vec<Span> = typed
        .chars()
        .zip(classify(typed, word))
        .map(|(c, outcome)| match outcome {
            Outcome::Correct => Span::styled(c.to_string(), green_bold_style),
            Outcome::Incorrect => Span::styled(
                match c {
                    ' ' => "·".to_owned(),
                    c => c.to_string(),
                },
                red_bold_style,
            ),
        })
        .collect();

    let remaining: Vec<char> = word.chars().skip(typed.chars().count()).collect();
    if let Some((caret, rest)) = remaining.split_first() {
        spans.push(Span::styled(caret.to_string(), underlined_dim_bold_style));
        spans.push(Span::styled(rest.iter().collect::<String>(), dim_bold_style));
    }

    spans
}

fn render_end_screen(app: &App, area: Rect, buf: &mut Buffer) {
    let game = &app.game;
    let reward = score::resolve(game.score);

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let hint_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC);

    let lines = vec![
        Line::from(Span::styled(reward.message, bold_style)),
        Line::default(),
        Line::from(Span::styled(format!("[{}]", reward.asset), hint_style)),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "{} pts · {} completed · {} skipped",
                game.score,
                game.completed.len(),
                game.skipped.len()
            ),
            bold_style,
        )),
        Line::default(),
        Line::from(Span::styled("(r)etry · (t)weet · (esc)ape", hint_style)),
    ];

    let occupied = lines.len() as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints(
            [
                Constraint::Length(((area.height as f64 - occupied as f64) / 2.0) as u16),
                Constraint::Min(occupied),
            ]
            .as_ref(),
        )
        .split(area);

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], buf);
}
