//! TUI rendering with ratatui
//!
//! Layout for the unscramble game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{score_bar, score_verdict, spaced_letters};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Progress and messages
        ])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::FinalScore {
        render_final_score(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let engine = &app.engine;

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} of {} words", engine.current_word_count(), engine.max_words()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            spaced_letters(engine.current_scrambled_word()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Unscramble the word using all the letters."),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Current Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score gauge
            Constraint::Length(3), // Round gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_round_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let score = app.engine.score();
    let max_score = app.engine.config().max_score();
    let percent = if max_score == 0 {
        0
    } else {
        (u64::from(score) * 100 / max_score).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!("{score} / {max_score}"));

    f.render_widget(gauge, area);
}

fn render_round_progress<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let count = app.engine.current_word_count();
    let max = app.engine.max_words();
    let percent = if max == 0 {
        0
    } else {
        (count * 100 / max).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{count} / {max}"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let (title, color) = if app.guess_error {
        (" Try again! ", Color::Red)
    } else {
        (" Enter your word | Enter: Submit  Tab: Skip ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let games_text = format!(
        "Games: {} | Best: {} | Avg: {:.0}",
        app.stats.games_played,
        app.stats.best_score,
        app.stats.average_score()
    );
    f.render_widget(
        Paragraph::new(games_text).alignment(Alignment::Center),
        chunks[0],
    );

    let words_text = format!(
        "Solved: {} | Skipped: {}",
        app.stats.words_solved, app.stats.words_skipped
    );
    f.render_widget(
        Paragraph::new(words_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::FinalScore => "r: Play Again | q: Exit",
        InputMode::Guessing => "Enter: Submit | Tab: Skip | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_final_score<R: Rng>(f: &mut Frame, app: &App<R>) {
    let area = centered_rect(50, 40, f.area());
    let score = app.engine.score();
    let max_score = app.engine.config().max_score();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            score_verdict(score, max_score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("You scored: "),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" / {max_score}")),
        ]),
        Line::from(score_bar(score, max_score, 20)),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Play Again    [q] Exit",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🎉 Congratulations! 🎉 ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
