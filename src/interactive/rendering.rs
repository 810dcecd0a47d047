//! TUI rendering with ratatui
//!
//! Board, keyboard hints and messages for the daily game.

use super::app::{App, InputMode, MessageStyle};
use crate::config::Theme;
use crate::core::{Guess, LetterScore, WORD_LENGTH};
use crate::history::HistoryStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::collections::BTreeMap;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<S: HistoryStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_keyboard(f, app, side_chunks[0]);
    render_messages(f, app, side_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(format!(
        "🟩 DAILY WORD - {}",
        app.game.session().date()
    ))
    .style(
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(app.theme.accent)),
    );
    f.render_widget(header, area);
}

fn score_style(score: LetterScore, theme: &Theme) -> Style {
    let bg = match score {
        LetterScore::Correct => theme.correct,
        LetterScore::Present => theme.present,
        LetterScore::Absent => theme.absent,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn guess_line(guess: &Guess, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (letter, score) in guess.letters() {
        spans.push(Span::styled(
            format!(" {} ", letter.to_ascii_uppercase()),
            score_style(score, theme),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Row for the word being typed, padded with underscores
fn typing_line(buffer: &str, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for i in 0..WORD_LENGTH {
        let tile = buffer
            .chars()
            .nth(i)
            .map_or_else(|| " _ ".to_string(), |c| format!(" {} ", c.to_ascii_uppercase()));
        spans.push(Span::styled(
            tile,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn empty_line(theme: &Theme) -> Line<'static> {
    Line::styled(
        vec![" _ "; WORD_LENGTH].join(" "),
        Style::default().fg(theme.muted),
    )
}

fn render_board<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.game.session();
    let theme = &app.theme;

    let mut lines: Vec<Line> = Vec::new();
    for guess in session.guesses() {
        lines.push(guess_line(guess, theme));
        lines.push(Line::raw(""));
    }

    let mut remaining = session.remaining_attempts();
    if app.input_mode == InputMode::Guessing && remaining > 0 {
        lines.push(typing_line(&app.input_buffer, theme));
        lines.push(Line::raw(""));
        remaining -= 1;
    }
    for _ in 0..remaining {
        lines.push(empty_line(theme));
        lines.push(Line::raw(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn keyboard_line(row: &str, hints: &BTreeMap<char, LetterScore>, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = row
        .chars()
        .map(|c| {
            let style = hints.get(&c).map_or_else(
                || Style::default().fg(Color::White),
                |&score| score_style(score, theme),
            );
            Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
        })
        .collect();
    Line::from(spans)
}

fn render_keyboard<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let hints = app.game.session().letter_hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| keyboard_line(row, &hints, &app.theme))
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut items: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(app.theme.correct),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    if app.input_mode == InputMode::Finished && !app.game.session().guesses().is_empty() {
        items.push(ListItem::new(""));
        for line in app.game.session().share_text().lines() {
            items.push(ListItem::new(line.to_string()));
        }
    }

    let messages =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn render_input<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.to_uppercase(),
            app.theme.present,
        ),
        InputMode::Finished => (
            " Game over | Press 'q' to quit ",
            String::new(),
            app.theme.correct,
        ),
    };

    let input = Paragraph::new(content)
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

fn render_status<S: HistoryStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let session = app.game.session();

    let tries = Paragraph::new(format!(
        "Tries left: {}/{}",
        session.remaining_attempts(),
        session.max_tries()
    ))
    .alignment(Alignment::Center);
    f.render_widget(tries, chunks[0]);

    let streak = Paragraph::new(format!("Streak: {}", app.game.streak()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.accent));
    f.render_widget(streak, chunks[1]);

    let rules = Paragraph::new(format!("Rules: {}", session.evaluator().name()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.muted));
    f.render_widget(rules, chunks[2]);
}
