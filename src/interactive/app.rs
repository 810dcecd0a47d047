//! TUI application state and logic

use crate::commands::DailyGame;
use crate::config::Theme;
use crate::core::WORD_LENGTH;
use crate::game::Outcome;
use crate::history::HistoryStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<S: HistoryStore> {
    pub game: DailyGame<S>,
    pub theme: Theme,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: HistoryStore> App<S> {
    #[must_use]
    pub fn new(game: DailyGame<S>, theme: Theme) -> Self {
        let mut app = Self {
            game,
            theme,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        if app.game.finished_earlier() {
            app.add_message(
                "You have already played today. Come back tomorrow!",
                MessageStyle::Info,
            );
            app.finish();
        } else if app.game.session().guesses().is_empty() {
            app.add_message(
                &format!(
                    "Guess the {WORD_LENGTH}-letter word in {} tries.",
                    app.game.session().max_tries()
                ),
                MessageStyle::Info,
            );
        } else {
            app.add_message("Resuming today's game.", MessageStyle::Info);
        }

        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
                    self.should_quit = true;
                }
            }
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&text) {
            Ok(submission) => {
                if let Some(err) = &submission.save_error {
                    self.add_message(&format!("History not saved: {err}"), MessageStyle::Error);
                }
                match submission.state {
                    Outcome::Playing => {
                        let left = self.game.session().remaining_attempts();
                        self.add_message(
                            &format!(
                                "{} {} left",
                                left,
                                if left == 1 { "try" } else { "tries" }
                            ),
                            MessageStyle::Info,
                        );
                    }
                    Outcome::Win => {
                        let celebration = match self.game.session().guesses().len() {
                            1 => "🎯 Genius! First try!",
                            2 => "🔥 Magnificent! Two guesses!",
                            3 => "✨ Splendid! Three guesses!",
                            4 => "👏 Great job! Four guesses!",
                            5 => "🎉 Nice work! Five guesses!",
                            _ => "😅 Phew! You win!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.finish();
                    }
                    Outcome::Lose => {
                        self.add_message(
                            &format!(
                                "You lose! The word was {}",
                                self.game.session().secret().text().to_uppercase()
                            ),
                            MessageStyle::Error,
                        );
                        self.finish();
                    }
                }
            }
            Err(rejection) => {
                // Keep the letters so a typo can be corrected
                self.input_buffer = text;
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::Finished;
        self.add_message(
            &format!("Current streak: {}", self.game.streak()),
            MessageStyle::Info,
        );
        self.add_message("Press 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: HistoryStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            // Leave the result on the normal screen
            if app.game.is_finished() && !app.game.session().guesses().is_empty() {
                println!("{}", app.game.session().share_text());
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: HistoryStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<App<S>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::history::{HistoryRecord, MemoryStore, StreakLedger};
    use crate::wordlists::WordList;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn app_with(store: MemoryStore) -> App<MemoryStore> {
        let config = GameConfig {
            date: day(),
            ..GameConfig::default()
        };
        let game = DailyGame::start(
            &config,
            &WordList::from_slice(&["apple"]),
            WordList::from_slice(&["apple", "table"]),
            StreakLedger::open(store),
        )
        .unwrap();
        App::new(game, Theme::default())
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_is_capped_and_lowercased() {
        let mut app = app_with(MemoryStore::new());
        type_word(&mut app, "TABLES1");
        assert_eq!(app.input_buffer, "table");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "tabl");
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let mut app = app_with(MemoryStore::new());
        type_word(&mut app, "abc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_buffer, "abc");
        assert!(app.game.session().guesses().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn winning_guess_finishes() {
        let mut app = app_with(MemoryStore::new());
        type_word(&mut app, "table");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "apple");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Finished);
        assert!(app.messages.iter().any(|m| m.style == MessageStyle::Success));

        // Letters no longer reach the buffer
        type_word(&mut app, "ab");
        assert!(app.input_buffer.is_empty());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn finished_day_opens_finished() {
        let store = MemoryStore::with_records(vec![HistoryRecord::finished(
            day(),
            "apple",
            3,
            true,
            1,
        )]);
        let app = app_with(store);
        assert_eq!(app.input_mode, InputMode::Finished);
    }

    #[test]
    fn ctrl_c_quits_while_guessing() {
        let mut app = app_with(MemoryStore::new());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.input_buffer.is_empty());
    }
}
