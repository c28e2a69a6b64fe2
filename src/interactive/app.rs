//! TUI application state and logic

use crate::core::{AllowedDiacritics, LetterPool, SLOVAK_DIACRITICS};
use crate::engine::{MatchResult, QueryConfig, ResultSet, ResultView, WordGenerator};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub generator: WordGenerator,
    pub config: QueryConfig,
    pub letters: String,
    pub results: Option<ResultSet>,
    pub view: ResultView,
    pub input_mode: InputMode,
    /// Selected entry of the diacritic palette
    pub palette_cursor: usize,
    /// First visible result row
    pub scroll: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// One row of the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLine<'a> {
    /// Header opening a length group in the grouped view
    Group { length: usize, count: usize },
    /// A ranked match; rank restarts in every group
    Entry { rank: usize, result: &'a MatchResult },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing into the letter pool
    Letters,
    /// Navigating the diacritic palette
    Palette,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

impl App {
    #[must_use]
    pub fn new(generator: WordGenerator, config: QueryConfig) -> Self {
        Self {
            generator,
            config,
            letters: String::new(),
            results: None,
            view: ResultView::default(),
            input_mode: InputMode::Letters,
            palette_cursor: 0,
            scroll: 0,
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Enter exactly {} letters and press Enter.",
                        config.target_length
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB opens the diacritic palette.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Number of tiles the current letters normalize to
    #[must_use]
    pub fn pool_length(&self) -> usize {
        LetterPool::new(&self.letters, self.config.allowed).len()
    }

    /// Run the query for the current letters
    pub fn generate(&mut self) {
        if self.letters.is_empty() {
            self.add_message("Enter some letters first.", MessageStyle::Warning);
            return;
        }

        match self.generator.generate(&self.letters, &self.config) {
            Ok(results) => {
                if results.is_empty() {
                    self.add_message("No words found.", MessageStyle::Warning);
                } else {
                    self.add_message(
                        &format!("Found {} words", results.len()),
                        MessageStyle::Success,
                    );
                }
                self.results = Some(results);
                self.scroll = 0;
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Clear the letters and the last results
    pub fn clear(&mut self) {
        self.letters.clear();
        self.results = None;
        self.scroll = 0;
        self.add_message("Cleared.", MessageStyle::Info);
    }

    pub fn push_letter(&mut self, c: char) {
        if c.is_alphabetic() {
            self.letters.push(c);
        }
    }

    pub fn pop_letter(&mut self) {
        self.letters.pop();
    }

    /// The diacritic under the palette cursor
    #[must_use]
    pub fn selected_diacritic(&self) -> char {
        SLOVAK_DIACRITICS[self.palette_cursor % SLOVAK_DIACRITICS.len()]
    }

    /// Move the palette cursor, wrapping around
    pub fn move_cursor(&mut self, forward: bool) {
        let len = SLOVAK_DIACRITICS.len();
        self.palette_cursor = if forward {
            (self.palette_cursor + 1) % len
        } else {
            (self.palette_cursor + len - 1) % len
        };
    }

    /// Allow or disallow the selected diacritic
    ///
    /// Results of the previous configuration are dropped since their scores
    /// and membership no longer apply.
    pub fn toggle_selected(&mut self) {
        let c = self.selected_diacritic();
        let now_allowed = self.config.allowed.toggle(c);
        self.results = None;
        self.scroll = 0;
        let text = if now_allowed {
            format!("'{c}' is now a separate letter")
        } else {
            format!("'{c}' now counts as '{}'", crate::core::base_letter(c).unwrap_or(c))
        };
        self.add_message(&text, MessageStyle::Info);
    }

    /// Append the selected diacritic to the letters
    pub fn insert_selected(&mut self) {
        let c = self.selected_diacritic();
        self.letters.push(c);
    }

    /// Allow every diacritic, or none if all are already allowed
    pub fn toggle_all(&mut self) {
        self.config.allowed = if self.config.allowed == AllowedDiacritics::all() {
            AllowedDiacritics::none()
        } else {
            AllowedDiacritics::all()
        };
        self.results = None;
        self.scroll = 0;
    }

    /// Switch to the next target length preset
    pub fn cycle_length(&mut self) {
        self.config.cycle_length();
        self.results = None;
        self.scroll = 0;
        self.add_message(
            &format!("Now expecting {} letters", self.config.target_length),
            MessageStyle::Info,
        );
    }

    pub fn next_view(&mut self) {
        self.view = self.view.next();
        self.scroll = 0;
    }

    pub fn previous_view(&mut self) {
        self.view = self.view.previous();
        self.scroll = 0;
    }

    /// Rows of the results table for the current view
    #[must_use]
    pub fn result_lines(&self) -> Vec<ResultLine<'_>> {
        let Some(results) = &self.results else {
            return Vec::new();
        };

        if self.view != ResultView::Grouped {
            return results
                .view(self.view, results.len())
                .into_iter()
                .enumerate()
                .map(|(i, result)| ResultLine::Entry { rank: i + 1, result })
                .collect();
        }

        let mut lines = Vec::with_capacity(results.len());
        for group in results.grouped_by_length() {
            lines.push(ResultLine::Group {
                length: group.length,
                count: group.matches.len(),
            });
            lines.extend(
                group
                    .matches
                    .into_iter()
                    .enumerate()
                    .map(|(i, result)| ResultLine::Entry { rank: i + 1, result }),
            );
        }
        lines
    }

    /// Number of rows the current view has
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.result_lines().len()
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.row_count().saturating_sub(1);
        self.scroll = (self.scroll + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Tab => {
                self.input_mode = match self.input_mode {
                    InputMode::Letters => InputMode::Palette,
                    InputMode::Palette => InputMode::Letters,
                };
            }
            KeyCode::Up => self.scroll_up(1),
            KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::F(2) => self.cycle_length(),
            KeyCode::F(3) => self.toggle_all(),
            _ => match self.input_mode {
                InputMode::Letters => self.handle_letters_key(code),
                InputMode::Palette => self.handle_palette_key(code),
            },
        }
    }

    fn handle_letters_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear(),
            KeyCode::Enter => self.generate(),
            KeyCode::Backspace => self.pop_letter(),
            KeyCode::Left => self.previous_view(),
            KeyCode::Right => self.next_view(),
            KeyCode::Char(c) => self.push_letter(c),
            _ => {}
        }
    }

    fn handle_palette_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Letters,
            KeyCode::Left => self.move_cursor(false),
            KeyCode::Right => self.move_cursor(true),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Enter => self.insert_selected(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
