//! Application state: question input and the result area.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use oracle_core::copy;
use oracle_core::{Oracle, OracleAnswer};

/// What the result area is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Nothing asked yet.
    Idle,
    /// The question was empty.
    Warning(String),
    /// The submission failed for a data reason.
    Error(String),
    /// An answer is ready but held back until `reveal_at`.
    Turning {
        /// The answer to show.
        answer: OracleAnswer,
        /// When to show it.
        reveal_at: Instant,
    },
    /// The card is showing.
    Card(OracleAnswer),
}

/// Main application state.
#[derive(Debug)]
pub struct OracleApp {
    oracle: Oracle,
    pause: Duration,
    /// Current input text.
    pub input_text: String,
    /// Cursor position within input text (byte offset).
    pub input_cursor: usize,
    /// What the result area shows.
    pub view: View,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl OracleApp {
    /// Create the app over a loaded oracle.
    pub fn new(oracle: Oracle, pause: Duration) -> Self {
        Self {
            oracle,
            pause,
            input_text: String::new(),
            input_cursor: 0,
            view: View::Idle,
            should_quit: false,
        }
    }

    /// Submit the current input as a question.
    ///
    /// The input is kept so the question stays visible above its answer.
    pub fn submit(&mut self, now: Instant) {
        self.view = match self.oracle.consult(&self.input_text) {
            Ok(answer) if self.pause.is_zero() => View::Card(answer),
            Ok(answer) => View::Turning {
                answer,
                reveal_at: now + self.pause,
            },
            Err(e) if e.is_user_error() => View::Warning(copy::message_for(&e)),
            Err(e) => View::Error(copy::message_for(&e)),
        };
    }

    /// Reveal a held-back answer once its time has come.
    pub fn tick(&mut self, now: Instant) {
        if let View::Turning { answer, reveal_at } = &self.view
            && now >= *reveal_at
        {
            self.view = View::Card(answer.clone());
        }
    }

    /// Time left until a pending answer is revealed, if one is pending.
    pub fn time_to_reveal(&self, now: Instant) -> Option<Duration> {
        match &self.view {
            View::Turning { reveal_at, .. } => Some(reveal_at.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(now),
            KeyCode::Esc => {
                if self.input_text.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_text.clear();
                    self.input_cursor = 0;
                }
            }
            KeyCode::Backspace => {
                if self.input_cursor > 0 {
                    let prev = self.prev_boundary();
                    self.input_text.remove(prev);
                    self.input_cursor = prev;
                }
            }
            KeyCode::Left => {
                if self.input_cursor > 0 {
                    self.input_cursor = self.prev_boundary();
                }
            }
            KeyCode::Right => {
                if self.input_cursor < self.input_text.len() {
                    let next = self.input_text[self.input_cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.input_cursor + i)
                        .unwrap_or(self.input_text.len());
                    self.input_cursor = next;
                }
            }
            KeyCode::Home => self.input_cursor = 0,
            KeyCode::End => self.input_cursor = self.input_text.len(),
            KeyCode::Char(c) => {
                self.input_text.insert(self.input_cursor, c);
                self.input_cursor += c.len_utf8();
            }
            _ => {}
        }
    }

    fn prev_boundary(&self) -> usize {
        self.input_text[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Draw the whole screen.
    pub fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(3), // Input
                Constraint::Min(0),    // Result
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_input(frame, chunks[1]);
        self.draw_result(frame, chunks[2]);

        let status = Paragraph::new("Enter:consult  Esc:clear/quit  Ctrl+C:quit")
            .style(Style::default().fg(Color::Black).bg(Color::White));
        frame.render_widget(status, chunks[3]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(copy::TITLE, Style::default().bold())),
            Line::from(Span::styled(
                copy::SUBTITLE[0],
                Style::default().fg(Color::DarkGray).italic(),
            )),
            Line::from(Span::styled(
                copy::SUBTITLE[1],
                Style::default().fg(Color::DarkGray).italic(),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn draw_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", copy::SUBMIT))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);

        let content = if self.input_text.is_empty() {
            Line::from(Span::styled(
                copy::PROMPT,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input_text.as_str())
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        let cursor_col = self.input_text[..self.input_cursor].chars().count() as u16;
        frame.set_cursor_position((inner.x + cursor_col.min(inner.width), inner.y));
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect) {
        let muted = Style::default().fg(Color::DarkGray);
        let lines: Vec<Line<'_>> = match &self.view {
            View::Idle => vec![
                Line::from(""),
                Line::from(Span::styled(copy::IDLE_FOOTER, muted.italic())),
            ],
            View::Warning(msg) => vec![
                Line::from(""),
                Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow))),
            ],
            View::Error(msg) => vec![
                Line::from(""),
                Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
            ],
            View::Turning { .. } => vec![
                Line::from(""),
                Line::from(Span::styled(copy::TURNING_PAGE, muted.italic())),
            ],
            View::Card(answer) => card_lines(answer),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Lines of the oracle card.
fn card_lines(answer: &OracleAnswer) -> Vec<Line<'_>> {
    let muted = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(""),
        Line::from(Span::styled(answer.image_url.as_str(), muted.underlined())),
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", answer.main_text),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(answer.source_label.to_uppercase(), muted)),
        Line::from(""),
        Line::from(Span::styled(copy::GUIDE[0], muted.italic())),
        Line::from(Span::styled(copy::GUIDE[1], muted.italic())),
    ]
}
