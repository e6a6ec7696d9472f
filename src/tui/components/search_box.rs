//! # SearchBox Component
//!
//! Single-line filter input above the chapter list. Every edit emits
//! `SearchEvent::Changed` with the whole term; the list refilters on each one.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search chapter...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The term changed; carries the full new term.
    Changed(String),
    /// Esc on an empty box.
    Dismiss,
}

#[derive(Debug, Default)]
pub struct SearchBox {
    /// Current term (Internal State)
    pub buffer: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                self.buffer.push(*c);
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines and tabs become spaces
                let cleaned: String = text
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect();
                if cleaned.is_empty() {
                    return None;
                }
                self.buffer.push_str(&cleaned);
                self.changed()
            }
            TuiEvent::Backspace => self.buffer.pop().and_then(|_| self.changed()),
            TuiEvent::Escape if self.buffer.is_empty() => Some(SearchEvent::Dismiss),
            TuiEvent::Escape => {
                self.buffer.clear();
                self.changed()
            }
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(paragraph.block(block), area);

        frame.set_cursor_position(cursor_position(area, self.buffer.width()));
    }
}

/// Cursor sits after `text_width` columns, clamped inside the border.
fn cursor_position(area: Rect, text_width: usize) -> Position {
    let max_x = area.x.saturating_add(area.width.saturating_sub(2));
    let offset = u16::try_from(text_width).unwrap_or(u16::MAX);
    let cursor_x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
    Position::new(cursor_x, area.y.saturating_add(1))
}
