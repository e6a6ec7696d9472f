//! # Chapter List Component
//!
//! Selectable list of the chapters that match the search term.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChapterListState` lives in `TuiState`
//! - `ChapterList` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{Chapter, ChapterId};
use crate::core::view_state::ViewState;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: usize = 10;

/// Persistent state for the chapter list.
#[derive(Debug, Default)]
pub struct ChapterListState {
    pub selected: usize,
    pub list_state: ListState,
}

impl ChapterListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first row, e.g. after the search term changed.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.list_state.select(Some(0));
        *self.list_state.offset_mut() = 0;
    }

    /// Moves the selection over `visible`, returning a chapter id when one is opened.
    pub fn handle_event(&mut self, event: &TuiEvent, visible: &[&Chapter]) -> Option<ChapterId> {
        if visible.is_empty() {
            return None;
        }
        let last = visible.len() - 1;
        self.selected = self.selected.min(last);

        match event {
            TuiEvent::CursorUp => self.selected = self.selected.saturating_sub(1),
            TuiEvent::CursorDown => self.selected = (self.selected + 1).min(last),
            TuiEvent::PageUp => self.selected = self.selected.saturating_sub(PAGE_STEP),
            TuiEvent::PageDown => self.selected = (self.selected + PAGE_STEP).min(last),
            TuiEvent::Home => self.selected = 0,
            TuiEvent::End => self.selected = last,
            TuiEvent::Submit => return visible.get(self.selected).map(|chapter| chapter.id),
            _ => return None,
        }
        self.list_state.select(Some(self.selected));
        None
    }

    /// True for the keys this list consumes.
    pub fn handles(event: &TuiEvent) -> bool {
        matches!(
            event,
            TuiEvent::CursorUp
                | TuiEvent::CursorDown
                | TuiEvent::PageUp
                | TuiEvent::PageDown
                | TuiEvent::Home
                | TuiEvent::End
                | TuiEvent::Submit
        )
    }
}

/// Transient render wrapper for the chapter list.
pub struct ChapterList<'a> {
    state: &'a mut ChapterListState,
    chapters: &'a ViewState<Vec<Chapter>>,
    visible: &'a [&'a Chapter],
    search: &'a str,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        state: &'a mut ChapterListState,
        chapters: &'a ViewState<Vec<Chapter>>,
        visible: &'a [&'a Chapter],
        search: &'a str,
    ) -> Self {
        Self {
            state,
            chapters,
            visible,
            search,
        }
    }

    fn render_rows(&mut self, frame: &mut Frame, area: Rect, block: Block<'_>) {
        self.state.selected = self.state.selected.min(self.visible.len() - 1);
        self.state.list_state.select(Some(self.state.selected));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .visible
            .iter()
            .enumerate()
            .map(|(i, chapter)| {
                let selected = i == self.state.selected;
                ListItem::new(chapter_row(chapter, inner_width, selected))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl<'a> Component for ChapterList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Chapters ")
            .padding(Padding::horizontal(1));

        let chapters = self.chapters;
        let notice = match chapters {
            ViewState::Loading => Some(("Loading chapters...", Color::DarkGray)),
            ViewState::Error(message) => Some((message.as_str(), Color::Red)),
            ViewState::Ready(_) if self.visible.is_empty() => None,
            ViewState::Ready(_) => {
                self.render_rows(frame, area, block);
                return;
            }
        };

        let text = match notice {
            Some((message, _)) => message.to_string(),
            None => format!("No chapter matches \"{}\"", self.search),
        };
        let color = notice.map_or(Color::DarkGray, |(_, color)| color);
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// One list row: number, names on the left; verse count and revelation place on the right.
fn chapter_row(chapter: &Chapter, width: usize, selected: bool) -> Line<'static> {
    let number = format!("{:>3}  ", chapter.id.get());
    let meta = format!(
        "  {} ayat · {}",
        chapter.verses_count,
        chapter.revelation_place.label()
    );
    let names = format!(
        "{}  {}",
        chapter.name_simple, chapter.translated_name.name
    );

    let names_width = width
        .saturating_sub(number.width())
        .saturating_sub(meta.width());
    let names = truncate_to_width(&names, names_width);
    let padding = " ".repeat(names_width.saturating_sub(names.width()));

    let base = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let accent = if selected {
        base
    } else {
        Style::default().fg(Color::Green)
    };
    let dim = if selected {
        base
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(number, accent),
        Span::styled(names, base),
        Span::styled(padding, base),
        Span::styled(meta, dim),
    ])
}

/// Truncate to `max_width` display columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
