//! # Chapter Detail Component
//!
//! Scrollable reading view: chapter header, chapter info, the opening
//! formula, then every verse with its translation.
//!
//! Content is pre-wrapped with `textwrap` so the scroll view knows its exact
//! height; lines are rebuilt each frame from the (already normalized) view
//! model.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::chapter_detail::{ChapterDetail, VerseView};
use crate::core::view_state::ViewState;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const BISMILLAH: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";
const BISMILLAH_TRANSLATION: &str = "Dengan nama Allah Yang Maha Pengasih, Maha Penyayang";

/// Events emitted by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
    NextChapter,
    PreviousChapter,
}

/// Persistent state for the detail view.
#[derive(Default)]
pub struct ChapterDetailState {
    pub scroll: ScrollViewState,
}

impl ChapterDetailState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll back to the top, e.g. when another chapter is opened.
    pub fn reset(&mut self) {
        self.scroll = ScrollViewState::default();
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => return Some(DetailEvent::Back),
            TuiEvent::CursorRight => return Some(DetailEvent::NextChapter),
            TuiEvent::CursorLeft => return Some(DetailEvent::PreviousChapter),
            TuiEvent::CursorUp => self.scroll.scroll_up(),
            TuiEvent::CursorDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            TuiEvent::Home => self.scroll.scroll_to_top(),
            TuiEvent::End => self.scroll.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail view.
pub struct ChapterDetailView<'a> {
    state: &'a mut ChapterDetailState,
    detail: &'a ViewState<ChapterDetail>,
}

impl<'a> ChapterDetailView<'a> {
    pub fn new(state: &'a mut ChapterDetailState, detail: &'a ViewState<ChapterDetail>) -> Self {
        Self { state, detail }
    }
}

impl<'a> Component for ChapterDetailView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let detail = match self.detail {
            ViewState::Ready(detail) => detail,
            ViewState::Loading => {
                render_notice(frame, area, "Loading chapter...", Color::DarkGray);
                return;
            }
            ViewState::Error(message) => {
                render_notice(frame, area, message, Color::Red);
                return;
            }
        };

        // One column for the scrollbar, one on each side for breathing room
        let content_width = area.width.saturating_sub(3);
        let lines = detail_lines(detail, content_width as usize);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        let mut scroll_view = ScrollView::new(Size::new(content_width + 1, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(1, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

/// Lays out a whole chapter as wrapped lines of at most `width` columns.
pub fn detail_lines(detail: &ChapterDetail, width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let chapter = &detail.chapter;
    let mut lines = Vec::new();

    let title = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    push_wrapped(&mut lines, &chapter.name_arabic, width, title, Alignment::Center);
    push_wrapped(
        &mut lines,
        &format!("Surah {}: {}", chapter.id, chapter.name_simple),
        width,
        Style::default().fg(Color::Gray),
        Alignment::Center,
    );
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::styled("Revealed: ", label),
        Span::raw(chapter.revelation_place.label()),
        Span::raw("    "),
        Span::styled("Verses: ", label),
        Span::raw(chapter.verses_count.to_string()),
    ]));
    if let Some(info) = &detail.info {
        lines.push(Line::from(vec![
            Span::styled("Other name: ", label),
            Span::raw(info.other_name.clone().unwrap_or_else(|| "-".to_string())),
        ]));
    }
    lines.push(Line::default());

    push_wrapped(&mut lines, BISMILLAH, width, title, Alignment::Center);
    push_wrapped(&mut lines, BISMILLAH_TRANSLATION, width, label, Alignment::Center);
    lines.push(Line::default());

    if let Some(info) = detail.info.as_ref().filter(|i| !i.description.is_empty()) {
        lines.push(Line::styled("About this chapter", title));
        for paragraph in info.description.lines() {
            if paragraph.trim().is_empty() {
                lines.push(Line::default());
            } else {
                push_wrapped(&mut lines, paragraph, width, Style::default(), Alignment::Left);
            }
        }
        lines.push(Line::default());
    }

    for verse in &detail.verses {
        push_verse(&mut lines, verse, width, dim);
    }

    lines
}

fn push_verse(lines: &mut Vec<Line<'static>>, verse: &VerseView, width: usize, dim: Style) {
    push_wrapped(
        lines,
        &verse.text_uthmani,
        width,
        Style::default().fg(Color::White),
        Alignment::Right,
    );

    let prefix = format!("{}. ", verse.number);
    let indent = " ".repeat(prefix.len());
    let options = textwrap::Options::new(width).subsequent_indent(&indent);
    let text = format!("{prefix}{}", verse.translation);
    for line in textwrap::wrap(&text, options) {
        lines.push(Line::raw(line.into_owned()));
    }

    if verse.has_separator {
        lines.push(Line::styled("─".repeat(width), dim));
    }
    lines.push(Line::default());
}

fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    style: Style,
    alignment: Alignment,
) {
    for line in textwrap::wrap(text, width) {
        lines.push(Line::styled(line.into_owned(), style).alignment(alignment));
    }
}
