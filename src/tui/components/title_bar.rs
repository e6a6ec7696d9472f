//! # TitleBar Component
//!
//! Top status bar showing where the reader is and what is loading.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Surah 1: Al-Fatihah".into(), "Ready".into(), None);
//! title_bar.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! - `title`: derived from the current route
//! - `status_message`: Core App state (set by the reducer on each settle)
//! - `spinner`: TUI state (animation frame while a load is in flight)
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Surah | Chapters | ⠋ Loading chapters..."`
//! 2. **Status message**: `"Surah | Chapters | Ready"`
//! 3. **Default**: `"Surah | Chapters"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar {
    /// Current location (e.g., "Chapters", "Surah 2: Al-Baqarah")
    pub title: String,
    /// Status message (e.g., "Loading chapters...", "failed to fetch chapter data")
    pub status_message: String,
    /// Spinner frame, present only while something is loading
    pub spinner: Option<char>,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, spinner: Option<char>) -> Self {
        Self {
            title,
            status_message,
            spinner,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Surah", Style::default().fg(Color::Green)),
            Span::raw(" | "),
            Span::raw(self.title.as_str()),
        ];

        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            if let Some(frame_char) = self.spinner {
                spans.push(Span::styled(
                    format!("{frame_char} "),
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans.push(Span::styled(
                self.status_message.as_str(),
                Style::default().fg(Color::Gray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_while_loading() {
        let mut title_bar = TitleBar::new(
            "Chapters".to_string(),
            "Loading chapters...".to_string(),
            Some('⠋'),
        );
        let text = rendered(&mut title_bar);

        assert!(text.contains("Surah | Chapters"));
        assert!(text.contains("⠋ Loading chapters..."));
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new(
            "Surah 1: Al-Fatihah".to_string(),
            "failed to fetch chapter data".to_string(),
            None,
        );
        let text = rendered(&mut title_bar);

        assert!(text.contains("Surah 1: Al-Fatihah"));
        assert!(text.contains("| failed to fetch chapter data"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Chapters".to_string(), String::new(), None);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Surah | Chapters"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
