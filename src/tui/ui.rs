use crate::core::state::{App, Route};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChapterDetailView, ChapterList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const LIST_HELP: &str = "type to search · ↑↓ select · Enter open · Esc clear/quit · Ctrl+C quit";
const DETAIL_HELP: &str = "↑↓ PgUp PgDn scroll · ←→ previous/next chapter · Esc back · Ctrl+C quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let spinner = is_loading(app).then(|| SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]);
    let mut title_bar = TitleBar::new(route_title(app), app.status_message.clone(), spinner);
    title_bar.render(frame, title_area);

    let help = match app.route {
        Route::List => {
            let [search_area, list_area] =
                Layout::vertical([Length(3), Min(0)]).areas(main_area);
            tui.search_box.render(frame, search_area);

            let visible = app.visible_chapters();
            ChapterList::new(&mut tui.list, app.chapters.state(), &visible, &app.search)
                .render(frame, list_area);
            LIST_HELP
        }
        Route::Detail(_) => {
            ChapterDetailView::new(&mut tui.detail, app.detail.state()).render(frame, main_area);
            DETAIL_HELP
        }
    };

    frame.render_widget(
        Line::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

/// True while the view on screen waits for its data.
pub fn is_loading(app: &App) -> bool {
    match app.route {
        Route::List => app.chapters.state().is_loading(),
        Route::Detail(_) => app.detail.state().is_loading(),
    }
}

fn route_title(app: &App) -> String {
    match app.route {
        Route::List => "Chapters".to_string(),
        Route::Detail(id) => match app.detail.state().ready() {
            Some(detail) => format!("Surah {}: {}", id, detail.chapter.name_simple),
            None => format!("Surah {id}"),
        },
    }
}
