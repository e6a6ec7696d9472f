//! # Actions
//!
//! Everything that can happen in the reader becomes an `Action`.
//! User opens a chapter? That's `Action::OpenChapter(id)`.
//! Fetch finishes? That's `Action::DetailLoaded { ticket, outcome }`.
//!
//! `update()` applies an action to the state and returns the `Effect` the
//! adapter must carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::content::{Chapter, ChapterId};
use crate::core::chapter_detail::{ChapterDetail, LoadTicket};
use crate::core::state::{App, Route};
use crate::core::view_state::ViewState;

#[derive(Debug)]
pub enum Action {
    /// Enter the list view; the collection is fetched again every time.
    ShowList,
    ChaptersLoaded {
        generation: u64,
        outcome: ViewState<Vec<Chapter>>,
    },
    SearchChanged(String),
    /// Enter the detail view for a chapter.
    OpenChapter(ChapterId),
    NextChapter,
    PreviousChapter,
    DetailLoaded {
        ticket: LoadTicket,
        outcome: ViewState<ChapterDetail>,
    },
    Quit,
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FetchChapters { generation: u64 },
    FetchDetail(LoadTicket),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ShowList => {
            app.route = Route::List;
            app.search.clear();
            app.status_message = String::from("Loading chapters...");
            let generation = app.chapters.begin();
            Effect::FetchChapters { generation }
        }
        Action::ChaptersLoaded {
            generation,
            outcome,
        } => {
            if app.chapters.complete(generation, outcome) {
                app.status_message = match app.chapters.state() {
                    ViewState::Ready(chapters) => format!("{} chapters", chapters.len()),
                    ViewState::Error(message) => message.clone(),
                    ViewState::Loading => String::new(),
                };
            }
            Effect::None
        }
        Action::SearchChanged(term) => {
            app.search = term;
            Effect::None
        }
        Action::OpenChapter(id) => open_chapter(app, id),
        Action::NextChapter => match app.route {
            Route::Detail(id) => id.next().map_or(Effect::None, |next| open_chapter(app, next)),
            Route::List => Effect::None,
        },
        Action::PreviousChapter => match app.route {
            Route::Detail(id) => id
                .previous()
                .map_or(Effect::None, |previous| open_chapter(app, previous)),
            Route::List => Effect::None,
        },
        Action::DetailLoaded { ticket, outcome } => {
            if app.route != Route::Detail(ticket.chapter_id) {
                debug!(
                    "Discarding detail for chapter {}: no longer on screen",
                    ticket.chapter_id
                );
                return Effect::None;
            }
            if app.detail.complete(ticket.generation, outcome) {
                app.status_message = match app.detail.state() {
                    ViewState::Ready(detail) => format!(
                        "{}. {}",
                        detail.chapter.id, detail.chapter.name_simple
                    ),
                    ViewState::Error(message) => message.clone(),
                    ViewState::Loading => String::new(),
                };
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn open_chapter(app: &mut App, chapter_id: ChapterId) -> Effect {
    info!("Opening chapter {chapter_id}");
    app.route = Route::Detail(chapter_id);
    app.status_message = format!("Loading chapter {chapter_id}...");
    let generation = app.detail.begin();
    Effect::FetchDetail(LoadTicket {
        chapter_id,
        generation,
    })
}
