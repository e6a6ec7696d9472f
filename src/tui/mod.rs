//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and carries out the
//! `Effect`s that `update()` returns.
//!
//! This is the only module that knows about ratatui, crossterm and tokio tasks.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the title bar spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize or when a
//!   background fetch reports back.
//!
//! ## Background Fetches
//!
//! Fetches run as tokio tasks and report through an mpsc channel as
//! `Action::ChaptersLoaded` / `Action::DetailLoaded`. Opening another chapter
//! aborts the detail task still in flight; anything that slips through is
//! dropped by the generation check in `update()`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::content::{ChapterId, QuranComSource};
use crate::core::action::{Action, Effect, update};
use crate::core::chapter_detail::{LoadTicket, load_detail};
use crate::core::chapter_list::load_all;
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Route, Settings};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChapterDetailState, ChapterListState, DetailEvent, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub search_box: SearchBox,
    pub list: ChapterListState,
    pub detail: ChapterDetailState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            list: ChapterListState::new(),
            detail: ChapterDetailState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Cursor marks the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Runs the reader until the user quits. Opens `initial_chapter` directly when given.
pub fn run(config: ResolvedConfig, initial_chapter: Option<ChapterId>) -> std::io::Result<()> {
    let source = QuranComSource::new(
        Some(config.base_url.clone()),
        Duration::from_secs(config.timeout_secs),
    )
    .map_err(std::io::Error::other)?;
    info!("Using content source {}", config.base_url);

    let mut app = App::new(Arc::new(source), Settings::from_config(&config));
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut detail_task: Option<AbortHandle> = None;

    let initial = match initial_chapter {
        Some(id) => Action::OpenChapter(id),
        None => Action::ShowList,
    };
    let effect = update(&mut app, initial);
    dispatch(effect, &app, &mut tui, &tx, &mut detail_task);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = ui::is_loading(&app);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            let action = match event {
                // ForceQuit (Ctrl+C) always quits regardless of view
                TuiEvent::ForceQuit => Some(Action::Quit),
                _ => match app.route {
                    Route::List => list_action(&app, &mut tui, &event),
                    Route::Detail(_) => detail_action(&mut tui, &event),
                },
            };

            if let Some(action) = action {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    break 'main;
                }
                dispatch(effect, &app, &mut tui, &tx, &mut detail_task);
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            dispatch(effect, &app, &mut tui, &tx, &mut detail_task);
        }
    }

    if let Some(handle) = detail_task.take() {
        handle.abort();
    }

    ratatui::restore();
    Ok(())
}

/// Translates an event on the list view into an action.
fn list_action(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    if ChapterListState::handles(event) {
        let visible = app.visible_chapters();
        return tui.list.handle_event(event, &visible).map(Action::OpenChapter);
    }

    match tui.search_box.handle_event(event)? {
        SearchEvent::Changed(term) => {
            tui.list.reset();
            Some(Action::SearchChanged(term))
        }
        SearchEvent::Dismiss => Some(Action::Quit),
    }
}

/// Translates an event on the detail view into an action.
fn detail_action(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.detail.handle_event(event)? {
        DetailEvent::Back => {
            tui.search_box.clear();
            tui.list.reset();
            Some(Action::ShowList)
        }
        DetailEvent::NextChapter => Some(Action::NextChapter),
        DetailEvent::PreviousChapter => Some(Action::PreviousChapter),
    }
}

/// Carries out an effect returned by `update()`.
fn dispatch(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    detail_task: &mut Option<AbortHandle>,
) {
    match effect {
        Effect::FetchChapters { generation } => spawn_chapter_list(app, generation, tx.clone()),
        Effect::FetchDetail(ticket) => {
            if let Some(previous) = detail_task.take() {
                debug!("Aborting detail fetch superseded by chapter {}", ticket.chapter_id);
                previous.abort();
            }
            tui.detail.reset();
            *detail_task = Some(spawn_chapter_detail(app, ticket, tx.clone()));
        }
        Effect::None | Effect::Quit => {}
    }
}

fn spawn_chapter_list(app: &App, generation: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning chapter list fetch (generation={generation})");
    let source = app.source.clone();
    let language = app.settings.language.clone();

    tokio::spawn(async move {
        let outcome = load_all(source.as_ref(), &language).await;
        if tx
            .send(Action::ChaptersLoaded {
                generation,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to send chapter list: receiver dropped");
        }
    });
}

fn spawn_chapter_detail(app: &App, ticket: LoadTicket, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!(
        "Spawning detail fetch for chapter {} (generation={})",
        ticket.chapter_id, ticket.generation
    );
    let source = app.source.clone();
    let request = app.settings.detail_request();

    let handle = tokio::spawn(async move {
        let outcome = load_detail(source.as_ref(), ticket.chapter_id, &request).await;
        if tx.send(Action::DetailLoaded { ticket, outcome }).is_err() {
            warn!(
                "Failed to send detail for chapter {}: receiver dropped",
                ticket.chapter_id
            );
        }
    });
    handle.abort_handle()
}
