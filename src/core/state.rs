//! # Application State
//!
//! Core state for the reader. Domain data only; presentation state
//! (selection, scroll offsets, the search box) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ContentSource>     // where content comes from
//! ├── settings: Settings                 // language, translation, page size
//! ├── route: Route                       // List or Detail(id)
//! ├── chapters: LoadSlot<Vec<Chapter>>   // list view state + generation
//! ├── detail: LoadSlot<ChapterDetail>    // detail view state + generation
//! ├── search: String                     // current filter term
//! └── status_message: String             // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::content::{Chapter, ChapterId, ContentSource, VerseQuery};
use crate::core::chapter_detail::{ChapterDetail, DetailRequest};
use crate::core::chapter_list;
use crate::core::config::{
    DEFAULT_LANGUAGE, DEFAULT_TRANSLATION_ID, DEFAULT_VERSES_PER_PAGE, ResolvedConfig,
};
use crate::core::view_state::LoadSlot;

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(ChapterId),
}

/// Request parameters that stay fixed for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub language: String,
    pub translation_id: u32,
    pub verses_per_page: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            translation_id: DEFAULT_TRANSLATION_ID,
            verses_per_page: DEFAULT_VERSES_PER_PAGE,
        }
    }
}

impl Settings {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            language: config.language.clone(),
            translation_id: config.translation_id,
            verses_per_page: config.verses_per_page,
        }
    }

    pub fn detail_request(&self) -> DetailRequest {
        DetailRequest {
            language: self.language.clone(),
            verses: VerseQuery {
                translation_id: self.translation_id,
                per_page: self.verses_per_page,
            },
        }
    }
}

pub struct App {
    pub source: Arc<dyn ContentSource>,
    pub settings: Settings,
    pub route: Route,
    pub chapters: LoadSlot<Vec<Chapter>>,
    pub detail: LoadSlot<ChapterDetail>,
    pub search: String,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn ContentSource>, settings: Settings) -> Self {
        Self {
            source,
            settings,
            route: Route::List,
            chapters: LoadSlot::new(),
            detail: LoadSlot::new(),
            search: String::new(),
            status_message: String::new(),
        }
    }

    /// Chapters matching the current search term, or none while the list is not ready.
    pub fn visible_chapters(&self) -> Vec<&Chapter> {
        self.chapters
            .state()
            .ready()
            .map(|chapters| chapter_list::filter(chapters, &self.search))
            .unwrap_or_default()
    }
}
