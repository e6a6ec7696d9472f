//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing the location and load status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Filter input above the chapter list
//! - `ChapterList`: Selectable chapter rows
//! - `ChapterDetailView`: Scrollable verses of one chapter
//!
//! The stateful ones split into a persistent `*State` owned by `TuiState` and a
//! transient wrapper built each frame from borrowed state and core data.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (constructor arguments), not by
//! reaching into the core `App`. This makes dependencies explicit and
//! components testable with `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top status bar)
//! ├── search_box.rs      (Filter input)
//! ├── chapter_list.rs    (Chapter rows)
//! └── chapter_detail.rs  (Verses of one chapter)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod chapter_detail;
pub mod chapter_list;
pub mod search_box;
pub use chapter_detail::{ChapterDetailState, ChapterDetailView, DetailEvent};
pub use chapter_list::{ChapterList, ChapterListState};
pub use search_box::{SearchBox, SearchEvent};
