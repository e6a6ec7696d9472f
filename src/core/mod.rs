//! # Core Application Logic
//!
//! This module contains the reader's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • list/detail loaders  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Content   │
//!     │  Adapter   │                          │  Source    │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`view_state`]: `ViewState` and the generation-tracked `LoadSlot`
//! - [`chapter_list`]: Loading and filtering the chapter collection
//! - [`chapter_detail`]: Concurrent detail loading and the merged view model
//! - [`normalize`]: Markup stripping for prose fields
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod chapter_detail;
pub mod chapter_list;
pub mod config;
pub mod normalize;
pub mod state;
pub mod view_state;
