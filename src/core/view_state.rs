//! # View State
//!
//! ```text
//!            begin()                 complete(current generation)
//!   (any) ───────────▶ Loading ───────────────────────┬──▶ Ready(T)
//!                                                     └──▶ Error(msg)
//! ```
//!
//! A `ViewState` only ever settles out of `Loading`. A `LoadSlot` wraps one
//! and stamps every load with a generation; completions carrying an older
//! generation are dropped, so a slow response for a previous input can never
//! overwrite the state of a newer one.

use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Replaces a `Loading` state with a settled outcome.
    ///
    /// Returns false (and leaves `self` untouched) if `self` has already
    /// settled or `outcome` is itself `Loading`.
    pub fn settle(&mut self, outcome: ViewState<T>) -> bool {
        if !self.is_loading() || outcome.is_loading() {
            return false;
        }
        *self = outcome;
        true
    }
}

/// A view state plus the generation of the load that owns it.
#[derive(Debug)]
pub struct LoadSlot<T> {
    generation: u64,
    state: ViewState<T>,
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadSlot<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Starts a new load: resets to `Loading` and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.generation
    }

    /// Applies the outcome of load `generation` if it is still the current one.
    pub fn complete(&mut self, generation: u64, outcome: ViewState<T>) -> bool {
        if generation != self.generation {
            debug!(
                "Discarding stale load result (generation {generation}, current {})",
                self.generation
            );
            return false;
        }
        self.state.settle(outcome)
    }
}
