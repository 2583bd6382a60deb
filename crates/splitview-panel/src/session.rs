//! Per-panel load-state machine.
//!
//! Mirrors the panel document's lifecycle on the host side so the host
//! can reason about what the user is looking at. States:
//!
//! ```text
//! Idle --submit--> Loading --finished--> Loaded
//!                  Loading --failed----> ErrorShown
//! ErrorShown --retry--> Loading     ErrorShown --dismiss--> Idle
//! Loaded --submit/refresh--> Loading
//! ```
//!
//! Every navigation carries a generation number; a success callback whose
//! generation no longer matches the session's is stale and must be
//! ignored. Failure reports arrive tagged with the URL they were loading
//! instead, so a report for an abandoned navigation target is discarded
//! rather than overwriting the state of a newer one.

use crate::navigate::{self, NavigateError};

/// Where the panel is in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading,
    Loaded,
    ErrorShown,
}

/// A navigation the caller should carry out on the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub generation: u64,
}

/// Host-side record of one panel's browsing session.
#[derive(Debug)]
pub struct PanelSession {
    state: SessionState,
    current_url: String,
    generation: u64,
    last_error: Option<String>,
}

impl PanelSession {
    /// Session whose initial document starts loading immediately
    /// (the frame is born pointing at `initial_url`).
    pub fn starting(initial_url: impl Into<String>) -> Self {
        Self {
            state: SessionState::Loading,
            current_url: initial_url.into(),
            generation: 1,
            last_error: None,
        }
    }

    /// Session that waits for the first submission.
    pub fn idle(initial_url: impl Into<String>) -> Self {
        Self {
            state: SessionState::Idle,
            current_url: initial_url.into(),
            generation: 0,
            last_error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The last successfully normalized URL. Always absolute with an
    /// `http`/`https` scheme once any `submit` has succeeded.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// User submitted a URL. On success the session enters `Loading` and
    /// the returned navigation must be applied to the frame; on failure
    /// the session shows the error and the frame is left untouched.
    pub fn submit(&mut self, input: &str) -> Result<Navigation, NavigateError> {
        match navigate::normalize(input) {
            Ok(url) => {
                self.current_url = url.clone();
                self.last_error = None;
                Ok(self.begin_navigation())
            }
            Err(e) => {
                self.state = SessionState::ErrorShown;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// User clicked Refresh: re-run the current URL through the load path.
    pub fn refresh(&mut self) -> Navigation {
        self.begin_navigation()
    }

    /// User clicked Retry in the error modal: replay the last normalized
    /// URL, not the raw input. `None` when there is no error showing.
    pub fn retry(&mut self) -> Option<Navigation> {
        if self.state != SessionState::ErrorShown {
            return None;
        }
        self.last_error = None;
        Some(self.begin_navigation())
    }

    /// User closed the error modal without retrying.
    pub fn dismiss_error(&mut self) {
        if self.state == SessionState::ErrorShown {
            self.state = SessionState::Idle;
            self.last_error = None;
        }
    }

    /// Frame finished loading. Returns `false` if the callback was stale
    /// and has been ignored.
    pub fn load_finished(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.state = SessionState::Loaded;
        true
    }

    /// Frame reported a load failure for `url`. Failure reports carry the
    /// URL they were loading; a report for anything other than the current
    /// navigation target is stale. Returns `false` when discarded.
    pub fn page_errored(&mut self, url: &str, message: impl Into<String>) -> bool {
        if url != self.current_url {
            return false;
        }
        self.state = SessionState::ErrorShown;
        self.last_error = Some(message.into());
        true
    }

    fn begin_navigation(&mut self) -> Navigation {
        self.generation += 1;
        self.state = SessionState::Loading;
        Navigation {
            url: self.current_url.clone(),
            generation: self.generation,
        }
    }
}
