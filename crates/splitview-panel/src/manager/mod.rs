//! Panel WebView lifecycle management.
//!
//! `PanelManager` creates `wry::WebView` instances hosting the preview
//! document and collects their events for the main event loop to drain.

use std::sync::{Arc, Mutex};

use crate::events::PanelEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::PanelHandle;
pub use registry::PanelRegistry;
pub use types::PanelConfig;

/// Manages panel WebView instances.
pub struct PanelManager {
    /// Event sink; events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<PanelEvent>>>,
}

impl PanelManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for PanelManager {
    fn default() -> Self {
        Self::new()
    }
}
