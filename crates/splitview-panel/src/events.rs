//! Panel event types drained by the host event loop.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a panel WebView instance.
#[derive(Debug, Clone)]
pub enum PanelEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        panel_id: u32,
        state: PageLoadState,
        url: String,
    },
    /// Document title changed.
    TitleChanged { panel_id: u32, title: String },
    /// An IPC message arrived from the panel document. The raw body is
    /// decoded by the host via `PanelMessage::from_json`.
    IpcMessage { panel_id: u32, body: String },
    /// A navigation was requested and allowed by policy.
    NavigationRequested { panel_id: u32, url: String },
    /// Panel was closed / destroyed.
    Closed { panel_id: u32 },
}
