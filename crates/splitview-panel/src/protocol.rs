//! Message protocol between the panel document and the host.
//!
//! Messages flow in both directions:
//! - **Panel -> host**: the inline script calls
//!   `window.splitview.ipc.post({command: ..., ...})`, which triggers the
//!   `ipc_handler` registered on the WebView.
//! - **Host -> panel**: Rust calls `evaluate_script` with a dispatch
//!   snippet that routes the message to the in-page handler.
//!
//! The protocol is a closed union keyed on `command`. Anything that does
//! not decode into a known variant is dropped by the caller, never an
//! error: the panel may be newer or older than the host.

use serde::{Deserialize, Serialize};

/// A message posted by the panel document to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum PanelMessage {
    /// Surface an error through the host UI.
    Alert { text: String },
    /// The panel navigated; update the panel title.
    UpdateTitle { url: String },
    /// A navigation was confirmed; persist the URL.
    UrlChanged { url: String },
    /// A page failed to load. Forwarded for passive logging only.
    Error { message: String, url: String },
    /// Content area dimensions changed. Informational only.
    Resize { width: u32, height: u32 },
}

impl PanelMessage {
    /// Parse a panel message from the raw IPC body.
    ///
    /// Returns `None` for invalid JSON and for unknown commands alike.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A message sent by the host to the panel document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum HostMessage {
    /// Display `message` via the panel's error modal.
    ShowError { message: String },
}

impl HostMessage {
    /// JS snippet that delivers this message to the in-page handler.
    pub fn to_dispatch_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_else(|_| "null".to_string());
        format!("window.splitview.ipc._dispatch({json});")
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every panel WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    // SplitView IPC bridge
    window.splitview = window.splitview || {};
    window.splitview.ipc = {
        post: function(msg) {
            window.ipc.postMessage(JSON.stringify(msg));
        },
        // Callbacks registered by the page to handle host messages
        _handlers: {},
        on: function(command, callback) {
            this._handlers[command] = callback;
        },
        _dispatch: function(msg) {
            var handler = msg && this._handlers[msg.command];
            if (handler) {
                handler(msg);
            }
        }
    };
})();
"#;
