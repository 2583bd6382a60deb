use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, PanelEvent};

use super::PanelManager;

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Check whether a URL may be navigated to by the embedded frame.
///
/// The panel is a browser, so the policy is scheme-based rather than an
/// origin allowlist: web content and the empty page are allowed; local
/// files, inline documents, and script URLs are not.
pub fn is_navigation_allowed(url: &str) -> bool {
    url == "about:blank" || url.starts_with("https://") || url.starts_with("http://")
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl PanelManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    panel_id = pid,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(panel_id = pid, body_len = body.len(), "IPC message from panel");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::IpcMessage {
                    panel_id: pid,
                    body,
                });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(panel_id = pid, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::PageLoad {
                    panel_id: pid,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(panel_id = pid, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::TitleChanged {
                    panel_id: pid,
                    title,
                });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<PanelEvent>>>,
        pid: u32,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(
                    panel_id = pid,
                    url = %url,
                    "navigation blocked: scheme not allowed"
                );
                return false;
            }

            debug!(panel_id = pid, url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(PanelEvent::NavigationRequested {
                    panel_id: pid,
                    url,
                });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Allowed URLs --

    #[test]
    fn allows_https() {
        assert!(is_navigation_allowed("https://example.com"));
        assert!(is_navigation_allowed("https://docs.rs/wry/latest/wry/"));
    }

    #[test]
    fn allows_http() {
        assert!(is_navigation_allowed("http://localhost:8080"));
        assert!(is_navigation_allowed("http://example.com/path?q=1"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    // -- Blocked URLs --

    #[test]
    fn blocks_file_protocol() {
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("file://localhost/etc/hosts"));
    }

    #[test]
    fn blocks_javascript_protocol() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("javascript:void(0)"));
    }

    #[test]
    fn blocks_data_protocol() {
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
        assert!(!is_navigation_allowed(
            "data:text/html;base64,PHNjcmlwdD5hbGVydCgxKTwvc2NyaXB0Pg=="
        ));
    }

    #[test]
    fn blocks_custom_and_garbage_schemes() {
        assert!(!is_navigation_allowed("ftp://files.example.com"));
        assert!(!is_navigation_allowed("vscode://extension"));
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
    }

    #[test]
    fn blocks_scheme_lookalikes() {
        // Must be a real prefix, not a substring
        assert!(!is_navigation_allowed("about:blank2"));
        assert!(!is_navigation_allowed("xhttps://example.com"));
    }
}
