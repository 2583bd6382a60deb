//! Dispatch of panel messages to host effects.
//!
//! Handling is synchronous and fire-and-forget: no message produces a
//! response value, and the only thing ever sent back is a `showError`
//! when persisting the URL fails. Unknown commands never reach this
//! module — `PanelMessage::from_json` already dropped them.

use splitview_common::PanelError;
use splitview_config::PreferenceStore;
use splitview_panel::{navigate, HostMessage, PanelMessage};
use tracing::{debug, warn};

/// The host-side effects a panel message may trigger.
///
/// The real implementation sets the window title and pushes alerts; tests
/// substitute a recorder.
pub trait HostSurface {
    /// Set the panel/window title.
    fn set_panel_title(&mut self, title: &str);

    /// Surface an error notification through the host UI.
    fn notify_error(&mut self, text: &str);
}

/// Apply one panel message to the host.
///
/// Returns a message to deliver back to the panel, if any.
pub fn dispatch_panel_message(
    msg: PanelMessage,
    title_prefix: &str,
    persist: bool,
    host: &mut dyn HostSurface,
    store: &mut dyn PreferenceStore,
) -> Option<HostMessage> {
    match msg {
        PanelMessage::Alert { text } => {
            host.notify_error(&text);
            None
        }
        PanelMessage::UpdateTitle { url } => {
            host.set_panel_title(&format!("{title_prefix}{url}"));
            None
        }
        PanelMessage::UrlChanged { url } => {
            if !persist {
                debug!(url = %url, "urlChanged ignored: persistence disabled");
                return None;
            }
            match store.set_last_visited_url(&url) {
                Ok(()) => None,
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to persist last visited URL");
                    Some(HostMessage::ShowError {
                        message: format!("Could not save the last visited URL: {e}"),
                    })
                }
            }
        }
        PanelMessage::Error { message, url } => {
            // Passive telemetry only; the panel already shows the error
            warn!(url = %url, message = %message, "page load failed");
            None
        }
        PanelMessage::Resize { width, height } => {
            debug!(width, height, "panel content resized");
            None
        }
    }
}

/// Resolve the URL the panel should open with, normalized.
///
/// An explicit override the user just typed must be valid; a persisted
/// URL that no longer validates is quietly replaced by the default.
pub fn resolve_initial_url(
    override_url: Option<&str>,
    store: &dyn PreferenceStore,
    persist: bool,
    default_url: &str,
) -> Result<String, PanelError> {
    if let Some(raw) = override_url {
        return navigate::normalize(raw).map_err(|_| PanelError::InvalidUrl(raw.to_string()));
    }
    if persist {
        if let Some(stored) = store.last_visited_url() {
            match navigate::normalize(&stored) {
                Ok(url) => return Ok(url),
                Err(e) => {
                    warn!(url = %stored, error = %e, "persisted URL invalid, using default");
                }
            }
        }
    }
    Ok(default_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitview_common::ConfigError;
    use splitview_config::MemoryPreferenceStore;

    #[derive(Default)]
    struct RecordingHost {
        titles: Vec<String>,
        errors: Vec<String>,
    }

    impl HostSurface for RecordingHost {
        fn set_panel_title(&mut self, title: &str) {
            self.titles.push(title.to_string());
        }

        fn notify_error(&mut self, text: &str) {
            self.errors.push(text.to_string());
        }
    }

    /// A store whose writes always fail.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn last_visited_url(&self) -> Option<String> {
            None
        }

        fn set_last_visited_url(&mut self, _url: &str) -> Result<(), ConfigError> {
            Err(ConfigError::StateWriteError("disk full".into()))
        }
    }

    fn dispatch(
        msg: PanelMessage,
        persist: bool,
        host: &mut RecordingHost,
        store: &mut dyn PreferenceStore,
    ) -> Option<HostMessage> {
        dispatch_panel_message(msg, "SplitView: ", persist, host, store)
    }

    #[test]
    fn alert_surfaces_host_error() {
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        let reply = dispatch(
            PanelMessage::Alert { text: "boom".into() },
            true,
            &mut host,
            &mut store,
        );
        assert!(reply.is_none());
        assert_eq!(host.errors, vec!["boom"]);
    }

    #[test]
    fn update_title_applies_prefix() {
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        dispatch(
            PanelMessage::UpdateTitle {
                url: "https://example.com".into(),
            },
            true,
            &mut host,
            &mut store,
        );
        assert_eq!(host.titles, vec!["SplitView: https://example.com"]);
    }

    #[test]
    fn url_changed_persists() {
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        dispatch(
            PanelMessage::UrlChanged {
                url: "https://docs.rs".into(),
            },
            true,
            &mut host,
            &mut store,
        );
        assert_eq!(store.last_visited_url().as_deref(), Some("https://docs.rs"));
    }

    #[test]
    fn url_changed_ignored_without_persistence() {
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        dispatch(
            PanelMessage::UrlChanged {
                url: "https://docs.rs".into(),
            },
            false,
            &mut host,
            &mut store,
        );
        assert_eq!(store.last_visited_url(), None);
    }

    #[test]
    fn url_changed_write_failure_replies_show_error() {
        let mut host = RecordingHost::default();
        let mut store = BrokenStore;
        let reply = dispatch(
            PanelMessage::UrlChanged {
                url: "https://docs.rs".into(),
            },
            true,
            &mut host,
            &mut store,
        );
        match reply {
            Some(HostMessage::ShowError { message }) => {
                assert!(message.contains("disk full"));
            }
            other => panic!("expected ShowError reply, got {other:?}"),
        }
    }

    #[test]
    fn error_and_resize_have_no_host_effect() {
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        assert!(dispatch(
            PanelMessage::Error {
                message: "refused".into(),
                url: "https://example.com".into(),
            },
            true,
            &mut host,
            &mut store,
        )
        .is_none());
        assert!(dispatch(
            PanelMessage::Resize {
                width: 640,
                height: 480,
            },
            true,
            &mut host,
            &mut store,
        )
        .is_none());
        assert!(host.titles.is_empty());
        assert!(host.errors.is_empty());
        assert_eq!(store.last_visited_url(), None);
    }

    // -- initial URL resolution --

    #[test]
    fn initial_url_prefers_override() {
        let store = MemoryPreferenceStore::with_url("https://persisted.example");
        let url = resolve_initial_url(
            Some("https://cli.example"),
            &store,
            true,
            "https://example.com",
        )
        .unwrap();
        assert_eq!(url, "https://cli.example");
    }

    #[test]
    fn initial_url_normalizes_override() {
        let store = MemoryPreferenceStore::new();
        let url =
            resolve_initial_url(Some("docs.rs"), &store, true, "https://example.com").unwrap();
        assert_eq!(url, "https://docs.rs");
    }

    #[test]
    fn invalid_override_is_an_error() {
        let store = MemoryPreferenceStore::new();
        let err = resolve_initial_url(Some("not a url"), &store, true, "https://example.com")
            .unwrap_err();
        assert!(matches!(err, PanelError::InvalidUrl(ref raw) if raw == "not a url"));
    }

    #[test]
    fn initial_url_reads_persisted() {
        let store = MemoryPreferenceStore::with_url("https://persisted.example");
        let url = resolve_initial_url(None, &store, true, "https://example.com").unwrap();
        assert_eq!(url, "https://persisted.example");
    }

    #[test]
    fn invalid_persisted_url_falls_back_to_default() {
        let store = MemoryPreferenceStore::with_url("ftp://stale.example");
        let url = resolve_initial_url(None, &store, true, "https://example.com").unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn initial_url_falls_back_to_default() {
        let store = MemoryPreferenceStore::new();
        let url = resolve_initial_url(None, &store, true, "https://example.com").unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn initial_url_skips_store_without_persistence() {
        let store = MemoryPreferenceStore::with_url("https://persisted.example");
        let url = resolve_initial_url(None, &store, false, "https://example.com").unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn persisted_url_round_trip() {
        // After a confirmed navigation to U, the next invocation starts at U
        let mut host = RecordingHost::default();
        let mut store = MemoryPreferenceStore::new();
        dispatch(
            PanelMessage::UrlChanged {
                url: "https://docs.rs/wry".into(),
            },
            true,
            &mut host,
            &mut store,
        );
        let url = resolve_initial_url(None, &store, true, "https://example.com").unwrap();
        assert_eq!(url, "https://docs.rs/wry");
    }
}
