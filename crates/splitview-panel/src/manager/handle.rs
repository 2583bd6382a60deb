use wry::WebView;

use crate::protocol::HostMessage;

/// Handle to a managed panel WebView.
pub struct PanelHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
}

impl PanelHandle {
    /// Deliver a typed host message to the panel document.
    pub fn send(&self, message: &HostMessage) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&message.to_dispatch_script())
    }

    /// Set the panel bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
