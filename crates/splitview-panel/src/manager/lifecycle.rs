use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::protocol::IPC_INIT_SCRIPT;

use super::handle::PanelHandle;
use super::types::PanelConfig;
use super::PanelManager;

impl PanelManager {
    /// Create a new panel WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window,
    /// scripts enabled, state retained while hidden.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        panel_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelConfig,
    ) -> Result<PanelHandle, wry::Error> {
        let events = Arc::clone(&self.events);
        let pid = panel_id;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false);

        // IPC bridge must exist before the panel script runs
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Panel -> host messages
        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), pid);

        // Load lifecycle, title, navigation policy
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), pid);
        builder = Self::attach_title_handler(builder, Arc::clone(&events), pid);
        builder = Self::attach_navigation_handler(builder, Arc::clone(&events), pid);

        builder = builder.with_html(&config.html);

        let webview = builder.build_as_child(window)?;

        debug!(panel_id, "panel WebView created");

        Ok(PanelHandle { webview })
    }
}
