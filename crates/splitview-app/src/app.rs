//! `ApplicationHandler` implementation driving the preview window.
//!
//! The window hosts a single panel WebView. Panel events are drained
//! every loop turn; IPC messages are decoded into the closed protocol and
//! dispatched to host effects.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use splitview_common::PanelError;
use splitview_config::{PreferenceStore, SplitViewConfig};
use splitview_panel::{
    render_panel_html, PageLoadState, PanelConfig, PanelEvent, PanelManager, PanelMessage,
    PanelProfile, PanelRegistry, PanelSession,
};

use crate::host::{self, HostSurface};

/// The one panel this app ever creates.
const PREVIEW_PANEL_ID: u32 = 1;

/// Host window and panel state for one `openPreview` invocation.
pub struct PreviewApp {
    config: SplitViewConfig,
    store: Box<dyn PreferenceStore>,
    /// Whether `urlChanged` messages are written to the store.
    persist: bool,
    profile: PanelProfile,
    /// URL override from the command line, if any.
    override_url: Option<String>,

    window: Option<Arc<Window>>,
    panels: Option<PanelRegistry>,
    session: Option<PanelSession>,
}

/// Adapter giving the dispatcher access to the window.
struct WindowHost<'a> {
    window: &'a Window,
}

impl HostSurface for WindowHost<'_> {
    fn set_panel_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// The standalone host has no notification chrome; alerts surface
    /// through the structured log.
    fn notify_error(&mut self, text: &str) {
        tracing::error!(alert = %text, "panel error");
    }
}

impl PreviewApp {
    pub fn new(
        config: SplitViewConfig,
        store: Box<dyn PreferenceStore>,
        minimal: bool,
        override_url: Option<String>,
    ) -> Self {
        let profile = if minimal {
            PanelProfile::Minimal
        } else {
            PanelProfile::Full
        };
        Self {
            config,
            store,
            persist: !minimal,
            profile,
            override_url,
            window: None,
            panels: None,
            session: None,
        }
    }

    /// Create the host window. Returns `false` if the event loop should exit.
    fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("SplitView")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.window = Some(window);
        self.panels = Some(PanelRegistry::new(PanelManager::new()));
        true
    }

    /// The `openPreview` command: resolve the initial URL, render the
    /// panel document, and create the panel WebView.
    fn open_preview(&mut self) -> Result<(), PanelError> {
        let window = self
            .window
            .as_ref()
            .ok_or_else(|| PanelError::WebView("no window".into()))?;
        let registry = self
            .panels
            .as_mut()
            .ok_or_else(|| PanelError::WebView("registry not initialized".into()))?;

        let initial_url = host::resolve_initial_url(
            self.override_url.as_deref(),
            self.store.as_ref(),
            self.persist,
            &self.config.panel.default_url,
        )?;

        let html = render_panel_html(&initial_url, self.profile);
        let config = PanelConfig::with_html(html);
        let bounds = panel_bounds(window.inner_size());

        registry
            .create(PREVIEW_PANEL_ID, window.as_ref(), bounds, config)
            .map_err(|e| PanelError::WebView(e.to_string()))?;

        window.set_title(&format!("{}{initial_url}", self.config.panel.title_prefix));

        self.session = Some(match self.profile {
            PanelProfile::Full => PanelSession::starting(&initial_url),
            PanelProfile::Minimal => PanelSession::idle(&initial_url),
        });

        tracing::info!(url = %initial_url, "preview panel opened");
        Ok(())
    }

    /// Keep the panel pinned to the right half of the client area.
    fn sync_panel_bounds(&mut self) {
        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let registry = match &self.panels {
            Some(r) => r,
            None => return,
        };
        if let Some(handle) = registry.get(PREVIEW_PANEL_ID) {
            if let Err(e) = handle.set_bounds(panel_bounds(window.inner_size())) {
                tracing::warn!(error = %e, "Failed to update panel bounds");
            }
        }
    }

    /// Process pending panel events (IPC messages, page loads, etc.).
    fn poll_panel_events(&mut self) {
        let events: Vec<PanelEvent> = match &self.panels {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                PanelEvent::IpcMessage { panel_id, body } => {
                    self.handle_panel_message(panel_id, &body);
                }
                PanelEvent::PageLoad {
                    panel_id,
                    state,
                    url,
                } => {
                    tracing::debug!(panel_id, ?state, url = %url, "panel page load");
                    // The outer panel document finishing is the initial
                    // load; iframe loads are reported by the page script.
                    if state == PageLoadState::Finished {
                        if let Some(session) = &mut self.session {
                            if session.generation() == 1 {
                                session.load_finished(1);
                            }
                        }
                    }
                }
                PanelEvent::TitleChanged { panel_id, title } => {
                    tracing::debug!(panel_id, title = %title, "panel title changed");
                }
                PanelEvent::NavigationRequested { panel_id, url } => {
                    tracing::debug!(panel_id, url = %url, "panel navigation");
                }
                PanelEvent::Closed { panel_id } => {
                    tracing::debug!(panel_id, "panel closed");
                }
            }
        }
    }

    /// Decode one IPC message and apply its host effects.
    fn handle_panel_message(&mut self, panel_id: u32, body: &str) {
        let Some(msg) = PanelMessage::from_json(body) else {
            // Unknown commands and malformed bodies alike: ignore
            tracing::debug!(
                panel_id,
                body_len = body.len(),
                "IPC message ignored: not a known panel command"
            );
            return;
        };

        // Mirror the panel's load state on the host side
        if let Some(session) = &mut self.session {
            match &msg {
                PanelMessage::UpdateTitle { url } => {
                    if session.submit(url).is_err() {
                        tracing::warn!(panel_id, url = %url, "panel reported an invalid URL");
                    }
                }
                PanelMessage::Error { message, url } => {
                    if !session.page_errored(url, message.clone()) {
                        tracing::debug!(panel_id, url = %url, "stale load failure ignored");
                    }
                }
                _ => {}
            }
        }

        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let mut surface = WindowHost {
            window: window.as_ref(),
        };
        let reply = host::dispatch_panel_message(
            msg,
            &self.config.panel.title_prefix,
            self.persist,
            &mut surface,
            self.store.as_mut(),
        );

        if let Some(reply) = reply {
            if let Some(registry) = &self.panels {
                if let Some(handle) = registry.get(panel_id) {
                    if let Err(e) = handle.send(&reply) {
                        tracing::warn!(panel_id, error = %e, "Failed to send host message");
                    }
                }
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(registry) = &mut self.panels {
            registry.destroy_all();
        }
    }
}

impl ApplicationHandler for PreviewApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }
        if let Err(e) = self.open_preview() {
            tracing::error!("Failed to open preview panel: {e}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_panel_bounds();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.poll_panel_events();
    }
}

/// The panel sits beside the main view, occupying the right half of the
/// window client area at full height.
fn panel_bounds(size: winit::dpi::PhysicalSize<u32>) -> wry::Rect {
    let panel_width = size.width / 2;
    let x = (size.width - panel_width) as i32;
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(x, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(panel_width, size.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(bounds: wry::Rect) -> (i32, i32, u32, u32) {
        let (x, y) = match bounds.position {
            wry::dpi::Position::Physical(pos) => (pos.x, pos.y),
            _ => panic!("expected physical position"),
        };
        let (w, h) = match bounds.size {
            wry::dpi::Size::Physical(size) => (size.width, size.height),
            _ => panic!("expected physical size"),
        };
        (x, y, w, h)
    }

    #[test]
    fn panel_occupies_right_half() {
        let (x, y, w, h) = parts(panel_bounds(winit::dpi::PhysicalSize::new(1280, 800)));
        assert_eq!((x, y), (640, 0));
        assert_eq!((w, h), (640, 800));
    }

    #[test]
    fn panel_bounds_cover_odd_widths() {
        // No pixel column may fall between the main view and the panel
        let (x, _, w, _) = parts(panel_bounds(winit::dpi::PhysicalSize::new(1281, 800)));
        assert_eq!(x as u32 + w, 1281);
    }
}
