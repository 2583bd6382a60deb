use std::collections::HashMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::PanelEvent;

use super::handle::PanelHandle;
use super::types::PanelConfig;
use super::PanelManager;

/// Maps panel IDs to WebView handles and owns their lifecycle.
pub struct PanelRegistry {
    manager: PanelManager,
    handles: HashMap<u32, PanelHandle>,
}

impl PanelRegistry {
    pub fn new(manager: PanelManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    /// Create a panel WebView and register it.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        panel_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: PanelConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(panel_id, window, bounds, config)?;
        self.handles.insert(panel_id, handle);
        Ok(())
    }

    pub fn get(&self, panel_id: u32) -> Option<&PanelHandle> {
        self.handles.get(&panel_id)
    }

    /// Destroy a panel by ID.
    pub fn destroy(&mut self, panel_id: u32) -> bool {
        if self.handles.remove(&panel_id).is_some() {
            debug!(panel_id, "panel destroyed");
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(PanelEvent::Closed { panel_id });
            }
            true
        } else {
            false
        }
    }

    /// Drain all pending events from all panels.
    pub fn drain_events(&self) -> Vec<PanelEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active panels. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        let panel_ids: Vec<u32> = self.handles.keys().copied().collect();
        for panel_id in panel_ids {
            self.destroy(panel_id);
        }
    }
}
