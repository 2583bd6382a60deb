//! Embedded browser panel for SplitView.
//!
//! Wraps the `wry` crate to provide:
//! - The preview panel document (toolbar + sandboxed iframe) rendered
//!   from a single initial URL with escaping applied
//! - The closed, tagged message protocol between panel and host
//! - URL validation and scheme completion before every navigation
//! - A per-panel load-state machine with stale-callback protection
//! - Managed WebView instances with bidirectional IPC

pub mod events;
pub mod manager;
pub mod navigate;
pub mod protocol;
pub mod session;
pub mod template;

pub use events::{PageLoadState, PanelEvent};
pub use navigate::{normalize, NavigateError};
pub use protocol::{HostMessage, PanelMessage};
pub use session::{Navigation, PanelSession, SessionState};
pub use template::{render_panel_html, PanelProfile};
pub use manager::{PanelConfig, PanelHandle, PanelManager, PanelRegistry};
