//! SplitView configuration and persisted state.
//!
//! TOML-based configuration with serde defaults, so partial configs work
//! out of the box, plus the persisted "last visited URL" preference behind
//! the [`PreferenceStore`] trait.

pub mod loader;
pub mod schema;
pub mod store;
pub mod validation;

pub use loader::{load_config, load_from_path};
pub use schema::SplitViewConfig;
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
