pub mod errors;

pub use errors::{ConfigError, PanelError, SplitViewError};

pub type Result<T> = std::result::Result<T, SplitViewError>;
