//! Persisted preference store.
//!
//! One durable key — the last visited URL — read once at panel creation
//! and written on every confirmed navigation. The store is a trait so the
//! command handler takes it by injection and tests use the in-memory fake.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use splitview_common::ConfigError;
use tracing::warn;

/// Durable key-value state scoped to SplitView.
pub trait PreferenceStore {
    /// The URL of the last confirmed navigation, if any was recorded.
    fn last_visited_url(&self) -> Option<String>;

    /// Record `url` as the last visited URL. Last write wins.
    fn set_last_visited_url(&mut self, url: &str) -> Result<(), ConfigError>;
}

/// On-disk state file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct StateFile {
    last_visited_url: Option<String>,
}

/// TOML-file-backed store under the platform data directory.
///
/// Writes are atomic (write `.tmp`, then rename) so a crash mid-write
/// never leaves a truncated state file behind.
pub struct FilePreferenceStore {
    path: PathBuf,
    state: StateFile,
}

/// Platform-specific default state file path.
///
/// - macOS: `~/Library/Application Support/splitview/state.toml`
/// - Linux: `$XDG_DATA_HOME/splitview/state.toml`
/// - Windows: `%APPDATA%\splitview\state.toml`
pub fn default_state_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine data directory".into()))?;
    Ok(data_dir.join("splitview").join("state.toml"))
}

impl FilePreferenceStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; an unparseable file is treated as
    /// empty with a warning, since persisted state is never worth failing
    /// startup over.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("state file {} unreadable ({e}), starting fresh", path.display());
                StateFile::default()
            }),
            Err(_) => StateFile::default(),
        };
        Self { path, state }
    }

    /// Open the store at the platform default path.
    pub fn open_default() -> Result<Self, ConfigError> {
        Ok(Self::open(default_state_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(&self.state)
            .map_err(|e| ConfigError::StateWriteError(format!("serialize: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::StateWriteError(format!(
                    "create dir {}: {e}",
                    parent.display()
                ))
            })?;
        }

        // Atomic write: .tmp then rename
        let tmp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, &content)
            .map_err(|e| ConfigError::StateWriteError(format!("{}: {e}", tmp_path.display())))?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &content).map_err(|e2| {
                ConfigError::StateWriteError(format!("{}: {e2}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn last_visited_url(&self) -> Option<String> {
        self.state.last_visited_url.clone()
    }

    fn set_last_visited_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.state.last_visited_url = Some(url.to_string());
        self.persist()
    }
}

/// In-memory store for tests and `--no-persist` runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    last_visited_url: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a last visited URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            last_visited_url: Some(url.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn last_visited_url(&self) -> Option<String> {
        self.last_visited_url.clone()
    }

    fn set_last_visited_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.last_visited_url = Some(url.to_string());
        Ok(())
    }
}
