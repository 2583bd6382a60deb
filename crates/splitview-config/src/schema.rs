//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly;
//! missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

/// URL loaded when no preference has been persisted yet.
pub const DEFAULT_URL: &str = "https://example.com";

/// Root configuration for SplitView.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SplitViewConfig {
    pub panel: PanelSection,
    pub window: WindowSection,
    pub logging: LoggingSection,
}

/// Preview panel options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    /// URL opened when nothing has been persisted yet.
    pub default_url: String,
    /// Prefix applied to the window title on every navigation.
    pub title_prefix: String,
    /// Minimal profile: no spinner, no error modal, no persisted URL.
    pub minimal: bool,
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.to_string(),
            title_prefix: "SplitView: ".to_string(),
            minimal: false,
        }
    }
}

/// Host window options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Default tracing directive, overridable via `--log-level`.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "splitview=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_example_com() {
        let config = SplitViewConfig::default();
        assert_eq!(config.panel.default_url, "https://example.com");
        assert_eq!(config.panel.title_prefix, "SplitView: ");
        assert!(!config.panel.minimal);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: SplitViewConfig = toml::from_str(
            r#"
            [panel]
            default_url = "https://docs.rs"
            "#,
        )
        .unwrap();
        assert_eq!(config.panel.default_url, "https://docs.rs");
        assert_eq!(config.panel.title_prefix, "SplitView: ");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.logging.level, "splitview=info");
    }

    #[test]
    fn empty_toml_is_valid() {
        let config: SplitViewConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.height, 800);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = SplitViewConfig::default();
        config.panel.minimal = true;
        let text = toml::to_string_pretty(&config).unwrap();
        let back: SplitViewConfig = toml::from_str(&text).unwrap();
        assert!(back.panel.minimal);
        assert_eq!(back.panel.default_url, config.panel.default_url);
    }
}
