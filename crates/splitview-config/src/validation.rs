//! Configuration validation.
//!
//! Collects all problems into one `ConfigError` instead of failing on the
//! first, so a user sees everything wrong with their file at once.

use splitview_common::ConfigError;

use crate::schema::SplitViewConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SplitViewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let url = config.panel.default_url.trim();
    if url.is_empty() {
        errors.push("panel.default_url must not be empty".to_string());
    } else if !url.starts_with("http://") && !url.starts_with("https://") {
        errors.push(format!(
            "panel.default_url must be an http(s) URL, got '{url}'"
        ));
    }

    if config.window.width < 320 || config.window.height < 240 {
        errors.push(format!(
            "window size must be at least 320x240, got {}x{}",
            config.window.width, config.window.height
        ));
    }

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&SplitViewConfig::default()).is_ok());
    }

    #[test]
    fn rejects_empty_default_url() {
        let mut config = SplitViewConfig::default();
        config.panel.default_url = "  ".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("default_url"));
    }

    #[test]
    fn rejects_non_http_default_url() {
        let mut config = SplitViewConfig::default();
        config.panel.default_url = "ftp://files.example.com".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_tiny_window() {
        let mut config = SplitViewConfig::default();
        config.window.width = 100;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("320x240"));
    }

    #[test]
    fn collects_multiple_errors() {
        let mut config = SplitViewConfig::default();
        config.panel.default_url = String::new();
        config.logging.level = String::new();
        let err = validate(&config).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("default_url"));
        assert!(msg.contains("logging.level"));
    }
}
