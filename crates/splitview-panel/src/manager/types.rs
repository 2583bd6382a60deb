/// Configuration for creating a new panel WebView.
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// The rendered panel document (see `template::render_panel_html`).
    pub html: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access inside the panel.
    pub clipboard: bool,
    /// Whether to enable autoplay for embedded media.
    pub autoplay: bool,
}

impl PanelConfig {
    /// Create a config rendering the given document.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            devtools: cfg!(debug_assertions),
            user_agent: Some("SplitView/0.1".to_string()),
            clipboard: true,
            autoplay: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_html_sets_defaults() {
        let config = PanelConfig::with_html("<html></html>");
        assert_eq!(config.html, "<html></html>");
        assert_eq!(config.user_agent.as_deref(), Some("SplitView/0.1"));
        assert!(config.clipboard);
        assert!(config.autoplay);
    }
}
