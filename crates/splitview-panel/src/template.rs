//! The panel document.
//!
//! One substitution point — the initial URL — lands in three places: the
//! address input's `value` attribute, the iframe's `src` attribute, and
//! the inline script's `currentUrl`. The first two are HTML-attribute
//! escaped and the third is JS-string escaped before interpolation; raw
//! input never reaches the markup.
//!
//! The document exists in two profiles of the same component:
//! - [`PanelProfile::Full`]: spinner overlay, error modal with Retry, and
//!   `urlChanged` persistence messages.
//! - [`PanelProfile::Minimal`]: errors surface through host `alert`
//!   messages; nothing is persisted.

/// Which rendition of the panel document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelProfile {
    /// Spinner, error modal, persisted URL.
    Full,
    /// Host-alert errors only; no spinner, no persistence.
    Minimal,
}

/// Escape a string for interpolation into an HTML attribute value.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a string for interpolation into a single-quoted JS literal.
///
/// `<` is emitted as `\x3C` so the payload can never form a closing
/// `</script>` inside the inline script.
pub fn escape_js(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '<' => out.push_str("\\x3C"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the complete panel document for `initial_url`.
///
/// The caller is expected to pass an already-normalized URL; escaping is
/// applied here regardless, so even a hostile string degrades to inert
/// text rather than markup.
pub fn render_panel_html(initial_url: &str, profile: PanelProfile) -> String {
    let url_attr = escape_attr(initial_url);
    let url_js = escape_js(initial_url);

    let overlays = match profile {
        PanelProfile::Full => OVERLAY_MARKUP,
        PanelProfile::Minimal => "",
    };
    let persist = match profile {
        PanelProfile::Full => "true",
        PanelProfile::Minimal => "false",
    };
    let use_modal = match profile {
        PanelProfile::Full => "true",
        PanelProfile::Minimal => "false",
    };

    DOCUMENT_TEMPLATE
        .replace("__STYLE__", STYLE)
        .replace("__OVERLAYS__", overlays)
        .replace("__SCRIPT__", SCRIPT_TEMPLATE)
        .replace("__INITIAL_URL_ATTR__", &url_attr)
        .replace("__INITIAL_URL_JS__", &url_js)
        .replace("__PERSIST__", persist)
        .replace("__USE_MODAL__", use_modal)
}

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <style>
__STYLE__
    </style>
  </head>
  <body>
    <div class="browser-container">
      <div class="browser-toolbar">
        <button id="refresh-button" class="browser-button" title="Refresh">&#8635;</button>
        <input
          type="text"
          id="url-input"
          class="browser-searchbar"
          value="__INITIAL_URL_ATTR__"
          placeholder="Enter URL (e.g., https://example.com)"
        />
        <button id="go-button" class="browser-button" title="Go">&#8594;</button>
      </div>
      <div class="browser-content">
__OVERLAYS__
        <iframe
          id="content-frame"
          src="__INITIAL_URL_ATTR__"
          sandbox="allow-scripts allow-same-origin allow-forms"
          allow="autoplay; encrypted-media"
        ></iframe>
      </div>
    </div>
    <script>
__SCRIPT__
    </script>
  </body>
</html>
"#;

const OVERLAY_MARKUP: &str = r#"        <div id="spinner" class="spinner"></div>
        <div id="error-modal" class="error-modal">
          <div class="modal">
            <div class="modal-header">
              <h3>Error</h3>
              <button class="close-button" id="error-modal-close-btn">&#215;</button>
            </div>
            <div class="modal-body">
              <p id="error-message">An unexpected error occurred while loading the page.</p>
            </div>
            <div class="modal-footer">
              <button id="retry-btn" class="retry-btn">Retry</button>
            </div>
          </div>
        </div>"#;

const STYLE: &str = r#"      html, body {
        margin: 0;
        padding: 0;
        height: 100%;
        width: 100%;
        overflow: hidden;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
        background-color: #1b1b1f;
        color: #d8d8e0;
      }
      .browser-container {
        display: flex;
        flex-direction: column;
        height: 100vh;
        width: 100%;
      }
      .browser-toolbar {
        display: flex;
        padding: 8px;
        background-color: #232329;
        border-bottom: 1px solid #36363f;
      }
      .browser-searchbar {
        flex: 1;
        height: 28px;
        padding: 0 8px;
        border-radius: 4px;
        border: 1px solid #44444f;
        background-color: #2c2c33;
        color: #d8d8e0;
        margin-right: 8px;
      }
      .browser-button {
        width: 30px;
        height: 30px;
        border: none;
        background-color: #346eeb;
        color: #ffffff;
        border-radius: 4px;
        cursor: pointer;
        margin-right: 8px;
      }
      .browser-button:hover {
        background-color: #4a80f0;
      }
      .browser-content {
        flex: 1;
        width: 100%;
        position: relative;
      }
      iframe {
        height: 100%;
        width: 100%;
        border: none;
        background-color: #ffffff;
      }
      .spinner {
        display: none;
        position: fixed;
        top: 50%;
        left: 50%;
        width: 24px;
        height: 24px;
        border: 3px solid #346eeb;
        border-radius: 50%;
        border-top-color: #ffffff;
        animation: spin 1s ease-in-out infinite;
        z-index: 1001;
      }
      @keyframes spin {
        to { transform: rotate(360deg); }
      }
      .error-modal {
        display: none;
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background-color: rgba(0, 0, 0, 0.5);
        z-index: 1000;
        justify-content: center;
        align-items: center;
      }
      .modal {
        background-color: #232329;
        border-radius: 4px;
        border: 1px solid #36363f;
        width: 400px;
        max-width: 80%;
      }
      .modal-header {
        background-color: #b33636;
        color: #ffffff;
        padding: 12px;
        border-top-left-radius: 4px;
        border-top-right-radius: 4px;
        display: flex;
        justify-content: space-between;
        align-items: center;
      }
      .modal-header h3 {
        margin: 0;
        font-size: 16px;
        font-weight: normal;
      }
      .close-button {
        background: none;
        border: none;
        font-size: 18px;
        color: #ffffff;
        cursor: pointer;
      }
      .modal-body {
        padding: 16px;
        line-height: 1.5;
      }
      .modal-footer {
        padding: 12px;
        border-top: 1px solid #36363f;
        text-align: right;
      }
      .retry-btn {
        background-color: #346eeb;
        color: #ffffff;
        border: none;
        padding: 6px 12px;
        border-radius: 4px;
        cursor: pointer;
        font-size: 12px;
      }
      .retry-btn:hover {
        background-color: #4a80f0;
      }"#;

const SCRIPT_TEMPLATE: &str = r#"      var ipc = window.splitview.ipc;
      var PERSIST = __PERSIST__;
      var USE_MODAL = __USE_MODAL__;

      var urlInput = document.getElementById('url-input');
      var refreshButton = document.getElementById('refresh-button');
      var goButton = document.getElementById('go-button');
      var contentFrame = document.getElementById('content-frame');
      var spinner = document.getElementById('spinner');
      var errorModal = document.getElementById('error-modal');
      var errorMessage = document.getElementById('error-message');
      var errorCloseBtn = document.getElementById('error-modal-close-btn');
      var retryBtn = document.getElementById('retry-btn');

      var currentUrl = '__INITIAL_URL_JS__';

      // Same policy as the host: http(s) passes, scheme-less gets
      // https:// prepended, everything else is rejected.
      function normalize(raw) {
        var input = raw.trim();
        if (!input) { return null; }
        try {
          var parsed = new URL(input);
          return (parsed.protocol === 'http:' || parsed.protocol === 'https:')
            ? input : null;
        } catch (e) {
          try {
            var candidate = 'https://' + input;
            new URL(candidate);
            return candidate;
          } catch (e2) {
            return null;
          }
        }
      }

      function showLoading() {
        if (spinner) { spinner.style.display = 'block'; }
      }

      function hideLoading() {
        if (spinner) { spinner.style.display = 'none'; }
      }

      function showError(message) {
        var text = message || 'An unexpected error occurred while loading the page.';
        hideLoading();
        if (USE_MODAL && errorModal) {
          errorMessage.textContent = text;
          errorModal.style.display = 'flex';
        } else {
          ipc.post({ command: 'alert', text: text });
        }
      }

      function hideError() {
        if (errorModal) { errorModal.style.display = 'none'; }
      }

      function navigate(url) {
        hideError();
        showLoading();
        currentUrl = url;
        urlInput.value = url;
        // Clear first: re-assigning the same src is a no-op in some
        // sandboxed frame runtimes, and Refresh must actually reload.
        contentFrame.removeAttribute('src');
        contentFrame.src = url;
        ipc.post({ command: 'updateTitle', url: url });
        if (PERSIST) {
          ipc.post({ command: 'urlChanged', url: url });
        }
      }

      function loadUrl(raw) {
        var url = normalize(raw);
        if (url === null) {
          showError('Please enter a valid URL (e.g., https://example.com)');
          return;
        }
        navigate(url);
      }

      // Assigning a new src aborts any in-flight load, so these events
      // always refer to the most recent navigation. The error report
      // carries currentUrl so the host can match it against its own
      // navigation target.
      contentFrame.addEventListener('load', function () {
        hideLoading();
      });

      contentFrame.addEventListener('error', function () {
        var message = 'Failed to load the page. The website might be unavailable or the connection was refused.';
        showError(message);
        ipc.post({ command: 'error', message: message, url: currentUrl });
      });

      goButton.addEventListener('click', function () {
        loadUrl(urlInput.value);
      });

      refreshButton.addEventListener('click', function () {
        navigate(currentUrl);
      });

      urlInput.addEventListener('keydown', function (e) {
        if (e.key === 'Enter') {
          loadUrl(urlInput.value);
        }
      });

      if (errorCloseBtn) {
        errorCloseBtn.addEventListener('click', hideError);
      }

      if (retryBtn) {
        retryBtn.addEventListener('click', function () {
          hideError();
          navigate(currentUrl);
        });
      }

      window.addEventListener('resize', function () {
        ipc.post({
          command: 'resize',
          width: document.body.clientWidth,
          height: document.body.clientHeight
        });
      });

      // Host -> panel messages
      ipc.on('showError', function (msg) {
        showError(msg.message);
      });

      // The initial document starts loading immediately in the full
      // profile; the spinner reflects that.
      if (USE_MODAL) {
        showLoading();
      }"#;
