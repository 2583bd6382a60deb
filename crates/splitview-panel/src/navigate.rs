//! URL validation and scheme completion.
//!
//! Every submission goes through [`normalize`] before it is allowed to
//! touch the embedded frame:
//!
//! 1. `http`/`https` absolute URLs pass through unchanged.
//! 2. Scheme-less input (`example.com`) gets `https://` prepended, then
//!    must reparse cleanly.
//! 3. Everything else — other schemes included — is rejected. Prepending
//!    `https://` to an already-schemed string only manufactures garbage.

use url::Url;

/// User-facing message shown for any rejected input.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL (e.g., https://example.com)";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigateError {
    #[error("Please enter a valid URL (e.g., https://example.com)")]
    InvalidUrl,
}

/// Normalize a user-submitted URL string.
///
/// Returns the string to navigate to, or [`NavigateError::InvalidUrl`] if
/// the input must not reach the frame.
pub fn normalize(input: &str) -> Result<String, NavigateError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(NavigateError::InvalidUrl);
    }

    match Url::parse(input) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(input.to_string()),
        Ok(_) => Err(NavigateError::InvalidUrl),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let candidate = format!("https://{input}");
            match Url::parse(&candidate) {
                Ok(_) => Ok(candidate),
                Err(_) => Err(NavigateError::InvalidUrl),
            }
        }
        Err(_) => Err(NavigateError::InvalidUrl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- already-absolute http(s) URLs pass through unchanged --

    #[test]
    fn https_url_unchanged() {
        assert_eq!(
            normalize("https://example.com").unwrap(),
            "https://example.com"
        );
        assert_eq!(
            normalize("https://docs.rs/wry/latest/wry/").unwrap(),
            "https://docs.rs/wry/latest/wry/"
        );
    }

    #[test]
    fn http_url_unchanged() {
        assert_eq!(
            normalize("http://localhost:8080/path?q=1").unwrap(),
            "http://localhost:8080/path?q=1"
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            normalize("  https://example.com  ").unwrap(),
            "https://example.com"
        );
    }

    // -- scheme-less input gets https:// prepended --

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize("example.com").unwrap(), "https://example.com");
    }

    #[test]
    fn host_with_path_gets_https() {
        assert_eq!(
            normalize("example.com/a/b?c=d").unwrap(),
            "https://example.com/a/b?c=d"
        );
    }

    #[test]
    fn host_with_port_gets_https() {
        // A bare `host:port` parses as scheme `host`, so it is rejected
        // rather than silently rewritten into something else.
        assert_eq!(normalize("localhost:8080"), Err(NavigateError::InvalidUrl));
    }

    // -- rejected input --

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(normalize("not a url"), Err(NavigateError::InvalidUrl));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(normalize(""), Err(NavigateError::InvalidUrl));
        assert_eq!(normalize("   "), Err(NavigateError::InvalidUrl));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(
            normalize("ftp://files.example.com"),
            Err(NavigateError::InvalidUrl)
        );
        assert_eq!(
            normalize("javascript:alert(1)"),
            Err(NavigateError::InvalidUrl)
        );
        assert_eq!(
            normalize("file:///etc/passwd"),
            Err(NavigateError::InvalidUrl)
        );
        assert_eq!(
            normalize("data:text/html,<h1>x</h1>"),
            Err(NavigateError::InvalidUrl)
        );
    }

    #[test]
    fn error_message_is_the_user_facing_one() {
        let err = normalize("not a url").unwrap_err();
        assert_eq!(err.to_string(), INVALID_URL_MESSAGE);
    }
}
