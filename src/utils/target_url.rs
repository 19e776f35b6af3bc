//! Target URL validation.

use url::Url;

/// Errors that can occur while validating a redirect target.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("No url")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Parses `input` as an absolute URL and returns its serialized form.
///
/// Any scheme the URL parser accepts is allowed. The serialized form is what
/// gets stored and echoed back, so `https://example.com` becomes
/// `https://example.com/` and hostnames are lowercased.
///
/// # Errors
///
/// Returns [`TargetUrlError::Missing`] for an empty input and
/// [`TargetUrlError::InvalidFormat`] for relative or malformed URLs.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_target_url("HTTPS://EXAMPLE.COM/Path").unwrap(), "https://example.com/Path");
/// assert!(parse_target_url("not a url").is_err());
/// ```
pub fn parse_target_url(input: &str) -> Result<String, TargetUrlError> {
    if input.is_empty() {
        return Err(TargetUrlError::Missing);
    }

    Ok(Url::parse(input)?.to_string())
}
