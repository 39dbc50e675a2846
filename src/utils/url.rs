// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Placeholder written in place of secret query values.
pub const REDACTED: &str = "REDACTED";

/// Build `{base}/{path}?{params}` with form-urlencoded parameters.
///
/// # Examples
/// ```
/// use video_search::utils::url::endpoint;
///
/// let url = endpoint("https://api.example.com/v3", "search", &[("q", "a b")]).unwrap();
/// assert_eq!(url.as_str(), "https://api.example.com/v3/search?q=a+b");
/// ```
pub fn endpoint(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse_with_params(&joined, params)?)
}

/// Copy of `url` with the value of every `param` query pair replaced.
///
/// # Examples
/// ```
/// use url::Url;
/// use video_search::utils::url::redact_param;
///
/// let url = Url::parse("https://api.example.com/v3/search?q=x&key=secret").unwrap();
/// assert_eq!(
///     redact_param(&url, "key"),
///     "https://api.example.com/v3/search?q=x&key=REDACTED"
/// );
/// ```
pub fn redact_param(url: &Url, param: &str) -> String {
    if !url.query_pairs().any(|(k, _)| k == param) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let value = if k == param {
                REDACTED.to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
