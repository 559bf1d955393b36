//! Locale resolution from request paths.
//!
//! # Invariants
//!
//! 1. **Resolution never fails**: an unrecognized or missing prefix
//!    yields the default locale and leaves the path alone.
//!
//! 2. **The resolved locale is canonical**: whatever casing the URL
//!    used, the result is the code as configured (`/fr_fr/x` resolves
//!    to `fr_FR`).
//!
//! 3. **Stripping preserves the remainder**: `/L/x` strips to `/x`,
//!    `/L` alone strips to `/`.

use glotta_i18n::I18n;

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The locale to serve the request under (canonical code).
    pub locale: &'a str,
    /// The path with the locale prefix removed, when one was consumed.
    /// `None` means the path had no recognized prefix and is used
    /// unmodified.
    pub stripped: Option<String>,
}

/// Match the leading path segment against the configured locales.
///
/// The comparison ignores ASCII case, so `/en_us/`, `/EN_US/`, and
/// `/en_US/` all select `en_US`.
#[must_use]
pub fn resolve<'a>(i18n: &'a I18n, path: &str) -> Resolution<'a> {
    if let Some(rest) = path.strip_prefix('/') {
        let segment = rest.split('/').next().unwrap_or("");
        if !segment.is_empty()
            && let Some(locale) = i18n.canonical_locale(segment)
        {
            let remainder = &rest[segment.len()..];
            let stripped = if remainder.is_empty() {
                "/".to_owned()
            } else {
                remainder.to_owned()
            };
            return Resolution {
                locale,
                stripped: Some(stripped),
            };
        }
    }
    Resolution {
        locale: i18n.default_locale(),
        stripped: None,
    }
}
