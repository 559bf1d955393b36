//! Locale-prefixed path building.
//!
//! URLs carry the lowercase form of the locale code (`/fr_fr/...` for
//! `fr_FR`); resolution accepts any casing, so the two round-trip.

/// Prefix a path with a locale segment: `locale_path("/x", "fr_FR")`
/// is `/fr_fr/x`.
///
/// The path may carry a query string; a missing leading slash is
/// supplied.
#[must_use]
pub fn locale_path(path: &str, locale: &str) -> String {
    let prefix = locale.to_ascii_lowercase();
    if path.starts_with('/') {
        format!("/{prefix}{path}")
    } else {
        format!("/{prefix}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_and_lowercases() {
        assert_eq!(locale_path("/dashboard", "fr_FR"), "/fr_fr/dashboard");
        assert_eq!(locale_path("/", "en_US"), "/en_us/");
    }

    #[test]
    fn supplies_missing_slash() {
        assert_eq!(locale_path("dashboard", "en_US"), "/en_us/dashboard");
    }

    #[test]
    fn query_string_rides_along() {
        assert_eq!(
            locale_path("/search?q=tea&page=2", "ru_RU"),
            "/ru_ru/search?q=tea&page=2"
        );
    }
}
