//! Configuration types for the localization store.

use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::I18nError;

/// One supported language: a locale code and its display name.
///
/// The display name is what a language picker shows, so it is usually
/// the language's own name for itself ("Français", not "French").
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    /// Locale code, e.g. `en_US`. Becomes the URL prefix (lowercased)
    /// and the catalog file stem.
    pub code: String,
    /// Human-readable display name.
    pub name: String,
}

impl Language {
    /// Convenience constructor.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Localization configuration: the finite language set, the designated
/// default, and where compiled catalogs live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    /// Supported languages, in display order.
    pub languages: Vec<Language>,
    /// Locale used when a request path carries no recognized prefix.
    pub default_locale: String,
    /// Directory holding one `<locale>.json` catalog per language.
    pub catalog_dir: PathBuf,
}

impl I18nConfig {
    pub(crate) fn validate(&self) -> Result<(), I18nError> {
        if self.languages.is_empty() {
            return Err(I18nError::EmptyLanguageSet);
        }
        for lang in &self.languages {
            validate_locale_code(&lang.code)?;
        }
        if !self
            .languages
            .iter()
            .any(|lang| lang.code.eq_ignore_ascii_case(&self.default_locale))
        {
            return Err(I18nError::UnknownDefaultLocale(self.default_locale.clone()));
        }
        Ok(())
    }
}

/// Locale codes become path segments and file names, so restrict them
/// to `[A-Za-z0-9_-]` to keep catalog lookups inside the catalog
/// directory.
pub(crate) fn validate_locale_code(code: &str) -> Result<(), I18nError> {
    if code.is_empty()
        || !code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(I18nError::InvalidLocale(code.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(languages: Vec<Language>, default_locale: &str) -> I18nConfig {
        I18nConfig {
            languages,
            default_locale: default_locale.to_owned(),
            catalog_dir: PathBuf::from("locales"),
        }
    }

    #[test]
    fn accepts_well_formed_config() {
        let cfg = config(
            vec![
                Language::new("en_US", "English"),
                Language::new("sr-Latn", "Srpski"),
            ],
            "en_US",
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_locale_matched_case_insensitively() {
        let cfg = config(vec![Language::new("en_US", "English")], "en_us");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_language_set() {
        let cfg = config(Vec::new(), "en_US");
        assert!(matches!(cfg.validate(), Err(I18nError::EmptyLanguageSet)));
    }

    #[test]
    fn rejects_traversal_shaped_codes() {
        for bad in ["../en", "en/US", "en US", ""] {
            assert!(
                matches!(validate_locale_code(bad), Err(I18nError::InvalidLocale(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn deserializes_from_toml_shape() {
        let cfg: I18nConfig = serde_json::from_value(serde_json::json!({
            "languages": [
                {"code": "en_US", "name": "English"},
                {"code": "fr_FR", "name": "Français"},
            ],
            "default_locale": "en_US",
            "catalog_dir": "locales",
        }))
        .unwrap();
        assert_eq!(cfg.languages.len(), 2);
        assert_eq!(cfg.default_locale, "en_US");
    }
}
