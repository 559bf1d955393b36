//! Message catalogs with gettext lookup semantics.
//!
//! # Invariants
//!
//! 1. **Lookup never fails**: a message absent from the catalog resolves
//!    to the source message itself, which is the normal behavior for an
//!    untranslated string, not an error.
//!
//! 2. **Read-only after construction**: catalogs are built once (by the
//!    loader or by hand in tests) and then only read, so `I18n` and
//!    `Translator` are `Send + Sync` and shareable across requests
//!    without locking.
//!
//! 3. **The resolved locale is always configured**: [`I18n::translator`]
//!    hands out a passthrough translator for anything outside the
//!    configured set, so a translator's locale never dangles.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing message | msgid not in catalog | Source text passes through |
//! | Missing plural entry | singular msgid not in catalog | `n == 1` picks the singular |
//! | Short form list | catalog has fewer forms than the rule | Last available form |
//! | Unknown locale | code outside the configured set | Passthrough translator |

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{I18nConfig, Language};
use crate::loader;
use crate::plural::PluralRule;

/// Errors from configuration validation and catalog loading.
#[derive(Debug, Clone)]
pub enum I18nError {
    /// A locale code contained characters outside `[A-Za-z0-9_-]`.
    InvalidLocale(String),
    /// The configured default locale is not in the language set.
    UnknownDefaultLocale(String),
    /// The configuration named no languages at all.
    EmptyLanguageSet,
    /// A catalog file could not be read.
    CatalogUnavailable { locale: String, reason: String },
    /// A catalog file was read but could not be parsed.
    ParseError { locale: String, reason: String },
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocale(code) => write!(f, "invalid locale code: {code:?}"),
            Self::UnknownDefaultLocale(code) => {
                write!(f, "default locale '{code}' is not a configured language")
            }
            Self::EmptyLanguageSet => write!(f, "no languages configured"),
            Self::CatalogUnavailable { locale, reason } => {
                write!(f, "no catalog for locale '{locale}': {reason}")
            }
            Self::ParseError { locale, reason } => {
                write!(f, "malformed catalog for locale '{locale}': {reason}")
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Translated messages for a single locale.
///
/// Simple messages map source text to translated text. Plural entries
/// are keyed by the singular source message and hold indexed forms in
/// the order the locale's [`PluralRule`] selects them.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
    plurals: HashMap<String, Vec<String>>,
    rule: PluralRule,
}

impl MessageCatalog {
    /// An empty catalog for a locale: every lookup passes through.
    #[must_use]
    pub fn empty(locale: &str) -> Self {
        Self {
            messages: HashMap::new(),
            plurals: HashMap::new(),
            rule: PluralRule::for_locale(locale),
        }
    }

    /// Build a catalog from already-parsed maps.
    #[must_use]
    pub fn from_parts(
        locale: &str,
        messages: HashMap<String, String>,
        plurals: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            messages,
            plurals,
            rule: PluralRule::for_locale(locale),
        }
    }

    /// Insert a simple translation.
    pub fn insert(&mut self, msgid: impl Into<String>, msgstr: impl Into<String>) {
        self.messages.insert(msgid.into(), msgstr.into());
    }

    /// Insert indexed plural forms keyed by the singular source message.
    pub fn insert_plural(&mut self, singular: impl Into<String>, forms: Vec<String>) {
        self.plurals.insert(singular.into(), forms);
    }

    /// The plural rule in effect for this catalog.
    #[must_use]
    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Translate a message, passing the source text through on a miss.
    #[must_use]
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.messages.get(msgid).map_or(msgid, String::as_str)
    }

    /// Translate a plural message.
    ///
    /// With a catalog entry, the locale's rule picks the form index; a
    /// form list shorter than the rule expects falls back to its last
    /// form. Without an entry, `n == 1` selects `singular`, anything
    /// else `plural`.
    #[must_use]
    pub fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        if let Some(forms) = self.plurals.get(singular) {
            let idx = self.rule.index(n);
            if let Some(form) = forms.get(idx).or_else(|| forms.last()) {
                return form;
            }
        }
        if n == 1 { singular } else { plural }
    }

    /// Number of simple entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog translates nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.plurals.is_empty()
    }
}

/// A locale paired with its catalog: the value published into request
/// scope by the middleware and read back by the translation functions.
///
/// Cloning is cheap (the catalog is `Arc`-shared).
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    catalog: Arc<MessageCatalog>,
}

impl Translator {
    /// Pair a locale with a catalog.
    #[must_use]
    pub fn new(locale: impl Into<String>, catalog: Arc<MessageCatalog>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// A translator that translates nothing, for untranslated
    /// applications and unknown locales.
    #[must_use]
    pub fn passthrough(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        let catalog = Arc::new(MessageCatalog::empty(&locale));
        Self { locale, catalog }
    }

    /// The locale this translator serves.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// See [`MessageCatalog::gettext`].
    #[must_use]
    pub fn gettext<'a>(&'a self, msgid: &'a str) -> &'a str {
        self.catalog.gettext(msgid)
    }

    /// See [`MessageCatalog::ngettext`].
    #[must_use]
    pub fn ngettext<'a>(&'a self, singular: &'a str, plural: &'a str, n: u64) -> &'a str {
        self.catalog.ngettext(singular, plural, n)
    }
}

/// The process-wide localization store: configured languages, the
/// default locale, and one shared catalog per locale.
///
/// Built once at startup and shared behind an `Arc`; everything it
/// holds is immutable afterwards.
#[derive(Debug)]
pub struct I18n {
    languages: Vec<Language>,
    default_locale: String,
    catalogs: HashMap<String, Arc<MessageCatalog>>,
}

impl I18n {
    /// Validate the configuration and load one catalog per language
    /// from `catalog_dir`.
    ///
    /// Missing or unreadable catalog files are downgraded to empty
    /// passthrough catalogs with a warning; only an invalid
    /// configuration is an error.
    pub fn new(config: I18nConfig) -> Result<Self, I18nError> {
        config.validate()?;
        let catalogs = config
            .languages
            .iter()
            .map(|lang| {
                let catalog = loader::load_or_empty(&config.catalog_dir, &lang.code);
                (lang.code.clone(), Arc::new(catalog))
            })
            .collect();
        let default_locale = canonical_code(&config.languages, &config.default_locale)
            .ok_or_else(|| I18nError::UnknownDefaultLocale(config.default_locale.clone()))?
            .to_owned();
        Ok(Self {
            languages: config.languages,
            default_locale,
            catalogs,
        })
    }

    /// Build a store from in-memory catalogs, bypassing the filesystem.
    pub fn from_catalogs(
        languages: Vec<Language>,
        default_locale: impl Into<String>,
        catalogs: HashMap<String, MessageCatalog>,
    ) -> Result<Self, I18nError> {
        let default_locale = default_locale.into();
        if languages.is_empty() {
            return Err(I18nError::EmptyLanguageSet);
        }
        for lang in &languages {
            crate::config::validate_locale_code(&lang.code)?;
        }
        let default_locale = canonical_code(&languages, &default_locale)
            .ok_or(I18nError::UnknownDefaultLocale(default_locale))?
            .to_owned();
        let catalogs = languages
            .iter()
            .map(|lang| {
                let catalog = catalogs
                    .get(&lang.code)
                    .cloned()
                    .unwrap_or_else(|| MessageCatalog::empty(&lang.code));
                (lang.code.clone(), Arc::new(catalog))
            })
            .collect();
        Ok(Self {
            languages,
            default_locale,
            catalogs,
        })
    }

    /// The configured languages, in configuration order. Suitable for
    /// building language pickers.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// The locale used when a request carries no recognized prefix.
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Resolve a candidate code (any ASCII case) to its configured
    /// canonical form.
    #[must_use]
    pub fn canonical_locale(&self, candidate: &str) -> Option<&str> {
        canonical_code(&self.languages, candidate)
    }

    /// Whether a code names a configured language.
    #[must_use]
    pub fn is_supported(&self, candidate: &str) -> bool {
        self.canonical_locale(candidate).is_some()
    }

    /// The translator for a locale.
    ///
    /// Unknown locales get a passthrough translator rather than an
    /// error; the resolver only hands configured locales in, so this
    /// path exists for direct callers.
    #[must_use]
    pub fn translator(&self, locale: &str) -> Translator {
        match self
            .canonical_locale(locale)
            .and_then(|code| self.catalogs.get(code).map(|c| (code, c)))
        {
            Some((code, catalog)) => Translator::new(code, Arc::clone(catalog)),
            None => {
                tracing::warn!(locale, "translator requested for unknown locale");
                Translator::passthrough(locale)
            }
        }
    }

    /// The translator for the default locale.
    #[must_use]
    pub fn default_translator(&self) -> Translator {
        self.translator(&self.default_locale)
    }
}

fn canonical_code<'a>(languages: &'a [Language], candidate: &str) -> Option<&'a str> {
    languages
        .iter()
        .map(|lang| lang.code.as_str())
        .find(|code| code.eq_ignore_ascii_case(candidate))
}
