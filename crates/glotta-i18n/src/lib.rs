#![forbid(unsafe_code)]

//! Gettext-style localization for request-driven services.
//!
//! # Role in Glotta
//! `glotta-i18n` owns everything that does not touch HTTP: message
//! catalogs with passthrough fallback, plural-form rules, the
//! request-scoped translator context, and lazily evaluated translation
//! values. The web layer (`glotta-web`) resolves a locale per request
//! and installs the matching [`Translator`]; code anywhere below it
//! calls the translation functions without threading locale state
//! around.
//!
//! # Primary pieces
//! - [`I18n`]: process-wide store of languages and per-locale catalogs.
//! - [`Translator`]: one locale's view of the store, published into
//!   request scope.
//! - [`lazy_gettext`] / [`lazy_ngettext`] (aliased [`t`] / [`tn`]):
//!   deferred translation values that resolve when formatted.
//! - [`gettext`] / [`ngettext`]: immediate variants for call sites
//!   already inside a request scope.
//!
//! Missing translations are never errors: lookups pass the source text
//! through, and a locale without a catalog file serves source text with
//! a logged warning.

pub mod catalog;
pub mod config;
pub mod context;
pub mod lazy;
pub mod loader;
pub mod plural;

pub use catalog::{I18n, I18nError, MessageCatalog, Translator};
pub use config::{I18nConfig, Language};
pub use context::{dummy_gettext, dummy_ngettext, gettext, ngettext};
pub use lazy::{LazyMessage, lazy_gettext, lazy_ngettext};
pub use plural::PluralRule;

/// Short alias for [`lazy_gettext`], for rendering call sites.
pub use lazy::lazy_gettext as t;
/// Short alias for [`lazy_ngettext`], for rendering call sites.
pub use lazy::lazy_ngettext as tn;
