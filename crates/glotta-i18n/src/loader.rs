//! Catalog file loading.
//!
//! Catalogs are compiled out-of-band and dropped into the configured
//! directory as one JSON file per locale:
//!
//! ```json
//! {
//!   "messages": { "Hello": "Bonjour" },
//!   "plurals": { "one apple": ["une pomme", "{n} pommes"] }
//! }
//! ```
//!
//! A locale without a readable catalog file is not an error: the store
//! downgrades it to an empty passthrough catalog and logs a warning, so
//! a partially translated deployment keeps serving source text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{I18nError, MessageCatalog};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    messages: HashMap<String, String>,
    #[serde(default)]
    plurals: HashMap<String, Vec<String>>,
}

/// Load `<dir>/<locale>.json` into a catalog.
pub fn load_catalog(dir: &Path, locale: &str) -> Result<MessageCatalog, I18nError> {
    let path = dir.join(format!("{locale}.json"));
    let raw = fs::read_to_string(&path).map_err(|err| I18nError::CatalogUnavailable {
        locale: locale.to_owned(),
        reason: format!("{}: {err}", path.display()),
    })?;
    let file: CatalogFile = serde_json::from_str(&raw).map_err(|err| I18nError::ParseError {
        locale: locale.to_owned(),
        reason: err.to_string(),
    })?;
    Ok(MessageCatalog::from_parts(
        locale,
        file.messages,
        file.plurals,
    ))
}

/// Load a locale's catalog, downgrading any failure to an empty
/// passthrough catalog with a warning.
#[must_use]
pub fn load_or_empty(dir: &Path, locale: &str) -> MessageCatalog {
    match load_catalog(dir, locale) {
        Ok(catalog) => {
            debug!(locale, entries = catalog.len(), "catalog loaded");
            catalog
        }
        Err(err) => {
            warn!(locale, error = %err, "no usable catalog, serving source text");
            MessageCatalog::empty(locale)
        }
    }
}
