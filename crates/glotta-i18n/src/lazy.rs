//! Lazily evaluated translation values.
//!
//! A [`LazyMessage`] captures its inputs without touching any catalog;
//! the lookup happens when the value is formatted, against whatever
//! translator is active *at that moment*. This lets translatable text
//! be authored where no request locale exists yet (statics, route
//! tables, struct fields) and still render in the right language.
//!
//! # Invariants
//!
//! 1. Construction has no side effects and cannot fail.
//! 2. A handle is immutable once constructed; [`LazyMessage::once`]
//!    returns a new value rather than mutating in place.
//! 3. Resolution of a message absent from the catalog yields the
//!    source text unchanged.

use std::fmt;
use std::sync::OnceLock;

use crate::context;

#[derive(Debug, Clone)]
enum Form {
    Singular(String),
    Plural {
        singular: String,
        plural: String,
        count: u64,
    },
}

/// A yet-to-be-translated message.
///
/// Formatting with `Display` performs the catalog lookup. Handles
/// re-resolve on every formatting by default, so the same value renders
/// differently under different request locales; [`LazyMessage::once`]
/// pins the first resolution instead.
#[derive(Debug, Clone)]
pub struct LazyMessage {
    form: Form,
    pinned: Option<OnceLock<String>>,
}

impl LazyMessage {
    /// Convert into a caching handle: the first formatting resolves,
    /// later formattings reuse that text regardless of the locale
    /// active then.
    #[must_use]
    pub fn once(self) -> Self {
        Self {
            form: self.form,
            pinned: Some(OnceLock::new()),
        }
    }

    /// Resolve now, against the currently active translator.
    #[must_use]
    pub fn resolve(&self) -> String {
        match &self.form {
            Form::Singular(msgid) => context::gettext(msgid),
            Form::Plural {
                singular,
                plural,
                count,
            } => context::ngettext(singular, plural, *count),
        }
    }
}

impl fmt::Display for LazyMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pinned {
            Some(cell) => f.write_str(cell.get_or_init(|| self.resolve())),
            None => f.write_str(&self.resolve()),
        }
    }
}

impl From<LazyMessage> for String {
    fn from(message: LazyMessage) -> Self {
        message.resolve()
    }
}

/// Lazily evaluated `gettext`: the lookup runs at formatting time.
#[must_use]
pub fn lazy_gettext(msgid: impl Into<String>) -> LazyMessage {
    LazyMessage {
        form: Form::Singular(msgid.into()),
        pinned: None,
    }
}

/// Lazily evaluated `ngettext`.
#[must_use]
pub fn lazy_ngettext(
    singular: impl Into<String>,
    plural: impl Into<String>,
    count: u64,
) -> LazyMessage {
    LazyMessage {
        form: Form::Plural {
            singular: singular.into(),
            plural: plural.into(),
            count,
        },
        pinned: None,
    }
}
