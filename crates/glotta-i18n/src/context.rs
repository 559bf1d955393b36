//! Request-scoped translator context.
//!
//! The middleware installs a [`Translator`] for the span of one request
//! with [`scope`]; translation functions and lazy handles read it back
//! with [`current`]. The storage is a tokio task-local, so concurrent
//! requests never observe each other's locale and nothing is locked.
//!
//! Outside any scope the functions degrade to passthrough: the source
//! message comes back untranslated, split on `n == 1` for plurals.

use std::future::Future;

use crate::catalog::Translator;

tokio::task_local! {
    static ACTIVE: Translator;
}

/// Run a future with `translator` active for its whole execution.
pub async fn scope<F>(translator: Translator, fut: F) -> F::Output
where
    F: Future,
{
    ACTIVE.scope(translator, fut).await
}

/// Synchronous variant of [`scope`], for tests and non-async callers.
pub fn sync_scope<F, R>(translator: Translator, f: F) -> R
where
    F: FnOnce() -> R,
{
    ACTIVE.sync_scope(translator, f)
}

/// The translator active on the current task, if any.
#[must_use]
pub fn current() -> Option<Translator> {
    ACTIVE.try_with(Clone::clone).ok()
}

/// Translate a message against the active translator, immediately.
///
/// Prefer [`crate::lazy_gettext`] in code that runs before the request
/// locale is known; this function is for call sites already inside a
/// request scope.
#[must_use]
pub fn gettext(msgid: &str) -> String {
    match current() {
        Some(translator) => translator.gettext(msgid).to_owned(),
        None => msgid.to_owned(),
    }
}

/// Translate a plural message against the active translator,
/// immediately.
#[must_use]
pub fn ngettext(singular: &str, plural: &str, n: u64) -> String {
    match current() {
        Some(translator) => translator.ngettext(singular, plural, n).to_owned(),
        None => dummy_ngettext(singular, plural, n),
    }
}

/// Passthrough with the `gettext` signature, for applications that are
/// not translated yet.
#[must_use]
pub fn dummy_gettext(msgid: &str) -> String {
    msgid.to_owned()
}

/// Passthrough with the `ngettext` signature: the verbatim singular for
/// `n == 1`, otherwise the verbatim plural.
#[must_use]
pub fn dummy_ngettext(singular: &str, plural: &str, n: u64) -> String {
    if n == 1 {
        singular.to_owned()
    } else {
        plural.to_owned()
    }
}
