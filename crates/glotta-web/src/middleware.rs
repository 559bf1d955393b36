//! Locale-resolution middleware for axum.
//!
//! Installed with [`axum::middleware::from_fn_with_state`], the
//! middleware does per request, before dispatch:
//!
//! 1. resolve the locale from the leading path segment (default locale
//!    when absent or unsupported),
//! 2. rewrite the request URI to the unprefixed path so routes match
//!    without locale-aware patterns,
//! 3. record a [`RequestLocale`] in the request extensions,
//! 4. scope the matching [`Translator`] task-locally around the inner
//!    service, so translation functions and lazy handles see the
//!    request's locale.
//!
//! ```no_run
//! use std::sync::Arc;
//! use axum::{Router, middleware::from_fn_with_state, routing::get};
//! use glotta_web::middleware::resolve_locale;
//! # async fn page() -> String { String::new() }
//! # fn build(i18n: Arc<glotta_i18n::I18n>) -> Router {
//! Router::new()
//!     .route("/", get(page))
//!     .layer(from_fn_with_state(i18n, resolve_locale))
//! # }
//! ```

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::uri::{PathAndQuery, Uri};
use axum::middleware::Next;
use axum::response::Response;
use glotta_i18n::{I18n, Translator, context};
use tracing::{debug, warn};

use crate::paths::locale_path;
use crate::resolver::resolve;

/// The locale untranslated requests report when no middleware ran:
/// the classic untranslated-catalog locale.
const UNRESOLVED_LOCALE: &str = "C";

/// The locale resolved for one request, readable from handlers as an
/// extractor.
///
/// Set once by [`resolve_locale`] before dispatch; read-only afterward
/// and discarded with the request.
#[derive(Debug, Clone)]
pub struct RequestLocale {
    locale: String,
    original_path: String,
    unprefixed: String,
}

impl RequestLocale {
    fn new(locale: String, original_path: String, unprefixed: String) -> Self {
        Self {
            locale,
            original_path,
            unprefixed,
        }
    }

    /// The canonical locale code serving this request.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The path as the client sent it, prefix and query included.
    #[must_use]
    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// The same page under another locale: the unprefixed path and
    /// query, re-prefixed. Language pickers are built from this.
    #[must_use]
    pub fn path_for(&self, locale: &str) -> String {
        locale_path(&self.unprefixed, locale)
    }
}

impl<S> FromRequestParts<S> for RequestLocale
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            let path = path_and_query(&parts.uri);
            Self::new(UNRESOLVED_LOCALE.to_owned(), path.clone(), path)
        }))
    }
}

/// The middleware itself. See the module docs for the per-request
/// contract.
pub async fn resolve_locale(
    State(i18n): State<Arc<I18n>>,
    mut req: Request,
    next: Next,
) -> Response {
    let original_path = path_and_query(req.uri());
    let resolution = resolve(&i18n, req.uri().path());
    let locale = resolution.locale.to_owned();

    if let Some(stripped) = resolution.stripped {
        let rewritten = match req.uri().query() {
            Some(query) => format!("{stripped}?{query}"),
            None => stripped,
        };
        match rewrite(req.uri(), &rewritten) {
            Ok(uri) => *req.uri_mut() = uri,
            // A path that parsed once cannot normally fail to re-parse
            // shorter; if it somehow does, serve the request unstripped.
            Err(err) => warn!(%err, path = %original_path, "uri rewrite failed"),
        }
    }

    debug!(locale = %locale, path = %req.uri().path(), "locale resolved");
    let unprefixed = path_and_query(req.uri());
    req.extensions_mut().insert(RequestLocale::new(
        locale.clone(),
        original_path,
        unprefixed,
    ));

    let translator: Translator = i18n.translator(&locale);
    context::scope(translator, next.run(req)).await
}

fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned())
}

fn rewrite(uri: &Uri, path_and_query: &str) -> Result<Uri, axum::http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>()?);
    Ok(Uri::from_parts(parts)?)
}
