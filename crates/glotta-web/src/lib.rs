#![forbid(unsafe_code)]

//! Web layer for Glotta: locale-prefix URL handling for axum services.
//!
//! # Role in Glotta
//! `glotta-web` is the bridge between HTTP and the localization store.
//! It resolves a locale from each request's path prefix, rewrites the
//! path so routes stay locale-agnostic, and publishes the resolved
//! [`glotta_i18n::Translator`] into request scope for the duration of
//! the request.
//!
//! # Primary pieces
//! - [`resolver::resolve`]: pure path-to-locale resolution.
//! - [`middleware::resolve_locale`]: the axum middleware wrapping the
//!   resolution, URI rewrite, and translator scope.
//! - [`middleware::RequestLocale`]: extractor handing handlers the
//!   resolved locale and locale-switch paths.
//! - [`paths::locale_path`]: locale-prefixed link building.

pub mod middleware;
pub mod paths;
pub mod resolver;

pub use middleware::{RequestLocale, resolve_locale};
pub use paths::locale_path;
pub use resolver::{Resolution, resolve};
