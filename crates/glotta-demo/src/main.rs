#![forbid(unsafe_code)]

//! Demo service: a two-route site served under locale-prefixed URLs.
//!
//! Run it from the workspace root and visit any of:
//!
//! ```text
//! http://127.0.0.1:8080/            default locale
//! http://127.0.0.1:8080/fr_fr/      French
//! http://127.0.0.1:8080/ru_ru/items?n=5
//! ```
//!
//! Configuration comes from `glotta.toml` next to this crate (or the
//! path given as the first argument); catalogs live in `locales/`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::middleware::from_fn_with_state;
use axum::response::Html;
use axum::routing::get;
use glotta_i18n::{I18n, I18nConfig, lazy_gettext, lazy_ngettext};
use glotta_web::{RequestLocale, locale_path, resolve_locale};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

type AppState = Arc<I18n>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map_or_else(
        || PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/glotta.toml")),
        PathBuf::from,
    );
    let config = load_config(&config_path)?;
    let i18n = Arc::new(I18n::new(config)?);

    let app = Router::new()
        .route("/", get(index))
        .route("/items", get(items))
        .with_state(Arc::clone(&i18n))
        .layer(from_fn_with_state(Arc::clone(&i18n), resolve_locale));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Read the TOML configuration; a relative catalog directory is taken
/// relative to the config file itself, so the demo runs from any cwd.
fn load_config(path: &Path) -> Result<I18nConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let mut config: I18nConfig = toml::from_str(&raw)?;
    if config.catalog_dir.is_relative()
        && let Some(parent) = path.parent()
    {
        config.catalog_dir = parent.join(&config.catalog_dir);
    }
    Ok(config)
}

async fn index(State(i18n): State<AppState>, locale: RequestLocale) -> Html<String> {
    let title = lazy_gettext("Welcome");
    let blurb = lazy_gettext("This page is served in your language.");
    let items_label = lazy_gettext("Show the basket");

    let items_href = locale_path("/items?n=3", locale.locale());
    let switcher: String = i18n
        .languages()
        .iter()
        .map(|lang| format!(r#"<a href="{}">{}</a> "#, locale.path_for(&lang.code), lang.name))
        .collect();

    Html(format!(
        "<!doctype html>\n<html><head><title>{title}</title></head><body>\n\
         <h1>{title}</h1>\n<p>{blurb}</p>\n\
         <p><a href=\"{items_href}\">{items_label}</a></p>\n\
         <footer>{switcher}</footer>\n</body></html>\n"
    ))
}

#[derive(Deserialize)]
struct ItemsQuery {
    #[serde(default = "default_count")]
    n: u64,
}

fn default_count() -> u64 {
    1
}

async fn items(Query(query): Query<ItemsQuery>, locale: RequestLocale) -> Html<String> {
    let phrase = lazy_ngettext("one item in the basket", "{n} items in the basket", query.n)
        .to_string()
        .replace("{n}", &query.n.to_string());
    let back = lazy_gettext("Back");
    let home = locale_path("/", locale.locale());

    Html(format!(
        "<!doctype html>\n<html><body>\n<p>{phrase}</p>\n\
         <p><a href=\"{home}\">{back}</a></p>\n</body></html>\n"
    ))
}
