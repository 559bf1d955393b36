#![forbid(unsafe_code)]

//! Integration: catalog files on disk through to lazily rendered text.
//!
//! Exercises the full chain a service goes through at runtime: build an
//! [`I18n`] store from a catalog directory, install a translator scope,
//! and render handles that were constructed before any locale existed.

use std::fs;
use std::path::Path;

use glotta_i18n::{I18n, I18nConfig, Language, context, lazy_gettext, lazy_ngettext};

fn write_catalog(dir: &Path, locale: &str, body: &str) {
    fs::write(dir.join(format!("{locale}.json")), body).unwrap();
}

fn store(dir: &Path) -> I18n {
    write_catalog(
        dir,
        "ru_RU",
        r#"{
            "messages": {"Welcome": "Добро пожаловать"},
            "plurals": {"one file": ["файл", "файла", "файлов"]}
        }"#,
    );
    write_catalog(
        dir,
        "fr_FR",
        r#"{
            "messages": {"Welcome": "Bienvenue"},
            "plurals": {"one file": ["un fichier", "{n} fichiers"]}
        }"#,
    );
    // en_US deliberately has no catalog file on disk.
    I18n::new(I18nConfig {
        languages: vec![
            Language::new("en_US", "English"),
            Language::new("fr_FR", "Français"),
            Language::new("ru_RU", "Русский"),
        ],
        default_locale: "en_US".to_owned(),
        catalog_dir: dir.to_path_buf(),
    })
    .unwrap()
}

#[test]
fn handles_constructed_early_render_per_scope() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = store(dir.path());

    // Authored before any locale is resolved.
    let welcome = lazy_gettext("Welcome");

    let fr = context::sync_scope(i18n.translator("fr_FR"), || welcome.to_string());
    let ru = context::sync_scope(i18n.translator("ru_RU"), || welcome.to_string());
    let en = context::sync_scope(i18n.translator("en_US"), || welcome.to_string());

    assert_eq!(fr, "Bienvenue");
    assert_eq!(ru, "Добро пожаловать");
    assert_eq!(en, "Welcome");
}

#[test]
fn plural_boundaries_follow_each_locale() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = store(dir.path());

    let counts = |locale: &str, n: u64| {
        let handle = lazy_ngettext("one file", "{n} files", n);
        context::sync_scope(i18n.translator(locale), || handle.to_string())
    };

    // French keeps the singular through 1.
    assert_eq!(counts("fr_FR", 0), "un fichier");
    assert_eq!(counts("fr_FR", 1), "un fichier");
    assert_eq!(counts("fr_FR", 2), "{n} fichiers");

    // Russian three-form with the teens exception.
    assert_eq!(counts("ru_RU", 1), "файл");
    assert_eq!(counts("ru_RU", 21), "файл");
    assert_eq!(counts("ru_RU", 3), "файла");
    assert_eq!(counts("ru_RU", 11), "файлов");
    assert_eq!(counts("ru_RU", 5), "файлов");

    // Untranslated default splits on n == 1.
    assert_eq!(counts("en_US", 1), "one file");
    assert_eq!(counts("en_US", 4), "{n} files");
}

#[test]
fn locale_without_catalog_file_serves_source_text() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = store(dir.path());

    let translator = i18n.translator("en_US");
    assert_eq!(translator.gettext("Welcome"), "Welcome");
}

#[tokio::test]
async fn async_scope_isolates_concurrent_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let i18n = store(dir.path());

    let fr = context::scope(i18n.translator("fr_FR"), async {
        tokio::task::yield_now().await;
        glotta_i18n::gettext("Welcome")
    });
    let ru = context::scope(i18n.translator("ru_RU"), async {
        tokio::task::yield_now().await;
        glotta_i18n::gettext("Welcome")
    });

    let (fr, ru) = tokio::join!(fr, ru);
    assert_eq!(fr, "Bienvenue");
    assert_eq!(ru, "Добро пожаловать");
}
