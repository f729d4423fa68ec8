//! Command handlers run non-interactively (`yes`) against a temp data dir.

use crate::cli::commands::{
    run_add, run_add_batch, run_backup, run_config, run_new_category, run_remove, run_update,
    search_category,
};
use crate::cli::App;
use batchsearch_core::browser::TabOpener;
use batchsearch_core::config::SearchConfig;
use batchsearch_core::paths::DataLayout;
use std::fs;
use tempfile::{tempdir, TempDir};

fn app() -> (TempDir, App) {
    let dir = tempdir().unwrap();
    let cfg = SearchConfig {
        backup_dir: Some(dir.path().join("backups")),
        tab_delay_ms: 0,
        ..SearchConfig::default()
    };
    let app = App::new(
        cfg,
        dir.path().join("config.toml"),
        DataLayout::new(dir.path().join("data")),
    );
    (dir, app)
}

#[derive(Default)]
struct OpenedTabs(Vec<String>);

impl TabOpener for OpenedTabs {
    fn open_tab(&mut self, url: &str) -> anyhow::Result<()> {
        self.0.push(url.to_string());
        Ok(())
    }
}

fn templates(app: &App, category: &str) -> Vec<String> {
    app.catalog().unwrap().resolve(category).unwrap().templates.clone()
}

#[test]
fn add_autofixes_and_appends() {
    let (_dir, app) = app();
    run_new_category(&app, "Linux ISOs").unwrap();
    run_add(&app, "linux isos", "https://distro.org/", true).unwrap();
    run_add(&app, "1", "https://mirror.net/search?x=1", true).unwrap();
    assert_eq!(
        templates(&app, "Linux ISOs"),
        vec!["https://distro.org/?s={}", "https://mirror.net/search?x=1&s={}"]
    );
}

#[test]
fn add_rejects_unsupported_scheme_without_writing() {
    let (_dir, app) = app();
    run_new_category(&app, "Books").unwrap();
    run_add(&app, "Books", "ftp://files.org/{}", true).unwrap();
    assert!(templates(&app, "Books").is_empty());
}

#[test]
fn add_to_unknown_category_fails() {
    let (_dir, app) = app();
    assert!(run_add(&app, "Nope", "https://a.com/{}", true).is_err());
}

#[test]
fn add_batch_skips_invalid_lines() {
    let (dir, app) = app();
    run_new_category(&app, "Books").unwrap();
    let list = dir.path().join("urls.txt");
    fs::write(
        &list,
        "# new finds\nhttps://a.com/find/{}\nnot a url\nhttps://b.com\n",
    )
    .unwrap();
    run_add_batch(&app, "Books", &list, true).unwrap();
    assert_eq!(
        templates(&app, "Books"),
        vec!["https://a.com/find/{}", "https://b.com/?s={}"]
    );
}

#[test]
fn update_then_remove_writes_histories() {
    let (_dir, app) = app();
    run_new_category(&app, "Movies").unwrap();
    run_add(&app, "Movies", "https://www.moviesite.com/?s={}", true).unwrap();

    run_update(&app, "https://moviesite.lol", true, None).unwrap();
    assert_eq!(templates(&app, "Movies"), vec!["https://moviesite.lol/?s={}"]);
    let updates = app.update_log().read().unwrap().unwrap();
    assert!(updates.contains("NEW: https://moviesite.lol/?s={}"));

    run_remove(&app, "moviesite.lol", true).unwrap();
    assert!(templates(&app, "Movies").is_empty());
    let deletions = app.deletion_log().read().unwrap().unwrap();
    assert!(deletions.contains("REMOVED: https://moviesite.lol/?s={}"));
}

#[test]
fn config_sets_logging_and_system_browser() {
    let (dir, mut app) = app();
    run_config(&mut app, Some(0), Some(true)).unwrap();
    assert_eq!(app.cfg.browser_id, Some(0));
    assert!(app.cfg.logging_enabled);
    assert!(dir.path().join("config.toml").exists());

    assert!(run_config(&mut app, Some(42), None).is_err());
    assert_eq!(app.cfg.browser_id, Some(0));
}

#[test]
fn backup_lands_in_configured_dir() {
    let (dir, app) = app();
    run_new_category(&app, "Books").unwrap();
    run_backup(&app).unwrap();
    let entries: Vec<_> = fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("batchsearch_backup_"));
}

#[test]
fn search_logs_before_opening_and_skips_bad_templates() {
    let (dir, mut app) = app();
    app.cfg.logging_enabled = true;
    app.cfg.tabs_per_batch = 2;
    run_new_category(&app, "Movies").unwrap();
    fs::write(
        dir.path().join("data/sites/Movies.txt"),
        "https://a.com/?s={}\nhttps://no-placeholder.com/\nhttps://b.com/find/{}\nhttps://c.com/{}/{}\nhttps://d.com/?q={}\n",
    )
    .unwrap();

    let catalog = app.catalog().unwrap();
    let movies = catalog.resolve("Movies").unwrap();
    let mut tabs = OpenedTabs::default();
    let report = search_category(&app, movies, "the matrix", false, &mut tabs)
        .unwrap()
        .unwrap();

    assert!(report.completed);
    assert_eq!(report.opened, 3);
    assert_eq!(
        tabs.0,
        vec![
            "https://a.com/?s=the+matrix",
            "https://b.com/find/the+matrix",
            "https://d.com/?q=the+matrix",
        ]
    );
    let log = app.search_log().read().unwrap().unwrap();
    let expected = format!("Category: {:<30} | Search Term: the matrix\n", "Movies");
    assert!(log.ends_with(&expected), "unexpected log: {log}");
    assert_eq!(log.lines().count(), 1);
}

#[test]
fn search_without_logging_leaves_no_log() {
    let (_dir, app) = app();
    run_new_category(&app, "Books").unwrap();
    run_add(&app, "Books", "https://lib.org/?q={}", true).unwrap();
    let catalog = app.catalog().unwrap();
    let mut tabs = OpenedTabs::default();
    search_category(&app, catalog.resolve("Books").unwrap(), "dune", false, &mut tabs).unwrap();
    assert_eq!(tabs.0, vec!["https://lib.org/?q=dune"]);
    assert!(app.search_log().read().unwrap().is_none());
}

#[test]
fn empty_category_opens_nothing() {
    let (_dir, app) = app();
    run_new_category(&app, "Books").unwrap();
    let catalog = app.catalog().unwrap();
    let mut tabs = OpenedTabs::default();
    let report =
        search_category(&app, catalog.resolve("Books").unwrap(), "dune", false, &mut tabs).unwrap();
    assert!(report.is_none());
    assert!(tabs.0.is_empty());
}
