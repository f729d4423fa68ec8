//! Integration test: a data directory on disk taken through add, search,
//! update, remove and backup the way the CLI drives them.

use batchsearch_core::backup;
use batchsearch_core::history::HistoryLog;
use batchsearch_core::paths::DataLayout;
use batchsearch_core::search;
use batchsearch_core::store::{find_removals, CategoryStore};
use batchsearch_core::template::{ensure_placeholder, EncodingRules};
use batchsearch_core::updater::{self, UpdateOutcome};
use std::fs;
use tempfile::tempdir;

#[test]
fn add_update_remove_and_back_up() {
    let root = tempdir().unwrap();
    let layout = DataLayout::new(root.path().join("batchsearch"));
    layout.ensure().unwrap();
    let store = CategoryStore::from_layout(&layout);
    assert!(!store.ensure().unwrap(), "fresh data dir has no categories");

    let movies = store.create_category("Movies").unwrap();
    store.create_category("Books").unwrap();

    let added = ensure_placeholder("https://www.moviesite.com").unwrap();
    assert_eq!(added, "https://www.moviesite.com/?s={}");
    store.append_template(&movies, &added).unwrap();
    store
        .append_templates(
            &movies,
            &[
                ensure_placeholder("https://other.org/search?cat=1").unwrap(),
                "https://third.net/find/{}".to_string(),
            ],
        )
        .unwrap();

    // Books sorts first, Movies second.
    let catalog = store.load_all().unwrap();
    assert_eq!(catalog.get(1).unwrap().name, "Books");
    let movies = catalog.resolve("movies").unwrap();
    assert_eq!(movies.templates.len(), 3);

    let plan = search::plan_search(movies, "the matrix", &EncodingRules::default()).unwrap();
    assert_eq!(
        plan.urls,
        vec![
            "https://www.moviesite.com/?s=the+matrix",
            "https://other.org/search?cat=1&s=the+matrix",
            "https://third.net/find/the+matrix",
        ]
    );

    // The site moved to a new domain.
    let updates = HistoryLog::updates(&layout);
    let UpdateOutcome::Proposed { update, .. } =
        updater::plan_update(&catalog, "moviesite.lol").unwrap()
    else {
        panic!("expected the updater to find moviesite");
    };
    assert_eq!(update.new_template, "https://moviesite.lol/?s={}");
    updater::apply_update(&store, &catalog, &update, &updates).unwrap();

    let catalog = store.load_all().unwrap();
    assert_eq!(
        catalog.resolve("Movies").unwrap().templates[0],
        "https://moviesite.lol/?s={}"
    );
    assert!(updates.read().unwrap().unwrap().contains("Category: Movies"));

    // Remove a site by hostname.
    let deletions = HistoryLog::deletions(&layout);
    let removals = find_removals(&catalog, "third.net");
    assert_eq!(removals.len(), 1);
    let movies = catalog.resolve("Movies").unwrap();
    let targets: Vec<String> = removals.iter().map(|r| r.template.clone()).collect();
    assert_eq!(store.remove_templates(movies, &targets).unwrap(), 1);
    for r in &removals {
        deletions.record_deletion(&r.category_name, &r.template).unwrap();
    }
    assert!(deletions
        .read()
        .unwrap()
        .unwrap()
        .contains("  - REMOVED: https://third.net/find/{}"));

    let archive = backup::create_backup(layout.root(), &root.path().join("backups")).unwrap();
    assert!(fs::metadata(&archive).unwrap().len() > 0);
}
