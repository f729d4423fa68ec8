//! Turning a category and a keyword into batches of opened tabs.

use anyhow::Result;
use std::thread;
use std::time::Duration;

use crate::browser::TabOpener;
use crate::error::SearchError;
use crate::store::Category;
use crate::template::{substitute, EncodingRules};

/// URLs to open for one search, plus the templates that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPlan {
    pub category: String,
    pub keyword: String,
    pub urls: Vec<String>,
    pub skipped: Vec<SearchError>,
}

/// Substitute `keyword` into every template of `category`.
///
/// Malformed templates are collected in `skipped`; only an empty keyword
/// fails the whole plan.
pub fn plan_search(
    category: &Category,
    keyword: &str,
    rules: &EncodingRules,
) -> Result<SearchPlan, SearchError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(SearchError::EmptyKeyword);
    }

    let mut urls = Vec::with_capacity(category.templates.len());
    let mut skipped = Vec::new();
    for template in &category.templates {
        match substitute(template, keyword, rules.encoding_for(template)) {
            Ok(url) => urls.push(url),
            Err(e) => {
                tracing::warn!(category = %category.name, "skipping template: {}", e);
                skipped.push(e);
            }
        }
    }

    Ok(SearchPlan {
        category: category.name.clone(),
        keyword: keyword.to_string(),
        urls,
        skipped,
    })
}

impl SearchPlan {
    pub fn batches(&self, size: usize) -> std::slice::Chunks<'_, String> {
        self.urls.chunks(size.max(1))
    }
}

/// What happened while opening tabs.
#[derive(Debug, Default)]
pub struct SearchReport {
    pub opened: usize,
    pub failed: Vec<(String, String)>,
    /// False when the caller stopped before the last batch.
    pub completed: bool,
}

/// Open every URL of `plan`, `batch_size` at a time.
///
/// `continue_after_batch` is called between batches with the number of URLs
/// still to open; returning false stops the search. A tab that fails to open
/// is recorded and the rest of the batch continues.
pub fn run_search(
    plan: &SearchPlan,
    opener: &mut dyn TabOpener,
    batch_size: usize,
    tab_delay: Duration,
    continue_after_batch: &mut dyn FnMut(usize) -> Result<bool>,
) -> Result<SearchReport> {
    let mut report = SearchReport::default();
    let total = plan.urls.len();
    let mut done = 0usize;

    for (index, batch) in plan.batches(batch_size).enumerate() {
        if index > 0 && !continue_after_batch(total - done)? {
            tracing::info!(opened = report.opened, remaining = total - done, "search stopped by user");
            return Ok(report);
        }
        for url in batch {
            match opener.open_tab(url) {
                Ok(()) => report.opened += 1,
                Err(e) => {
                    tracing::warn!(url = %url, "could not open tab: {:#}", e);
                    report.failed.push((url.clone(), format!("{e:#}")));
                }
            }
            done += 1;
            if !tab_delay.is_zero() {
                thread::sleep(tab_delay);
            }
        }
        opener.finish_batch();
    }

    report.completed = true;
    Ok(report)
}
