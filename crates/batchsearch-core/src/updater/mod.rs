//! Automatic site updater.
//!
//! Sites move between domains but usually keep their name: `foo.com` becomes
//! `foo.net`. Given the new address, the first stored template with the same
//! brand token (category order, then line order) is moved to the new origin.

mod rewrite;

pub use rewrite::{normalize_new_url, rewrite_template};

use anyhow::{bail, Result};

use crate::brand::BrandToken;
use crate::error::SearchError;
use crate::history::HistoryLog;
use crate::store::{Catalog, CategoryStore};
use crate::url_parts::UrlParts;

/// A template replacement, proposed or applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlUpdate {
    pub category_name: String,
    pub file_name: String,
    pub old_template: String,
    pub new_template: String,
}

/// Result of matching a new site address against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No template shares the brand token.
    NoMatch { brand: BrandToken },
    /// A template matched, but rewriting it changes nothing.
    Unchanged { brand: BrandToken, template: String },
    Proposed { brand: BrandToken, update: UrlUpdate },
}

/// Find the template that `new_url` replaces and compute its rewrite.
pub fn plan_update(catalog: &Catalog, new_url: &str) -> Result<UpdateOutcome, SearchError> {
    let url = normalize_new_url(new_url)?;
    let brand = BrandToken::from_url(&url).ok_or_else(|| SearchError::NoBrand(new_url.to_string()))?;
    let new_origin = UrlParts::parse(&url)
        .map(|p| p.origin())
        .ok_or_else(|| SearchError::NoBrand(new_url.to_string()))?;

    let found = catalog
        .templates()
        .find(|(_, template)| BrandToken::from_url(template).as_ref() == Some(&brand));

    let Some((category, old)) = found else {
        return Ok(UpdateOutcome::NoMatch { brand });
    };

    let new_template = rewrite_template(old, &new_origin);
    if new_template.trim() == old.trim() {
        return Ok(UpdateOutcome::Unchanged {
            brand,
            template: old.to_string(),
        });
    }

    tracing::debug!(%brand, old, new = %new_template, file = %category.file_name, "matched template");
    Ok(UpdateOutcome::Proposed {
        brand,
        update: UrlUpdate {
            category_name: category.name.clone(),
            file_name: category.file_name.clone(),
            old_template: old.to_string(),
            new_template,
        },
    })
}

/// Write `update` into its category file and append it to the update history.
///
/// Fails without touching the file if the old template is no longer there.
pub fn apply_update(
    store: &CategoryStore,
    catalog: &Catalog,
    update: &UrlUpdate,
    history: &HistoryLog,
) -> Result<usize> {
    let Some(category) = catalog
        .categories
        .iter()
        .find(|c| c.file_name == update.file_name)
    else {
        bail!("category file {} is no longer loaded", update.file_name);
    };

    let replaced = store.replace_template(category, &update.old_template, &update.new_template)?;
    if replaced == 0 {
        bail!(
            "could not find the old URL in {} during rewrite; file not modified",
            update.file_name
        );
    }
    tracing::info!(
        file = %update.file_name,
        old = %update.old_template,
        new = %update.new_template,
        replaced,
        "updated site"
    );

    if let Err(e) = history.record_update(update) {
        tracing::warn!("could not write site update history: {:#}", e);
    }
    Ok(replaced)
}

/// Updates applied during the current interactive session.
#[derive(Debug, Default)]
pub struct Session {
    updates: Vec<UrlUpdate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, update: UrlUpdate) {
        self.updates.push(update);
    }

    pub fn updates(&self) -> &[UrlUpdate] {
        &self.updates
    }
}
