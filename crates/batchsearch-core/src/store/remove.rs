//! Selecting templates to remove by exact URL or by hostname.

use crate::brand::site_host;

use super::Catalog;

/// A template chosen for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub category_name: String,
    pub file_name: String,
    pub template: String,
}

/// Templates equal to `target`, or whose host (lowercased, no `www.`) equals
/// the host of `target`. `target` may be a full URL or a bare hostname.
pub fn find_removals(catalog: &Catalog, target: &str) -> Vec<Removal> {
    let target = target.trim();
    if target.is_empty() {
        return Vec::new();
    }
    let target_host = site_host(target);

    catalog
        .templates()
        .filter(|(_, template)| {
            *template == target
                || target_host
                    .as_deref()
                    .is_some_and(|host| site_host(template).as_deref() == Some(host))
        })
        .map(|(category, template)| Removal {
            category_name: category.name.clone(),
            file_name: category.file_name.clone(),
            template: template.to_string(),
        })
        .collect()
}
