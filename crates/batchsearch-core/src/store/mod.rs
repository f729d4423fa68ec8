//! Template store: one text file of URL templates per category.
//!
//! Every operation is a full read-modify-write of a single file. The store is
//! reloaded from disk before each menu action so hand edits show up at once.

mod filename;
mod parse;
mod remove;

pub use filename::{category_file_name, display_name, CATEGORY_EXT};
pub use parse::{parse_templates, remove_lines, replace_lines};
pub use remove::{find_removals, Removal};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SearchError;
use crate::paths::DataLayout;

/// A category loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display name derived from the file name.
    pub name: String,
    pub file_name: String,
    pub path: PathBuf,
    /// Templates in file line order.
    pub templates: Vec<String>,
}

/// A category file that exists but could not be read.
#[derive(Debug, Clone)]
pub struct UnreadableFile {
    pub file_name: String,
    pub error: String,
}

/// All categories, sorted by file name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub unreadable: Vec<UnreadableFile>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category by 1-based menu id.
    pub fn get(&self, id: usize) -> Option<&Category> {
        id.checked_sub(1).and_then(|i| self.categories.get(i))
    }

    /// Look up by 1-based id, display name, file name or file stem (case-insensitive).
    /// A number that is not a valid id is still tried as a name (`2024.txt`).
    pub fn find(&self, query: &str) -> Option<&Category> {
        let query = query.trim();
        if let Some(by_id) = query.parse::<usize>().ok().and_then(|id| self.get(id)) {
            return Some(by_id);
        }
        let wanted = query.to_lowercase();
        self.categories.iter().find(|c| {
            c.name.to_lowercase() == wanted
                || c.file_name.to_lowercase() == wanted
                || Path::new(&c.file_name)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|stem| stem.to_lowercase() == wanted)
        })
    }

    pub fn resolve(&self, query: &str) -> Result<&Category, SearchError> {
        self.find(query)
            .ok_or_else(|| SearchError::UnknownCategory(query.trim().to_string()))
    }

    /// `(category, template)` pairs in category order, then line order.
    pub fn templates(&self) -> impl Iterator<Item = (&Category, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.templates.iter().map(move |t| (c, t.as_str())))
    }
}

/// Reads and writes category files in one directory.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    dir: PathBuf,
}

impl CategoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_layout(layout: &DataLayout) -> Self {
        Self::new(layout.sites_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory if needed. Returns true when it holds at least one category file.
    pub fn ensure(&self) -> Result<bool> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create sites dir: {}", self.dir.display()))?;
        Ok(!self.category_files()?.is_empty())
    }

    /// Category file names, sorted.
    fn category_files(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("read sites dir: {}", self.dir.display()))
            }
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| format!("read sites dir: {}", self.dir.display()))?;
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(CATEGORY_EXT) {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Load every category. A file that cannot be read is logged, listed in
    /// `unreadable` and skipped.
    pub fn load_all(&self) -> Result<Catalog> {
        let mut catalog = Catalog::default();
        for file_name in self.category_files()? {
            let path = self.dir.join(&file_name);
            match fs::read_to_string(&path) {
                Ok(content) => catalog.categories.push(Category {
                    name: display_name(&file_name),
                    templates: parse_templates(&content),
                    file_name,
                    path,
                }),
                Err(e) => {
                    tracing::warn!(file = %path.display(), "could not read category file: {}", e);
                    catalog.unreadable.push(UnreadableFile {
                        file_name,
                        error: e.to_string(),
                    });
                }
            }
        }
        tracing::debug!(
            categories = catalog.categories.len(),
            dir = %self.dir.display(),
            "loaded categories"
        );
        Ok(catalog)
    }

    /// Create an empty category file for `name`.
    pub fn create_category(&self, name: &str) -> Result<Category> {
        let file_name = category_file_name(name)
            .ok_or_else(|| SearchError::InvalidCategoryName(name.to_string()))?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create sites dir: {}", self.dir.display()))?;

        let lower = file_name.to_lowercase();
        if self
            .category_files()?
            .iter()
            .any(|existing| existing.to_lowercase() == lower)
        {
            return Err(SearchError::CategoryExists(display_name(&file_name)).into());
        }

        let path = self.dir.join(&file_name);
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("create category file: {}", path.display()))?;
        tracing::info!(file = %path.display(), "created category");

        Ok(Category {
            name: display_name(&file_name),
            file_name,
            path,
            templates: Vec::new(),
        })
    }

    /// Append one template to the end of the category file.
    pub fn append_template(&self, category: &Category, template: &str) -> Result<()> {
        let separator = if ends_without_newline(&category.path)? { "\n" } else { "" };
        append(&category.path, &format!("{separator}{}\n", template.trim()))?;
        tracing::info!(file = %category.file_name, template, "added template");
        Ok(())
    }

    /// Append a batch of templates, separated from existing content by a blank line.
    pub fn append_templates(&self, category: &Category, templates: &[String]) -> Result<()> {
        if templates.is_empty() {
            return Ok(());
        }
        let body: Vec<&str> = templates.iter().map(|t| t.trim()).collect();
        append(&category.path, &format!("\n{}\n", body.join("\n")))?;
        tracing::info!(file = %category.file_name, count = templates.len(), "added templates");
        Ok(())
    }

    /// Replace `old` with `new` on every matching line. Returns how many lines
    /// changed; the file is only rewritten when that is non-zero.
    pub fn replace_template(&self, category: &Category, old: &str, new: &str) -> Result<usize> {
        let content = read(&category.path)?;
        let (updated, replaced) = replace_lines(&content, old, new);
        if replaced > 0 {
            write(&category.path, &updated)?;
        }
        Ok(replaced)
    }

    /// Remove the given templates from the category file. Returns how many lines were removed.
    pub fn remove_templates(&self, category: &Category, targets: &[String]) -> Result<usize> {
        let content = read(&category.path)?;
        let (updated, removed) = remove_lines(&content, targets);
        if removed > 0 {
            write(&category.path, &updated)?;
        }
        Ok(removed)
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read category file: {}", path.display()))
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("write category file: {}", path.display()))
}

fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open category file: {}", path.display()))?;
    file.write_all(text.as_bytes())
        .with_context(|| format!("append to category file: {}", path.display()))?;
    Ok(())
}

fn ends_without_newline(path: &Path) -> Result<bool> {
    match fs::read(path) {
        Ok(bytes) => Ok(bytes.last().is_some_and(|b| *b != b'\n')),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("read category file: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, CategoryStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        let store = CategoryStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn load_all_sorts_by_file_name_and_ignores_other_files() {
        let (_dir, store) = store_with(&[
            ("zeta.txt", "https://z.com/?s={}\n"),
            ("alpha_sites.txt", "# c\nhttps://a.com/?s={}\n\nhttps://b.com/{}\n"),
            ("notes.md", "https://ignored.com/?s={}\n"),
        ]);
        let catalog = store.load_all().unwrap();
        let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Sites", "Zeta"]);
        assert_eq!(
            catalog.categories[0].templates,
            vec!["https://a.com/?s={}", "https://b.com/{}"]
        );
        assert!(catalog.unreadable.is_empty());
    }

    #[test]
    fn load_all_on_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CategoryStore::new(dir.path().join("missing"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn ensure_reports_whether_categories_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = CategoryStore::new(dir.path().join("sites"));
        assert!(!store.ensure().unwrap());
        fs::write(store.dir().join("a.txt"), "").unwrap();
        assert!(store.ensure().unwrap());
    }

    #[test]
    fn find_by_id_name_and_stem() {
        let (_dir, store) = store_with(&[("anime.txt", ""), ("movies_ddl.txt", "")]);
        let catalog = store.load_all().unwrap();
        assert_eq!(catalog.find("1").unwrap().file_name, "anime.txt");
        assert_eq!(catalog.find("2").unwrap().file_name, "movies_ddl.txt");
        assert_eq!(catalog.find("movies ddl").unwrap().file_name, "movies_ddl.txt");
        assert_eq!(catalog.find("MOVIES_DDL").unwrap().file_name, "movies_ddl.txt");
        assert_eq!(catalog.find("anime.txt").unwrap().file_name, "anime.txt");
        assert!(catalog.find("0").is_none());
        assert!(catalog.find("3").is_none());
        assert_eq!(
            catalog.resolve("books").unwrap_err(),
            SearchError::UnknownCategory("books".to_string())
        );
    }

    #[test]
    fn numeric_name_falls_back_when_not_an_id() {
        let (_dir, store) = store_with(&[("2024.txt", ""), ("anime.txt", "")]);
        let catalog = store.load_all().unwrap();
        assert_eq!(catalog.find("2").unwrap().file_name, "anime.txt");
        assert_eq!(catalog.find("2024").unwrap().file_name, "2024.txt");
    }

    #[test]
    fn create_category_refuses_duplicates() {
        let (_dir, store) = store_with(&[("Anime.txt", "")]);
        let created = store.create_category("Linux ISOs").unwrap();
        assert_eq!(created.file_name, "Linux_ISOs.txt");
        assert_eq!(created.name, "Linux Isos");
        assert!(created.path.exists());

        let err = store.create_category("anime").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SearchError>(),
            Some(&SearchError::CategoryExists("Anime".to_string()))
        );
        assert!(store.create_category("  ").is_err());
    }

    #[test]
    fn append_template_adds_missing_newline() {
        let (_dir, store) = store_with(&[("a.txt", "https://a.com/?s={}")]);
        let catalog = store.load_all().unwrap();
        let cat = &catalog.categories[0];
        store.append_template(cat, "https://b.com/?s={}").unwrap();
        let content = fs::read_to_string(&cat.path).unwrap();
        assert_eq!(content, "https://a.com/?s={}\nhttps://b.com/?s={}\n");
    }

    #[test]
    fn append_templates_batch() {
        let (_dir, store) = store_with(&[("a.txt", "https://a.com/?s={}\n")]);
        let catalog = store.load_all().unwrap();
        let cat = &catalog.categories[0];
        store
            .append_templates(
                cat,
                &["https://b.com/?s={}".to_string(), "https://c.com/{}".to_string()],
            )
            .unwrap();
        let reloaded = store.load_all().unwrap();
        assert_eq!(
            reloaded.categories[0].templates,
            vec!["https://a.com/?s={}", "https://b.com/?s={}", "https://c.com/{}"]
        );
    }

    #[test]
    fn replace_and_remove_rewrite_the_file() {
        let (_dir, store) = store_with(&[("a.txt", "# keep\nhttps://old.com/?s={}\nhttps://b.com/?s={}\n")]);
        let catalog = store.load_all().unwrap();
        let cat = &catalog.categories[0];

        let n = store
            .replace_template(cat, "https://old.com/?s={}", "https://new.net/?s={}")
            .unwrap();
        assert_eq!(n, 1);
        let n = store
            .remove_templates(cat, &["https://b.com/?s={}".to_string()])
            .unwrap();
        assert_eq!(n, 1);
        assert_eq!(
            fs::read_to_string(&cat.path).unwrap(),
            "# keep\nhttps://new.net/?s={}\n"
        );

        assert_eq!(store.replace_template(cat, "https://nope.com/", "x").unwrap(), 0);
    }

    #[test]
    fn templates_iterate_in_category_then_line_order() {
        let (_dir, store) = store_with(&[
            ("b.txt", "https://b1.com/{}\n"),
            ("a.txt", "https://a1.com/{}\nhttps://a2.com/{}\n"),
        ]);
        let catalog = store.load_all().unwrap();
        let order: Vec<&str> = catalog.templates().map(|(_, t)| t).collect();
        assert_eq!(
            order,
            vec!["https://a1.com/{}", "https://a2.com/{}", "https://b1.com/{}"]
        );
    }
}
