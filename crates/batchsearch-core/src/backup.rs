//! Zip backup of the data directory (category files and history logs).

use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const BACKUP_PREFIX: &str = "batchsearch_backup";

/// `batchsearch_backup_<YYYYmmdd_HHMMSS>.zip`
pub fn backup_file_name(timestamp: &chrono::DateTime<chrono::Local>) -> String {
    format!("{BACKUP_PREFIX}_{}.zip", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Archive `source` into a timestamped zip inside `backup_dir`.
///
/// Entries are stored under the source directory's own name, so unpacking
/// recreates that folder. Returns the archive path.
pub fn create_backup(source: &Path, backup_dir: &Path) -> Result<PathBuf> {
    if !source.is_dir() {
        bail!("backup source {} does not exist", source.display());
    }
    fs::create_dir_all(backup_dir)
        .with_context(|| format!("create backup dir: {}", backup_dir.display()))?;

    let archive_path = backup_dir.join(backup_file_name(&chrono::Local::now()));
    let base = source
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("batchsearch")
        .to_string();

    let file = File::create(&archive_path)
        .with_context(|| format!("create archive: {}", archive_path.display()))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0usize;
    add_dir(&mut zip, options, source, &base, &archive_path, &mut entries)?;
    zip.finish().context("finish archive")?;

    tracing::info!(
        archive = %archive_path.display(),
        entries,
        "backup written"
    );
    Ok(archive_path)
}

fn add_dir(
    zip: &mut ZipWriter<File>,
    options: FileOptions,
    dir: &Path,
    prefix: &str,
    archive_path: &Path,
    entries: &mut usize,
) -> Result<()> {
    zip.add_directory(format!("{prefix}/"), options)
        .with_context(|| format!("add directory {prefix}"))?;

    let mut children: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("read dir: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()
        .with_context(|| format!("read dir: {}", dir.display()))?;
    children.sort();

    for path in children {
        // The archive may be written inside the tree being archived.
        if path == archive_path {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping non-UTF-8 path in backup");
            continue;
        };
        let entry_name = format!("{prefix}/{name}");
        if path.is_dir() {
            add_dir(zip, options, &path, &entry_name, archive_path, entries)?;
        } else if path.is_file() {
            zip.start_file(entry_name.as_str(), options)
                .with_context(|| format!("add file {entry_name}"))?;
            let mut src =
                File::open(&path).with_context(|| format!("open {}", path.display()))?;
            io::copy(&mut src, zip).with_context(|| format!("archive {}", path.display()))?;
            *entries += 1;
        }
    }
    Ok(())
}
