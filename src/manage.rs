//! Bulk management of generated instance files.
//!
//! Only regular `.txt` files directly inside the data directory are touched.

use crate::error::{GeneratorError, Result};
use log::{info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of [`move_txt_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveReport {
    pub moved: usize,
    /// Files left in place because the target already had a file of that name
    pub skipped: usize,
}

/// List the `.txt` files in `dir`, sorted by name.
pub fn list_txt_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| GeneratorError::io_at("listing", dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| GeneratorError::io_at("listing", dir, e))?
            .path();
        let is_txt = path.extension().map_or(false, |ext| ext == "txt");
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Count the `.txt` files in `dir`.
pub fn count_txt_files<P: AsRef<Path>>(dir: P) -> Result<usize> {
    Ok(list_txt_files(dir)?.len())
}

/// Delete every `.txt` file in `dir`, returning how many were removed.
///
/// A file that cannot be removed is logged and skipped.
pub fn delete_txt_files<P: AsRef<Path>>(dir: P) -> Result<usize> {
    let files = list_txt_files(&dir)?;
    let mut deleted = 0;

    for file in &files {
        match fs::remove_file(file) {
            Ok(()) => deleted += 1,
            Err(e) => warn!("Failed to delete {}: {}", file.display(), e),
        }
    }

    info!("Deleted {}/{} txt files", deleted, files.len());
    Ok(deleted)
}

/// Move every `.txt` file in `dir` into `target`, creating it if needed.
///
/// Files whose name already exists in `target` are skipped unless
/// `overwrite` is set.
pub fn move_txt_files<P: AsRef<Path>, Q: AsRef<Path>>(
    dir: P,
    target: Q,
    overwrite: bool,
) -> Result<MoveReport> {
    let target = target.as_ref();
    let files = list_txt_files(&dir)?;
    fs::create_dir_all(target).map_err(|e| GeneratorError::io_at("creating", target, e))?;

    let mut report = MoveReport::default();
    for file in &files {
        let Some(name) = file.file_name() else {
            continue;
        };
        let destination = target.join(name);

        if destination.exists() && !overwrite {
            warn!("{} already exists, skipping", destination.display());
            report.skipped += 1;
            continue;
        }

        match move_file(file, &destination) {
            Ok(()) => {
                report.moved += 1;
                if report.moved % 100 == 0 {
                    info!("Moved {}/{} files...", report.moved, files.len());
                }
            }
            Err(e) => warn!("Failed to move {}: {}", file.display(), e),
        }
    }

    info!(
        "Moved {}/{} txt files to {}",
        report.moved,
        files.len(),
        target.display()
    );
    Ok(report)
}

/// Rename, falling back to copy and delete when the rename fails for a reason
/// a copy could get around, such as crossing filesystems. When the copy fails
/// too, the rename error is reported.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    let rename_err = match fs::rename(from, to) {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };
    if matches!(
        rename_err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::AlreadyExists
    ) || to.is_dir()
    {
        return Err(rename_err);
    }

    fs::copy(from, to).map_err(|_| rename_err)?;
    fs::remove_file(from)
}
