//! Directory walk that finds legacy ESLint/Prettier configs.
//!
//! Files are classified by exact base name. Results are grouped by the
//! directory that contains them, so one directory yields one location even
//! when it holds several config files.

use crate::errors::{Error, Result};
use crate::models::{ConfigLocation, Family, Locations};
use glob::Pattern;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub const ESLINT_CONFIG_FILES: &[&str] = &[
    ".eslintrc.json",
    ".eslintrc.js",
    ".eslintrc.cjs",
    ".eslintrc.yaml",
    ".eslintrc.yml",
    ".eslintrc",
    "eslint.config.js",
    "eslint.config.mjs",
    "eslint.config.cjs",
];

pub const PRETTIER_CONFIG_FILES: &[&str] = &[
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yml",
    ".prettierrc.yaml",
    ".prettierrc.json5",
    ".prettierrc.js",
    ".prettierrc.cjs",
    ".prettierrc.mjs",
    ".prettierrc.toml",
    "prettier.config.js",
    "prettier.config.cjs",
    "prettier.config.mjs",
];

/// Directory names that are never descended into.
pub const PRUNED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", ".devops"];

/// Classify a file by its base name.
pub fn classify(file_name: &str) -> Option<Family> {
    if ESLINT_CONFIG_FILES.contains(&file_name) {
        Some(Family::Eslint)
    } else if PRETTIER_CONFIG_FILES.contains(&file_name) {
        Some(Family::Prettier)
    } else {
        None
    }
}

/// Whether a directory with this name is skipped, either by the built-in
/// list or by one of the configured `exclude` globs.
pub fn is_pruned(dir_name: &str, exclude: &[Pattern]) -> bool {
    PRUNED_DIRS.contains(&dir_name) || exclude.iter().any(|p| p.matches(dir_name))
}

fn should_descend(entry: &DirEntry, exclude: &[Pattern]) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if is_pruned(&name, exclude) {
        debug!("pruned {}", entry.path().display());
        return false;
    }
    true
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|e| e.kind() == ErrorKind::PermissionDenied)
        .unwrap_or(false)
}

/// Walk `root` and collect every directory holding a legacy config file.
///
/// Subtrees that cannot be read because of missing permissions are skipped.
/// Any other walk error aborts the scan.
pub fn find_configs(root: &Path, exclude: &[Pattern]) -> Result<Locations> {
    let mut locations = Locations::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| should_descend(e, exclude));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_permission_denied(&err) => {
                debug!(
                    "skipping unreadable {}",
                    err.path().unwrap_or(root).display()
                );
                continue;
            }
            Err(err) => {
                return Err(Error::Walk {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    source: err,
                })
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let Some(family) = classify(&entry.file_name().to_string_lossy()) else {
            continue;
        };
        let Some(dir) = entry.path().parent() else {
            continue;
        };
        locations
            .entry(dir.to_path_buf())
            .or_insert_with(|| ConfigLocation::new(dir.to_path_buf()))
            .mark(family);
    }

    Ok(locations)
}
