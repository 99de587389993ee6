//! Post-migration patch for `biome.json`.
//!
//! Forces two options on: `formatter.formatWithErrors` and
//! `javascript.parser.unsafeParameterDecoratorsEnabled`. Everything else in
//! the document is left as the migration produced it.

use crate::errors::{Error, Result};
use serde_json::{Map, Value as Json};
use std::fs;
use std::path::Path;

/// Sections and keys set to `true` by [`apply_defaults`].
pub const PATCHED_FLAGS: &[(&[&str], &str)] = &[
    (&["formatter"], "formatWithErrors"),
    (&["javascript", "parser"], "unsafeParameterDecoratorsEnabled"),
];

/// Set `key = true` inside the nested object at `section`, creating objects
/// along the way. A non-object value on the path is replaced by an object.
fn set_flag(root: &mut Map<String, Json>, section: &[&str], key: &str) {
    let mut cur = root;
    for seg in section {
        let slot = cur
            .entry(seg.to_string())
            .or_insert_with(|| Json::Object(Map::new()));
        if !slot.is_object() {
            *slot = Json::Object(Map::new());
        }
        let Json::Object(next) = slot else {
            return;
        };
        cur = next;
    }
    cur.insert(key.to_string(), Json::Bool(true));
}

/// Apply the fixed defaults to a parsed config object.
pub fn apply_defaults(config: &mut Map<String, Json>) {
    for (section, key) in PATCHED_FLAGS {
        set_flag(config, section, key);
    }
}

/// Patch config text, returning the rewritten document.
pub fn patch_str(src: &str, path: &Path) -> Result<String> {
    let mut doc: Json = serde_json::from_str(src).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(config) = doc.as_object_mut() else {
        return Err(Error::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    apply_defaults(config);
    serde_json::to_string_pretty(&doc).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read, patch, and rewrite the config at `path`. Nothing is written when
/// the file cannot be parsed.
pub fn patch_file(path: &Path) -> Result<()> {
    let src = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let out = patch_str(&src, path)?;
    fs::write(path, out).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
