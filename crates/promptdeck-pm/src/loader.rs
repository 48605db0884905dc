//! Prompt loader for seeding a store from `.prompt` files on disk.
//!
//! Recursively walks a directory, creating one prompt per `.prompt` file.
//! Titles are derived from relative paths (e.g., `writing/haiku` from
//! `writing/haiku.prompt`); the file body is the template text, and the
//! store seeds each variable schema from it on the way in.

use std::path::Path;

use tracing::debug;

use crate::{PromptDraft, PromptStore, StoreError};

/// Loads every `.prompt` file under `dir` into the store.
///
/// Returns the ids of the created prompts. Files with other extensions
/// are ignored.
///
/// # Errors
///
/// Returns `StoreError::Io` if the directory or a file cannot be read.
pub fn load_prompts_from_dir(store: &mut PromptStore, dir: &Path) -> Result<Vec<u64>, StoreError> {
    let mut ids = Vec::new();
    load_prompts_recursive(store, dir, dir, &mut ids)?;
    debug!(count = ids.len(), dir = %dir.display(), "prompts loaded");
    Ok(ids)
}

/// Recursively walks directory entries, creating prompts from `.prompt` files.
fn load_prompts_recursive(
    store: &mut PromptStore,
    base: &Path,
    current: &Path,
    ids: &mut Vec<u64>,
) -> Result<(), StoreError> {
    let entries = std::fs::read_dir(current)?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            load_prompts_recursive(store, base, &path, ids)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("prompt") {
            let relative = path
                .strip_prefix(base)
                .map_err(|e| StoreError::Io(std::io::Error::other(e)))?;

            // Title: relative path without the extension, `/`-separated.
            let title = relative
                .with_extension("")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");

            let description = std::fs::read_to_string(&path)?;
            ids.push(store.create(PromptDraft::new(title, description)).id);
        }
    }
    Ok(())
}
