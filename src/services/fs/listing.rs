use crate::core::errors::{Error, Result};
use crate::models::post_entry::{EntryList, PostEntry};
use std::fs;
use std::path::Path;

/// Reads the immediate entries of `dir` and sorts them, largest name first.
///
/// Enumeration is eager: every name is collected before returning, so a
/// failure part way through yields an error and no partial list.
pub fn list_entries(dir: impl AsRef<Path>) -> Result<EntryList> {
    let dir = dir.as_ref();
    let mut entries = Vec::new();

    let read = fs::read_dir(dir).map_err(|err| Error::directory_access(dir, err))?;
    for entry in read {
        let entry = entry.map_err(|err| Error::directory_access(dir, err))?;
        entries.push(PostEntry::from_os_str(entry.file_name()));
    }
    tracing::debug!(dir = %dir.display(), count = entries.len(), "enumerated directory");

    Ok(EntryList::sorted_desc(entries))
}
