use std::ffi::OsStr;
use std::fmt;

/// A directory entry, known only by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PostEntry {
    name: String,
}

impl PostEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Non UTF-8 names are converted lossily.
    pub fn from_os_str(name: impl AsRef<OsStr>) -> Self {
        Self::new(name.as_ref().to_string_lossy().into_owned())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Entries of one listing, in descending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<PostEntry>,
}

impl EntryList {
    /// Sorts by byte-wise comparison of the names, largest first.
    pub fn sorted_desc(entries: impl IntoIterator<Item = PostEntry>) -> Self {
        let mut entries: Vec<PostEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| b.name.cmp(&a.name));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PostEntry::name)
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a PostEntry;
    type IntoIter = std::slice::Iter<'a, PostEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PostEntry> for EntryList {
    fn from_iter<I: IntoIterator<Item = PostEntry>>(iter: I) -> Self {
        Self::sorted_desc(iter)
    }
}
