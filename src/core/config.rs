use std::path::{Path, PathBuf};

/// Directory enumerated by the program, relative to the working directory.
pub const POSTS_DIR: &str = "posts";

/// Link text emitted for every entry.
pub const PLACEHOLDER_TEXT: &str = "Placeholder";

/// Where entries are read from and how their links are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    pub dir: PathBuf,
    pub href_base: String,
    pub link_text: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(POSTS_DIR),
            href_base: POSTS_DIR.to_string(),
            link_text: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

impl ListingConfig {
    /// Reads `posts` under `root` instead of the working directory. Links keep
    /// the relative `posts/` prefix.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        Self {
            dir: root.as_ref().join(POSTS_DIR),
            ..Self::default()
        }
    }
}
