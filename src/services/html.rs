//! HTML fragment for a listing.
//!
//! Names are written verbatim into both the `href` and the document: no
//! escaping is applied, so names holding `<`, `&` or `"` produce markup as-is.

use crate::core::config::ListingConfig;
use crate::models::post_entry::EntryList;
use std::io::{self, Write};

pub const LIST_OPEN: &str = "<ul>";
pub const LIST_CLOSE: &str = "</ul>";

pub fn render_listing<W: Write>(
    out: &mut W,
    entries: &EntryList,
    config: &ListingConfig,
) -> io::Result<()> {
    writeln!(out, "{LIST_OPEN}")?;
    for entry in entries {
        writeln!(
            out,
            "\t<li><a href=\"{}/{}\">{}</a></li>",
            config.href_base,
            entry.name(),
            config.link_text
        )?;
    }
    writeln!(out, "{LIST_CLOSE}")
}

pub fn render_to_string(entries: &EntryList, config: &ListingConfig) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_listing(&mut buf, entries, config);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::post_entry::PostEntry;

    fn list(names: &[&str]) -> EntryList {
        names.iter().copied().map(PostEntry::new).collect()
    }

    #[test]
    fn renders_one_item_per_entry() {
        let html = render_to_string(&list(&["a.md", "c.md", "b.md"]), &ListingConfig::default());
        assert_eq!(
            html,
            "<ul>\n\
             \t<li><a href=\"posts/c.md\">Placeholder</a></li>\n\
             \t<li><a href=\"posts/b.md\">Placeholder</a></li>\n\
             \t<li><a href=\"posts/a.md\">Placeholder</a></li>\n\
             </ul>\n"
        );
    }

    #[test]
    fn empty_listing_is_still_a_list() {
        let html = render_to_string(&EntryList::default(), &ListingConfig::default());
        assert_eq!(html, "<ul>\n</ul>\n");
    }

    #[test]
    fn special_characters_pass_through() {
        let html = render_to_string(&list(&["a<b&c.md"]), &ListingConfig::default());
        assert!(html.contains("href=\"posts/a<b&c.md\""));
        assert!(!html.contains("&amp;"));
    }

    #[test]
    fn link_text_ignores_name() {
        let html = render_to_string(&list(&["hello.md"]), &ListingConfig::default());
        assert!(html.contains(">Placeholder</a>"));
        assert!(!html.contains(">hello.md</a>"));
    }
}
