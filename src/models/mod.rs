pub mod post_entry;
