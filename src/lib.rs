pub mod core;
pub mod models;
pub mod services;

pub use crate::core::config::ListingConfig;
pub use crate::core::errors::{Error, Result};
pub use crate::models::post_entry::{EntryList, PostEntry};
