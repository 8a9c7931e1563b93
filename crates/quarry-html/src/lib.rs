//! HTML boilerplate stripping and metadata extraction over in-memory strings.

pub mod clean;
pub mod meta;

pub use clean::clean_html;
pub use meta::{PageMeta, extract_metadata};
