//! Presentational views over page contents.

pub mod html;
pub mod text;

/// Document title.
pub const TITLE: &str = "Local Storage Paging";

/// Document description.
pub const DESCRIPTION: &str = "Managing page state with local storage.";
