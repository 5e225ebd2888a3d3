//! Tab management module
//!
//! - `page` wraps the content of one open page
//! - `registry` maps a page key to its view
//! - `tab_labels` holds the page titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
