//! Allocation forms.
//!
//! - view_model.rs: form state, change tracking and validation
//! - view.rs: create and edit forms

mod view;
mod view_model;

pub use view::{EditAllocationForm, NewAllocationForm};
