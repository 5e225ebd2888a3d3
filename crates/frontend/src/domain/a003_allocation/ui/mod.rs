mod details;
mod engineer_combobox;
pub mod history;
mod page;

pub use engineer_combobox::EngineerCombobox;
pub use page::AllocationPage;
