pub mod charts;
pub mod error_banner;
pub mod side_sheet;
pub mod stat_card;
