pub mod dto;
pub mod grouping;

pub use dto::*;
pub use grouping::*;
