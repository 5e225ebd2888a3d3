pub mod analytics;
pub mod comparison;
pub mod dto;
pub mod insights;

pub use analytics::*;
pub use comparison::{ComparisonRow, ComparisonSelection, MAX_COMPARED_VEHICLES};
pub use dto::*;
pub use insights::{fleet_insights, Insight, InsightKind};
