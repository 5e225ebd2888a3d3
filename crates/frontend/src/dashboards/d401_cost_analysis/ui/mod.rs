pub mod comparison;
pub mod cost_breakdown;
pub mod cost_overview;
pub mod cost_trends;
pub mod dashboard;
pub mod insights;
pub mod risk;
pub mod service_cost_lookup;
pub mod summary_cards;
pub mod top_costs;

pub use dashboard::CostAnalysisDashboard;
pub use service_cost_lookup::ServiceCostLookup;
