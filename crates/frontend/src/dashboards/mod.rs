pub mod d400_fleet_overview;
pub mod d401_cost_analysis;
pub mod d402_driver_performance;

pub use d400_fleet_overview::ui::FleetOverviewDashboard;
pub use d401_cost_analysis::ui::{CostAnalysisDashboard, ServiceCostLookup};
pub use d402_driver_performance::ui::DriverPerformanceDashboard;
