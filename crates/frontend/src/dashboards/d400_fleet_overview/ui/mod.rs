pub mod dashboard;
pub mod vehicle_sheet;

pub use dashboard::FleetOverviewDashboard;
