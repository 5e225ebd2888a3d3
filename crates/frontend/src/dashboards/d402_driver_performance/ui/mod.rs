pub mod dashboard;

pub use dashboard::DriverPerformanceDashboard;
