pub mod a001_vehicle;
pub mod a002_engineer;
pub mod a003_allocation;
pub mod d400_fleet_overview;
pub mod d401_cost_analysis;
pub mod d402_driver_performance;
