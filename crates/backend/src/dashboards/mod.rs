pub mod d400_fleet_overview;
pub mod d401_cost_analysis;
pub mod d402_driver_performance;
