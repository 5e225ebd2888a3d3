pub mod a001_vehicle;
pub mod a003_allocation;
