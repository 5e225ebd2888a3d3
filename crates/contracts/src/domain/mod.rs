pub mod a001_vehicle;
pub mod a002_engineer;
pub mod a003_allocation;
