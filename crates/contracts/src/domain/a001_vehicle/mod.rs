pub mod aggregate;
pub mod lookup;

pub use aggregate::{StatusBucket, VehicleRecord, VehicleStatus};
pub use lookup::{assigned_driver, AssetListResponse, VehicleDetail, NO_DRIVER_ASSIGNED};
