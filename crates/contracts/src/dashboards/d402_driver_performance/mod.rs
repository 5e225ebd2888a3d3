pub mod dto;

pub use dto::{sample_drivers, DriverMetrics, RatingBand};
