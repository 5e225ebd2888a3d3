pub mod aggregate;

pub use aggregate::{filter_engineers, Engineer, EngineersResponse};
