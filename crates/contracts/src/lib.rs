//! Types and pure logic shared by the fleet dashboard backend and frontend.
//!
//! Everything here compiles for both native and `wasm32-unknown-unknown`, so
//! the aggregation rules used to draw a chart are the same ones the API uses
//! to build its responses.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
