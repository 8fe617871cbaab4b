#[macro_use]
mod keyed;

pub mod analysis;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pool;
pub mod scene;
pub mod session;
pub mod tessellation;
pub mod topology;

pub use error::{PoolscapeError, Result};
