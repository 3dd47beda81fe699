pub mod engine;
pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod score;

pub use error::{GridsnakeError, Result};
