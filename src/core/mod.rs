pub mod error;
pub mod mask;
pub mod timestamp;

pub use error::{AppError, Result};
