pub mod config;
pub mod error;
pub mod tolerance;
pub mod traits;

pub use config::{SplineConfig, Validation};
pub use error::{KeypathError, Result};
pub use tolerance::Tolerance;
