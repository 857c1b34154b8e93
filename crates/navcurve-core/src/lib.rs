//! NavCurve core: error type, tolerances, and validation.

pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{NavCurveError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;
