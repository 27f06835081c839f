//! Domain models with validation at construction
//!
//! Request input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod average;
pub mod score;
pub mod validation;

pub use average::ceiling_mean;
pub use score::Score;
pub use validation::ValidationError;
