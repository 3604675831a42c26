pub mod calculations;
pub mod models;
pub mod summary;

pub use calculations::common::format_jpy;
pub use calculations::estimate::EstimateEngine;
pub use calculations::validation::{FieldRef, ValidationFailure, ValidationGate, ValidationResult};
pub use models::*;
