//! Estimate and validation logic for the booking form.
//!
//! The engine and the gate are pure functions over a [`FieldSnapshot`];
//! every user event triggers a full recompute, never a partial update.
//!
//! [`FieldSnapshot`]: crate::models::FieldSnapshot

pub mod common;
pub mod estimate;
pub mod validation;

pub use estimate::EstimateEngine;
pub use validation::{ValidationGate, ValidationResult};
