//! VibeMarket Form Engine
//!
//! Declarative form handling for the entry flows: field specs with
//! per-field constraints, a blur-mode validation engine, and the profile
//! completion estimator.
//!
//! ## Features
//! - Field rules as data, one validation routine
//! - Blur-triggered per-field validation, submit-time full validation
//! - Touched tracking so errors render only after interaction
//! - Profile completion percentage for onboarding forms

use thiserror::Error;

pub mod engine;
pub mod field;
pub mod progress;

pub use engine::FormEngine;
pub use field::{validate, FieldKind, FieldSpec, SelectOption};
pub use progress::completion_percent;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Duplicate field: {0}")]
    DuplicateField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid field pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
