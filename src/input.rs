//! Translation file inputs.

pub mod translation;
