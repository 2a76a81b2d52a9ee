//! Shared module - Common types
//!
//! This module contains types that are shared across all features.
//! Nothing in here knows about expressions or factories.

pub mod models;

// Re-exports for convenience
pub use models::*;
