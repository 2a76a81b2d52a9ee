/*
 * Specifiers Reachability - question → engine parameters
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Disposition, HeaderSpace, IpSpace, IntegerSpace)
 * - features/    : Vertical slices (specifiers → reachability)
 * - config/      : Versioned YAML configuration
 *
 * Resolution is pure and synchronous: one question in, one
 * ReachabilityParameters (or error) out.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::should_implement_trait)] // from_str naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (specifier factories, reachability resolution)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, ReachabilityConfig};
pub use errors::{ReachabilityError, Result};
pub use features::reachability::{
    PacketHeaderConstraints, PathConstraints, PathConstraintsInput, Question, QuestionOptions,
    ReachabilityParameters, ReachabilityUseCase, ReachabilityUseCaseImpl,
    SpecifiersReachabilityQuestion,
};
pub use features::specifiers::{
    DispositionSpecifier, IpSpaceSpecifier, LocationSpecifier, NodeSpecifier, SpecifierFactories,
};
pub use shared::models::{Disposition, HeaderSpace, IpSpace};
