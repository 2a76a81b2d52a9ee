//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure business logic (no external dependencies)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations

// Specifier factories: expression string → resolved specifier
pub mod specifiers;

// Reachability question → ReachabilityParameters
pub mod reachability;
