//! Reachability Feature - question → ReachabilityParameters
//!
//! # Hexagonal Architecture
//! ```text
//! External (engine / answerer)
//!           ↓
//! application/ (ReachabilityUseCase - entry point, resolvers)
//!           ↓
//! domain/ (question, constraints, parameters)
//!           ↓
//! specifiers (factory ports, injected)
//! ```
//!
//! # Usage
//! ```ignore
//! use specifiers_reachability::{ReachabilityUseCase, ReachabilityUseCaseImpl};
//!
//! let usecase = ReachabilityUseCaseImpl::default();
//! let params = usecase.resolve(&question)?;
//! ```

pub mod application; // UseCase layer (entry point)
pub mod domain;

// Re-export application layer (primary interface)
pub use application::{ReachabilityUseCase, ReachabilityUseCaseImpl};

// Re-export domain types
pub use domain::{
    PacketHeaderConstraints, PathConstraints, PathConstraintsInput, Question, QuestionOptions,
    ReachabilityParameters, SpecifiersReachabilityQuestion,
};
