//! Specifiers Feature - symbolic expressions → resolved specifiers
//!
//! # Hexagonal Architecture
//! ```text
//! reachability::application (resolvers)
//!           ↓
//! factories.rs (SpecifierFactories bundle, injected)
//!           ↓
//! ports/ (NodeSpecifierFactory, LocationSpecifierFactory, IpSpaceSpecifierFactory)
//!           ↓
//! infrastructure/ (flexible grammar implementations)
//! ```
//!
//! # Usage
//! ```ignore
//! use specifiers_reachability::features::specifiers::SpecifierFactories;
//!
//! let factories = SpecifierFactories::flexible();
//! let nodes = factories.node().build_node_specifier("/core.*/")?;
//! ```

pub mod domain;
pub mod factories;
pub mod infrastructure;
pub mod ports;

// Re-export domain types
pub use domain::{
    DispositionSpecifier, InterfaceSelector, IpSpaceSpecifier, LocationSpecifier, NodeSpecifier,
    SpecifierError, SpecifierKind, SpecifierResult,
};

pub use factories::SpecifierFactories;
pub use ports::{IpSpaceSpecifierFactory, IpSpaceStrategy, LocationSpecifierFactory, NodeSpecifierFactory};
