// Domain: resolved specifiers - Pure domain logic

pub mod disposition_specifier;
pub mod error;
pub mod ip_space_specifier;
pub mod location_specifier;
pub mod node_specifier;

// Re-export for public API
pub use disposition_specifier::DispositionSpecifier;
pub use error::{SpecifierError, SpecifierKind, SpecifierResult};
pub use ip_space_specifier::IpSpaceSpecifier;
pub use location_specifier::{InterfaceSelector, LocationSpecifier};
pub use node_specifier::{NameMatcher, NodeSpecifier};
