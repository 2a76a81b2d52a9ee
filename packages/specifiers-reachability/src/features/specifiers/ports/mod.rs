/*
 * Specifier Ports (Hexagonal Architecture)
 *
 * The expression grammar is a collaborator: resolvers only see
 * `build_*(expression) -> Specifier | SpecifierError`.
 *
 * Implementations are shared across concurrent resolutions and must be
 * stateless or internally synchronized (Send + Sync).
 */

use crate::features::specifiers::domain::{
    IpSpaceSpecifier, LocationSpecifier, NodeSpecifier, SpecifierResult,
};

/// Node expression → NodeSpecifier
pub trait NodeSpecifierFactory: Send + Sync {
    /// Factory name (for logs and debugging)
    fn name(&self) -> &'static str;

    fn build_node_specifier(&self, input: &str) -> SpecifierResult<NodeSpecifier>;
}

/// Location expression → LocationSpecifier
pub trait LocationSpecifierFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn build_location_specifier(&self, input: &str) -> SpecifierResult<LocationSpecifier>;
}

/// How an unconstrained address expression is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpSpaceStrategy {
    /// Unconstrained means every address
    Universe,
    /// Unconstrained means the addresses of the flow's start locations
    InferFromLocation,
}

/// Address expression → IpSpaceSpecifier
///
/// `input` is `None` (or blank) when the question left the field out;
/// `start_location` is the resolved start of the path, which the
/// infer-from-location strategy expands to.
pub trait IpSpaceSpecifierFactory: Send + Sync {
    fn name(&self) -> &'static str;

    fn strategy(&self) -> IpSpaceStrategy;

    fn build_ip_space_specifier(
        &self,
        input: Option<&str>,
        start_location: &LocationSpecifier,
    ) -> SpecifierResult<IpSpaceSpecifier>;
}
