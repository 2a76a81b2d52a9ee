// Flexible IpSpace factories - one per default strategy
//
// An explicit address expression resolves the same way under both
// strategies. Only the expansion of a missing (or blank) expression differs.

use crate::features::specifiers::domain::{
    IpSpaceSpecifier, LocationSpecifier, SpecifierError, SpecifierKind, SpecifierResult,
};
use crate::features::specifiers::ports::{IpSpaceSpecifierFactory, IpSpaceStrategy};
use crate::shared::models::IpSpace;

/// Non-blank expression, if any
fn explicit(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_constant(input: &str) -> SpecifierResult<IpSpaceSpecifier> {
    IpSpace::parse(input)
        .map(IpSpaceSpecifier::constant)
        .map_err(|reason| SpecifierError::new(SpecifierKind::IpSpace, input, reason))
}

/// Unconstrained → every address
#[derive(Debug, Default, Clone, Copy)]
pub struct FlexibleUniverseIpSpaceSpecifierFactory;

impl FlexibleUniverseIpSpaceSpecifierFactory {
    pub const NAME: &'static str = "FlexibleUniverseIpSpaceSpecifierFactory";

    pub fn new() -> Self {
        Self
    }
}

impl IpSpaceSpecifierFactory for FlexibleUniverseIpSpaceSpecifierFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn strategy(&self) -> IpSpaceStrategy {
        IpSpaceStrategy::Universe
    }

    fn build_ip_space_specifier(
        &self,
        input: Option<&str>,
        _start_location: &LocationSpecifier,
    ) -> SpecifierResult<IpSpaceSpecifier> {
        match explicit(input) {
            Some(expr) => parse_constant(expr),
            None => Ok(IpSpaceSpecifier::Universe),
        }
    }
}

/// Unconstrained → addresses of the start locations
#[derive(Debug, Default, Clone, Copy)]
pub struct FlexibleInferFromLocationIpSpaceSpecifierFactory;

impl FlexibleInferFromLocationIpSpaceSpecifierFactory {
    pub const NAME: &'static str = "FlexibleInferFromLocationIpSpaceSpecifierFactory";

    pub fn new() -> Self {
        Self
    }
}

impl IpSpaceSpecifierFactory for FlexibleInferFromLocationIpSpaceSpecifierFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn strategy(&self) -> IpSpaceStrategy {
        IpSpaceStrategy::InferFromLocation
    }

    fn build_ip_space_specifier(
        &self,
        input: Option<&str>,
        start_location: &LocationSpecifier,
    ) -> SpecifierResult<IpSpaceSpecifier> {
        match explicit(input) {
            Some(expr) => parse_constant(expr),
            None => Ok(IpSpaceSpecifier::infer_from(start_location.clone())),
        }
    }
}
