// Domain: IpSpaceSpecifier - Source/destination address spaces

use serde::{Deserialize, Serialize};

use super::location_specifier::LocationSpecifier;
use crate::shared::models::IpSpace;

/// Resolved address space
///
/// `Universe` and `InferFromLocation` are what an unconstrained expression
/// expands to under the two strategies; an explicit expression is `Constant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IpSpaceSpecifier {
    /// Addresses written out in the question
    Constant { ip_space: IpSpace },
    /// Every IPv4 address
    Universe,
    /// Addresses assigned to (or routable from) the given locations
    InferFromLocation { locations: LocationSpecifier },
}

impl IpSpaceSpecifier {
    pub fn constant(ip_space: IpSpace) -> Self {
        IpSpaceSpecifier::Constant { ip_space }
    }

    pub fn infer_from(locations: LocationSpecifier) -> Self {
        IpSpaceSpecifier::InferFromLocation { locations }
    }

    pub fn is_universe(&self) -> bool {
        matches!(self, IpSpaceSpecifier::Universe)
    }

    pub fn is_inferred(&self) -> bool {
        matches!(self, IpSpaceSpecifier::InferFromLocation { .. })
    }

    /// Explicit addresses, when the question wrote them out
    pub fn ip_space(&self) -> Option<&IpSpace> {
        match self {
            IpSpaceSpecifier::Constant { ip_space } => Some(ip_space),
            _ => None,
        }
    }
}
