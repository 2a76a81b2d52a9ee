//! Flow dispositions
//!
//! A disposition is the categorical outcome of a simulated flow. The
//! declaration order is the total order used by resolved action sets.

use serde::{Deserialize, Serialize};

/// Flow disposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    /// Accepted by the destination node
    Accepted,
    /// Delivered to a connected subnet
    DeliveredToSubnet,
    /// Left the modeled network
    ExitsNetwork,
    /// Denied by an ingress filter
    DeniedIn,
    /// Denied by an egress filter
    DeniedOut,
    /// No matching route
    NoRoute,
    /// Matched a null route
    NullRouted,
    /// Next hop did not respond
    NeighborUnreachable,
    /// Not enough information to decide
    InsufficientInfo,
    /// Forwarding loop
    Loop,
}

impl Disposition {
    /// Every disposition, in order
    pub const ALL: [Disposition; 10] = [
        Disposition::Accepted,
        Disposition::DeliveredToSubnet,
        Disposition::ExitsNetwork,
        Disposition::DeniedIn,
        Disposition::DeniedOut,
        Disposition::NoRoute,
        Disposition::NullRouted,
        Disposition::NeighborUnreachable,
        Disposition::InsufficientInfo,
        Disposition::Loop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Accepted => "ACCEPTED",
            Disposition::DeliveredToSubnet => "DELIVERED_TO_SUBNET",
            Disposition::ExitsNetwork => "EXITS_NETWORK",
            Disposition::DeniedIn => "DENIED_IN",
            Disposition::DeniedOut => "DENIED_OUT",
            Disposition::NoRoute => "NO_ROUTE",
            Disposition::NullRouted => "NULL_ROUTED",
            Disposition::NeighborUnreachable => "NEIGHBOR_UNREACHABLE",
            Disposition::InsufficientInfo => "INSUFFICIENT_INFO",
            Disposition::Loop => "LOOP",
        }
    }

    /// Parse a disposition name, case-insensitive ("accepted", "DENIED_IN")
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        Self::ALL.iter().copied().find(|d| d.as_str() == upper)
    }

    /// Whether the flow made it to its destination (or out of the network)
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Disposition::Accepted | Disposition::DeliveredToSubnet | Disposition::ExitsNetwork
        )
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
