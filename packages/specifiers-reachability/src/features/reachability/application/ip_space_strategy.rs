//! Source/destination address resolution
//!
//! The two sides use different factories: an unconstrained destination is
//! every address, an unconstrained source is whatever lives at the start
//! locations.

use crate::errors::{ReachabilityError, Result};
use crate::features::reachability::domain::PacketHeaderConstraints;
use crate::features::specifiers::{IpSpaceSpecifier, LocationSpecifier, SpecifierFactories};

pub const SRC_IPS_FIELD: &str = "headers.srcIps";
pub const DST_IPS_FIELD: &str = "headers.dstIps";

/// Resolved address specifiers for both ends of the flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpSpaceSpecifiers {
    pub source: IpSpaceSpecifier,
    pub destination: IpSpaceSpecifier,
}

pub fn resolve_ip_spaces(
    headers: &PacketHeaderConstraints,
    start_location: &LocationSpecifier,
    factories: &SpecifierFactories,
) -> Result<IpSpaceSpecifiers> {
    let source = factories
        .source_ip_space()
        .build_ip_space_specifier(headers.src_ips(), start_location)
        .map_err(|e| ReachabilityError::from_specifier(SRC_IPS_FIELD, e))?;

    let destination = factories
        .destination_ip_space()
        .build_ip_space_specifier(headers.dst_ips(), start_location)
        .map_err(|e| ReachabilityError::from_specifier(DST_IPS_FIELD, e))?;

    tracing::trace!(
        source_strategy = ?factories.source_ip_space().strategy(),
        destination_strategy = ?factories.destination_ip_space().strategy(),
        "resolved ip spaces"
    );

    Ok(IpSpaceSpecifiers {
        source,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::specifiers::NodeSpecifier;
    use crate::shared::models::IpSpace;

    fn start() -> LocationSpecifier {
        LocationSpecifier::Nodes {
            nodes: NodeSpecifier::names(["as1border1"]),
        }
    }

    #[test]
    fn test_unconstrained_strategies() {
        let resolved = resolve_ip_spaces(
            &PacketHeaderConstraints::unconstrained(),
            &start(),
            &SpecifierFactories::flexible(),
        )
        .unwrap();

        assert_eq!(resolved.source, IpSpaceSpecifier::infer_from(start()));
        assert_eq!(resolved.destination, IpSpaceSpecifier::Universe);
    }

    #[test]
    fn test_blank_counts_as_unconstrained() {
        let headers = PacketHeaderConstraints {
            src_ips: Some("  ".to_string()),
            dst_ips: Some(String::new()),
            ..Default::default()
        };
        let resolved =
            resolve_ip_spaces(&headers, &start(), &SpecifierFactories::flexible()).unwrap();
        assert!(resolved.source.is_inferred());
        assert!(resolved.destination.is_universe());
    }

    #[test]
    fn test_explicit_addresses_are_constant() {
        let headers = PacketHeaderConstraints {
            src_ips: Some("10.0.0.0/8".to_string()),
            dst_ips: Some("1.1.1.1".to_string()),
            ..Default::default()
        };
        let resolved =
            resolve_ip_spaces(&headers, &start(), &SpecifierFactories::flexible()).unwrap();

        assert_eq!(
            resolved.source,
            IpSpaceSpecifier::constant(IpSpace::parse("10.0.0.0/8").unwrap())
        );
        assert_eq!(
            resolved.destination,
            IpSpaceSpecifier::constant(IpSpace::parse("1.1.1.1").unwrap())
        );
    }

    #[test]
    fn test_bad_address_names_field() {
        let headers = PacketHeaderConstraints {
            dst_ips: Some("10.0.0.300".to_string()),
            ..Default::default()
        };
        let err =
            resolve_ip_spaces(&headers, &start(), &SpecifierFactories::flexible()).unwrap_err();
        assert_eq!(err.field(), Some(DST_IPS_FIELD));
        assert!(err.to_string().contains("10.0.0.300"));
    }
}
