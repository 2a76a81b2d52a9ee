// Domain: ReachabilityParameters - Engine-ready form of a question
//
// Built only by the resolve use case. Read-only afterwards.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::features::specifiers::{IpSpaceSpecifier, LocationSpecifier, NodeSpecifier};
use crate::shared::models::{Disposition, HeaderSpace};

/// Fully resolved reachability query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityParameters {
    pub(crate) actions: BTreeSet<Disposition>,
    pub(crate) header_space: HeaderSpace,
    pub(crate) source_ip_space_specifier: IpSpaceSpecifier,
    pub(crate) destination_ip_space_specifier: IpSpaceSpecifier,
    pub(crate) source_location_specifier: LocationSpecifier,
    pub(crate) final_nodes_specifier: NodeSpecifier,
    pub(crate) required_transit_nodes_specifier: Option<NodeSpecifier>,
    pub(crate) forbidden_transit_nodes_specifier: Option<NodeSpecifier>,
    pub(crate) ignore_filters: bool,
    pub(crate) max_traces: i32,
    pub(crate) specialize: bool,
}

impl ReachabilityParameters {
    /// Dispositions to search for, sorted and unique
    pub fn actions(&self) -> &BTreeSet<Disposition> {
        &self.actions
    }

    pub fn header_space(&self) -> &HeaderSpace {
        &self.header_space
    }

    pub fn source_ip_space_specifier(&self) -> &IpSpaceSpecifier {
        &self.source_ip_space_specifier
    }

    pub fn destination_ip_space_specifier(&self) -> &IpSpaceSpecifier {
        &self.destination_ip_space_specifier
    }

    pub fn source_location_specifier(&self) -> &LocationSpecifier {
        &self.source_location_specifier
    }

    pub fn final_nodes_specifier(&self) -> &NodeSpecifier {
        &self.final_nodes_specifier
    }

    /// `None` when the question did not require transit nodes
    pub fn required_transit_nodes_specifier(&self) -> Option<&NodeSpecifier> {
        self.required_transit_nodes_specifier.as_ref()
    }

    /// `None` when the question did not forbid any nodes
    pub fn forbidden_transit_nodes_specifier(&self) -> Option<&NodeSpecifier> {
        self.forbidden_transit_nodes_specifier.as_ref()
    }

    pub fn ignore_filters(&self) -> bool {
        self.ignore_filters
    }

    pub fn max_traces(&self) -> i32 {
        self.max_traces
    }

    pub fn specialize(&self) -> bool {
        self.specialize
    }
}
