// Domain: LocationSpecifier - Where flows may start

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::node_specifier::{NameMatcher, NodeSpecifier};

/// Interface part of an `node[iface]` location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InterfaceSelector {
    /// Exact interface names (stored lowercase)
    Names(BTreeSet<String>),
    /// Case-insensitive regex over interface names
    Regex(String),
}

impl InterfaceSelector {
    pub fn matcher(&self) -> NameMatcher<'_> {
        match self {
            InterfaceSelector::Names(names) => NameMatcher::Names(names),
            InterfaceSelector::Regex(pattern) => NameMatcher::compile(pattern),
        }
    }

    pub fn matches(&self, interface: &str) -> bool {
        self.matcher().is_match(interface)
    }
}

/// Resolved set of interface locations
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LocationSpecifier {
    /// Every interface of every node
    All,
    /// Every interface of the selected nodes
    Nodes { nodes: NodeSpecifier },
    /// Selected interfaces of the selected nodes
    Interfaces {
        nodes: NodeSpecifier,
        interfaces: InterfaceSelector,
    },
}

impl LocationSpecifier {
    pub fn is_all(&self) -> bool {
        matches!(self, LocationSpecifier::All)
    }

    /// Whether interface `interface` on `node` is a selected location
    pub fn matches(&self, node: &str, interface: &str) -> bool {
        let (nodes, interfaces) = self.matchers();
        nodes.is_match(node) && interfaces.is_match(interface)
    }

    /// Select the matching `(node, interface)` pairs
    pub fn resolve<'a>(
        &self,
        locations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> BTreeSet<(String, String)> {
        let (nodes, interfaces) = self.matchers();
        locations
            .into_iter()
            .filter(|(node, interface)| nodes.is_match(node) && interfaces.is_match(interface))
            .map(|(node, interface)| (node.to_string(), interface.to_string()))
            .collect()
    }

    fn matchers(&self) -> (NameMatcher<'_>, NameMatcher<'_>) {
        match self {
            LocationSpecifier::All => (NameMatcher::All, NameMatcher::All),
            LocationSpecifier::Nodes { nodes } => (nodes.matcher(), NameMatcher::All),
            LocationSpecifier::Interfaces { nodes, interfaces } => {
                (nodes.matcher(), interfaces.matcher())
            }
        }
    }
}
