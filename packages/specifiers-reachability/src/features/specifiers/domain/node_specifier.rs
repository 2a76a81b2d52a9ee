// Domain: NodeSpecifier - Which nodes a path constraint refers to

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Resolved set of nodes, by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum NodeSpecifier {
    /// Every node in the network
    All,
    /// Exact names (stored lowercase, node names are case-insensitive)
    Names(BTreeSet<String>),
    /// Case-insensitive regex over node names
    Regex(String),
}

impl NodeSpecifier {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NodeSpecifier::Names(
            names
                .into_iter()
                .map(|n| n.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }

    pub fn is_all(&self) -> bool {
        matches!(self, NodeSpecifier::All)
    }

    /// Compile once for matching many names
    pub fn matcher(&self) -> NameMatcher<'_> {
        match self {
            NodeSpecifier::All => NameMatcher::All,
            NodeSpecifier::Names(names) => NameMatcher::Names(names),
            NodeSpecifier::Regex(pattern) => NameMatcher::compile(pattern),
        }
    }

    /// Whether `node` is selected
    pub fn matches(&self, node: &str) -> bool {
        self.matcher().is_match(node)
    }

    /// Select the matching names out of `nodes`
    pub fn resolve<'a>(&self, nodes: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let matcher = self.matcher();
        nodes
            .into_iter()
            .filter(|n| matcher.is_match(n))
            .map(str::to_string)
            .collect()
    }
}

/// Compiled name selection shared by node and interface specifiers
#[derive(Debug, Clone)]
pub enum NameMatcher<'a> {
    All,
    /// Lowercase names
    Names(&'a BTreeSet<String>),
    /// `None` when the pattern does not compile; matches nothing
    Regex(Option<Regex>),
}

impl NameMatcher<'_> {
    /// Patterns are validated by the factory; an invalid one matches nothing.
    pub(crate) fn compile(pattern: &str) -> Self {
        NameMatcher::Regex(RegexBuilder::new(pattern).case_insensitive(true).build().ok())
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NameMatcher::All => true,
            NameMatcher::Names(names) => names.contains(&name.to_ascii_lowercase()),
            NameMatcher::Regex(regex) => regex.as_ref().is_some_and(|re| re.is_match(name)),
        }
    }
}
