// FlexibleLocationSpecifierFactory - location expressions
//
//   all | *             → every interface of every node
//   <nodes>             → every interface of the nodes
//   <nodes>[<ifaces>]   → named (or /regex/) interfaces of the nodes

use super::name_grammar::{is_all_keyword, parse_name_expr, NameExpr};
use crate::features::specifiers::domain::{
    InterfaceSelector, LocationSpecifier, NodeSpecifier, SpecifierError, SpecifierKind,
    SpecifierResult,
};
use crate::features::specifiers::ports::LocationSpecifierFactory;

#[derive(Debug, Default, Clone, Copy)]
pub struct FlexibleLocationSpecifierFactory;

impl FlexibleLocationSpecifierFactory {
    pub const NAME: &'static str = "FlexibleLocationSpecifierFactory";

    pub fn new() -> Self {
        Self
    }
}

impl LocationSpecifierFactory for FlexibleLocationSpecifierFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn build_location_specifier(&self, input: &str) -> SpecifierResult<LocationSpecifier> {
        let specifier = parse_location(input.trim())
            .map_err(|reason| SpecifierError::new(SpecifierKind::Location, input, reason))?;
        tracing::trace!(input, ?specifier, "location specifier built");
        Ok(specifier)
    }
}

fn parse_location(input: &str) -> Result<LocationSpecifier, String> {
    if is_all_keyword(input) {
        return Ok(LocationSpecifier::All);
    }

    let (node_part, interface_part) = split_location(input)?;
    let nodes = match parse_name_expr(node_part)? {
        NameExpr::All => NodeSpecifier::All,
        NameExpr::Names(names) => NodeSpecifier::Names(names),
        NameExpr::Regex(pattern) => NodeSpecifier::Regex(pattern),
    };

    let interfaces = match interface_part {
        None => return Ok(LocationSpecifier::Nodes { nodes }),
        Some(part) => match parse_name_expr(part)? {
            // node[all] is the same as node
            NameExpr::All => return Ok(LocationSpecifier::Nodes { nodes }),
            NameExpr::Names(names) => InterfaceSelector::Names(names),
            NameExpr::Regex(pattern) => InterfaceSelector::Regex(pattern),
        },
    };

    Ok(LocationSpecifier::Interfaces { nodes, interfaces })
}

/// Split `nodes[ifaces]` into its parts.
fn split_location(input: &str) -> Result<(&str, Option<&str>), String> {
    if input.starts_with('/') {
        return Ok(split_regex_location(input));
    }

    let node_end = input.find('[').unwrap_or(input.len());
    let (node_part, rest) = input.split_at(node_end);
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok((node_part, None));
    }

    let interfaces = rest
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .ok_or_else(|| format!("expected '[interfaces]' after node part, found '{}'", rest))?;
    Ok((node_part, Some(interfaces)))
}

/// A `/regex/` node part may contain `/` and brackets of its own. It ends at
/// the first `/[` where both the regex and the trailing `[...]` parse,
/// otherwise it runs to the end of the input.
fn split_regex_location(input: &str) -> (&str, Option<&str>) {
    if input.len() > 1 && input.ends_with('/') {
        return (input, None);
    }

    if let Some(body) = input.strip_suffix(']') {
        for (i, _) in body.match_indices("/[").filter(|(i, _)| *i > 0) {
            let (node_part, interfaces) = (&input[..=i], &body[i + 2..]);
            if parse_name_expr(node_part).is_ok() && parse_name_expr(interfaces).is_ok() {
                return (node_part, Some(interfaces));
            }
        }
    }

    // parse_name_expr reports the malformed regex
    (input, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(input: &str) -> SpecifierResult<LocationSpecifier> {
        FlexibleLocationSpecifierFactory::new().build_location_specifier(input)
    }

    #[test]
    fn test_all() {
        assert_eq!(build("all").unwrap(), LocationSpecifier::All);
        assert_eq!(build("*").unwrap(), LocationSpecifier::All);
    }

    #[test]
    fn test_node_locations() {
        assert_eq!(
            build("border1").unwrap(),
            LocationSpecifier::Nodes {
                nodes: NodeSpecifier::names(["border1"])
            }
        );
    }

    #[test]
    fn test_interface_locations() {
        assert_eq!(
            build("border1[GigabitEthernet0/0]").unwrap(),
            LocationSpecifier::Interfaces {
                nodes: NodeSpecifier::names(["border1"]),
                interfaces: InterfaceSelector::Names(
                    ["gigabitethernet0/0".to_string()].into_iter().collect()
                ),
            }
        );
    }

    #[test]
    fn test_regex_node_with_brackets() {
        assert_eq!(
            build("/core[0-9]/[/^eth/]").unwrap(),
            LocationSpecifier::Interfaces {
                nodes: NodeSpecifier::Regex("core[0-9]".to_string()),
                interfaces: InterfaceSelector::Regex("^eth".to_string()),
            }
        );
        assert_eq!(
            build("/core[0-9]/").unwrap(),
            LocationSpecifier::Nodes {
                nodes: NodeSpecifier::Regex("core[0-9]".to_string())
            }
        );
    }

    #[test]
    fn test_regex_node_with_slashes() {
        assert_eq!(
            build("/ge-0/0/").unwrap(),
            LocationSpecifier::Nodes {
                nodes: NodeSpecifier::Regex("ge-0/0".to_string())
            }
        );
        assert_eq!(
            build("/ge-0/0/[eth0]").unwrap(),
            LocationSpecifier::Interfaces {
                nodes: NodeSpecifier::Regex("ge-0/0".to_string()),
                interfaces: InterfaceSelector::Names(["eth0".to_string()].into_iter().collect()),
            }
        );
        assert_eq!(
            build("/a/[0-9]/[/^xe-1/0/]").unwrap(),
            LocationSpecifier::Interfaces {
                nodes: NodeSpecifier::Regex("a/[0-9]".to_string()),
                interfaces: InterfaceSelector::Regex("^xe-1/0".to_string()),
            }
        );
    }

    #[test]
    fn test_node_all_interfaces_collapses() {
        assert_eq!(
            build("edge[all]").unwrap(),
            LocationSpecifier::Nodes {
                nodes: NodeSpecifier::names(["edge"])
            }
        );
    }

    #[test]
    fn test_malformed() {
        for bad in ["", "edge[", "edge[]", "edge[eth0]x", "/core", "/core/x", "/"] {
            let err = build(bad).unwrap_err();
            assert_eq!(err.kind, SpecifierKind::Location, "input {:?}", bad);
            assert_eq!(err.raw, bad);
        }
    }
}
