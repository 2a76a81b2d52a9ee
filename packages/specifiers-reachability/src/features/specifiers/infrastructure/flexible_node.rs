// FlexibleNodeSpecifierFactory - node expressions

use super::name_grammar::{parse_name_expr, NameExpr};
use crate::features::specifiers::domain::{
    NodeSpecifier, SpecifierError, SpecifierKind, SpecifierResult,
};
use crate::features::specifiers::ports::NodeSpecifierFactory;

/// Parses `all`, `/regex/` and comma-separated node names
#[derive(Debug, Default, Clone, Copy)]
pub struct FlexibleNodeSpecifierFactory;

impl FlexibleNodeSpecifierFactory {
    pub const NAME: &'static str = "FlexibleNodeSpecifierFactory";

    pub fn new() -> Self {
        Self
    }
}

impl NodeSpecifierFactory for FlexibleNodeSpecifierFactory {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn build_node_specifier(&self, input: &str) -> SpecifierResult<NodeSpecifier> {
        let specifier = match parse_name_expr(input)
            .map_err(|reason| SpecifierError::new(SpecifierKind::Node, input, reason))?
        {
            NameExpr::All => NodeSpecifier::All,
            NameExpr::Names(names) => NodeSpecifier::Names(names),
            NameExpr::Regex(pattern) => NodeSpecifier::Regex(pattern),
        };
        tracing::trace!(input, ?specifier, "node specifier built");
        Ok(specifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_variants() {
        let factory = FlexibleNodeSpecifierFactory::new();
        assert_eq!(factory.build_node_specifier("all").unwrap(), NodeSpecifier::All);
        assert_eq!(
            factory.build_node_specifier("nodeA").unwrap(),
            NodeSpecifier::names(["nodea"])
        );
        assert_eq!(
            factory.build_node_specifier("/fw.*/").unwrap(),
            NodeSpecifier::Regex("fw.*".to_string())
        );
    }

    #[test]
    fn test_error_carries_raw_input() {
        let factory = FlexibleNodeSpecifierFactory::new();
        let err = factory.build_node_specifier("core[").unwrap_err();
        assert_eq!(err.kind, SpecifierKind::Node);
        assert_eq!(err.raw, "core[");
    }

    #[test]
    fn test_name() {
        assert_eq!(
            FlexibleNodeSpecifierFactory::new().name(),
            "FlexibleNodeSpecifierFactory"
        );
    }
}
