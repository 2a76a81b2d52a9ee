//! Path constraint resolution
//!
//! Start goes through the location factory, everything else through the
//! node factory. Transit and forbidden are only resolved when present.

use crate::errors::{ReachabilityError, Result};
use crate::features::reachability::domain::{PathConstraints, PathConstraintsInput};
use crate::features::specifiers::{NodeSpecifier, SpecifierFactories};

pub const START_LOCATION_FIELD: &str = "pathConstraints.startLocation";
pub const END_LOCATION_FIELD: &str = "pathConstraints.endLocation";
pub const TRANSIT_LOCATIONS_FIELD: &str = "pathConstraints.transitLocations";
pub const FORBIDDEN_LOCATIONS_FIELD: &str = "pathConstraints.forbiddenLocations";

pub fn resolve_path_constraints(
    input: &PathConstraintsInput,
    factories: &SpecifierFactories,
) -> Result<PathConstraints> {
    let start_location = factories
        .location()
        .build_location_specifier(&input.start_location)
        .map_err(|e| ReachabilityError::from_specifier(START_LOCATION_FIELD, e))?;

    let end_location = build_nodes(factories, END_LOCATION_FIELD, &input.end_location)?;

    let transit_locations = input
        .transit_locations
        .as_deref()
        .map(|expr| build_nodes(factories, TRANSIT_LOCATIONS_FIELD, expr))
        .transpose()?;

    let forbidden_locations = input
        .forbidden_locations
        .as_deref()
        .map(|expr| build_nodes(factories, FORBIDDEN_LOCATIONS_FIELD, expr))
        .transpose()?;

    Ok(PathConstraints {
        start_location,
        end_location,
        transit_locations,
        forbidden_locations,
    })
}

fn build_nodes(
    factories: &SpecifierFactories,
    field: &str,
    expression: &str,
) -> Result<NodeSpecifier> {
    factories
        .node()
        .build_node_specifier(expression)
        .map_err(|e| ReachabilityError::from_specifier(field, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::specifiers::LocationSpecifier;

    #[test]
    fn test_unconstrained() {
        let constraints = resolve_path_constraints(
            &PathConstraintsInput::unconstrained(),
            &SpecifierFactories::flexible(),
        )
        .unwrap();

        assert_eq!(constraints.start_location, LocationSpecifier::All);
        assert_eq!(constraints.end_location, NodeSpecifier::All);
        assert!(constraints.transit_locations.is_none());
        assert!(constraints.forbidden_locations.is_none());
    }

    #[test]
    fn test_transit_resolved_when_present() {
        let input = PathConstraintsInput::unconstrained().transit_locations("nodeA");
        let constraints =
            resolve_path_constraints(&input, &SpecifierFactories::flexible()).unwrap();

        assert_eq!(
            constraints.transit_locations,
            Some(NodeSpecifier::names(["nodeA"]))
        );
        assert!(constraints.forbidden_locations.is_none());
    }

    #[test]
    fn test_forbidden_all_is_not_absent() {
        let input = PathConstraintsInput::unconstrained().forbidden_locations("all");
        let constraints =
            resolve_path_constraints(&input, &SpecifierFactories::flexible()).unwrap();
        assert_eq!(constraints.forbidden_locations, Some(NodeSpecifier::All));
    }

    #[test]
    fn test_error_names_field() {
        let input = PathConstraintsInput::unconstrained().end_location("/[/");
        let err = resolve_path_constraints(&input, &SpecifierFactories::flexible()).unwrap_err();
        assert_eq!(err.field(), Some(END_LOCATION_FIELD));

        let input = PathConstraintsInput::unconstrained().start_location("   ");
        let err = resolve_path_constraints(&input, &SpecifierFactories::flexible()).unwrap_err();
        assert_eq!(err.field(), Some(START_LOCATION_FIELD));

        let input = PathConstraintsInput::unconstrained().forbidden_locations("");
        let err = resolve_path_constraints(&input, &SpecifierFactories::flexible()).unwrap_err();
        assert_eq!(err.field(), Some(FORBIDDEN_LOCATIONS_FIELD));
    }
}
