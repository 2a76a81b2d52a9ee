//! Custom assertions for resolved parameters

use specifiers_reachability::{ReachabilityError, ReachabilityParameters, Result};

/// Assert the action set is strictly increasing (sorted, no duplicates)
pub fn assert_actions_sorted_unique(params: &ReachabilityParameters) {
    let actions: Vec<_> = params.actions().iter().collect();
    assert!(
        actions.windows(2).all(|w| w[0] < w[1]),
        "Expected sorted unique actions, got: {:?}",
        actions
    );
}

/// Assert resolution failed on the given field with the given raw expression
pub fn assert_invalid_field(result: Result<ReachabilityParameters>, field: &str, raw: &str) {
    match result {
        Err(ReachabilityError::InvalidSpecifier {
            field: actual_field,
            raw: actual_raw,
            ..
        }) => {
            assert_eq!(actual_field, field);
            assert_eq!(actual_raw, raw);
        }
        other => panic!("Expected InvalidSpecifier on {field}, got: {other:?}"),
    }
}
