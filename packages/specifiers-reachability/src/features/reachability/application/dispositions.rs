//! Disposition resolution
//!
//! Expands the symbolic action set and drops dispositions the engine
//! cannot search for.

use std::collections::BTreeSet;

use crate::config::ReachabilityConfig;
use crate::features::specifiers::DispositionSpecifier;
use crate::shared::models::Disposition;

/// Expanded, filtered action set, sorted and without duplicates
pub fn resolve_dispositions(
    actions: &DispositionSpecifier,
    config: &ReachabilityConfig,
) -> BTreeSet<Disposition> {
    let resolved: BTreeSet<Disposition> = actions
        .dispositions()
        .iter()
        .copied()
        .filter(|d| config.is_actionable(*d))
        .collect();

    tracing::trace!(
        expression = actions.expression(),
        resolved = resolved.len(),
        "resolved dispositions"
    );
    resolved
}
