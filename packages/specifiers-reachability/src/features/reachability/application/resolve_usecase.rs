//! Resolve UseCase Implementation
//!
//! Turns a question into engine parameters. External callers should use
//! this UseCase rather than the individual resolvers.

use rayon::prelude::*;

use super::dispositions::resolve_dispositions;
use super::header_space::resolve_header_space;
use super::ip_space_strategy::resolve_ip_spaces;
use super::path_constraints::resolve_path_constraints;
use crate::config::ReachabilityConfig;
use crate::errors::Result;
use crate::features::reachability::domain::{ReachabilityParameters, SpecifiersReachabilityQuestion};
use crate::features::specifiers::SpecifierFactories;

/// Resolve UseCase Trait (Port)
///
/// Defines the contract for question resolution.
/// External callers should depend on this trait.
pub trait ReachabilityUseCase: Send + Sync {
    /// Resolve one question
    ///
    /// Fails on the first expression that cannot be parsed; no partial
    /// parameters are returned.
    fn resolve(&self, question: &SpecifiersReachabilityQuestion) -> Result<ReachabilityParameters>;

    /// Resolve a batch, one result per question, in input order
    fn resolve_all(
        &self,
        questions: &[SpecifiersReachabilityQuestion],
    ) -> Vec<Result<ReachabilityParameters>>;

    /// Parse question JSON and resolve it
    fn resolve_json(&self, json: &str) -> Result<ReachabilityParameters> {
        let question = SpecifiersReachabilityQuestion::from_json(json)?;
        self.resolve(&question)
    }
}

/// Resolve UseCase Implementation
#[derive(Debug, Clone, Default)]
pub struct ReachabilityUseCaseImpl {
    factories: SpecifierFactories,
    config: ReachabilityConfig,
}

impl ReachabilityUseCaseImpl {
    pub fn new(factories: SpecifierFactories, config: ReachabilityConfig) -> Self {
        Self { factories, config }
    }

    /// Default configuration with the given factories
    pub fn with_factories(factories: SpecifierFactories) -> Self {
        Self::new(factories, ReachabilityConfig::default())
    }

    pub fn factories(&self) -> &SpecifierFactories {
        &self.factories
    }

    pub fn config(&self) -> &ReachabilityConfig {
        &self.config
    }
}

impl ReachabilityUseCase for ReachabilityUseCaseImpl {
    fn resolve(&self, question: &SpecifiersReachabilityQuestion) -> Result<ReachabilityParameters> {
        let actions = resolve_dispositions(question.actions(), &self.config);
        let header_space = resolve_header_space(question.headers());
        let path = resolve_path_constraints(question.path_constraints(), &self.factories)?;
        let ip_spaces = resolve_ip_spaces(question.headers(), &path.start_location, &self.factories)?;

        if question.max_traces() <= 0 {
            tracing::warn!(
                max_traces = question.max_traces(),
                "non-positive maxTraces passed through to the engine"
            );
        }
        if actions.is_empty() {
            tracing::warn!(
                expression = question.actions().expression(),
                "no searchable dispositions left after exclusions"
            );
        }

        tracing::debug!(
            actions = actions.len(),
            transit = path.transit_locations.is_some(),
            forbidden = path.forbidden_locations.is_some(),
            ignore_filters = question.ignore_filters(),
            "resolved reachability parameters"
        );

        Ok(ReachabilityParameters {
            actions,
            header_space,
            source_ip_space_specifier: ip_spaces.source,
            destination_ip_space_specifier: ip_spaces.destination,
            source_location_specifier: path.start_location,
            final_nodes_specifier: path.end_location,
            required_transit_nodes_specifier: path.transit_locations,
            forbidden_transit_nodes_specifier: path.forbidden_locations,
            ignore_filters: question.ignore_filters(),
            max_traces: question.max_traces(),
            specialize: true,
        })
    }

    fn resolve_all(
        &self,
        questions: &[SpecifiersReachabilityQuestion],
    ) -> Vec<Result<ReachabilityParameters>> {
        questions.par_iter().map(|q| self.resolve(q)).collect()
    }
}
