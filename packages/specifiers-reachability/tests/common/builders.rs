//! Test data builders

use specifiers_reachability::{
    PacketHeaderConstraints, PathConstraintsInput, QuestionOptions, SpecifiersReachabilityQuestion,
};

/// Builder for SpecifiersReachabilityQuestion
#[derive(Debug, Default)]
pub struct QuestionBuilder {
    options: QuestionOptions,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(mut self, expression: &str) -> Self {
        self.options.actions = Some(
            specifiers_reachability::DispositionSpecifier::parse(expression)
                .expect("fixture disposition expression"),
        );
        self
    }

    pub fn headers(mut self, headers: PacketHeaderConstraints) -> Self {
        self.options.headers = Some(headers);
        self
    }

    pub fn ignore_filters(mut self, ignore: bool) -> Self {
        self.options.ignore_filters = Some(ignore);
        self
    }

    pub fn max_traces(mut self, max_traces: i32) -> Self {
        self.options.max_traces = Some(max_traces);
        self
    }

    pub fn path(mut self, path: PathConstraintsInput) -> Self {
        self.options.path_constraints = Some(path);
        self
    }

    pub fn src_ips(mut self, expression: &str) -> Self {
        self.options.headers.get_or_insert_with(Default::default).src_ips =
            Some(expression.to_string());
        self
    }

    pub fn dst_ips(mut self, expression: &str) -> Self {
        self.options.headers.get_or_insert_with(Default::default).dst_ips =
            Some(expression.to_string());
        self
    }

    pub fn options(&self) -> QuestionOptions {
        self.options.clone()
    }

    pub fn build(self) -> SpecifiersReachabilityQuestion {
        SpecifiersReachabilityQuestion::new(self.options)
    }
}
