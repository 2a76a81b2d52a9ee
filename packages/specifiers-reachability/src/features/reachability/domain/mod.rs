// Domain: reachability question and resolved parameters - Pure data

pub mod header_constraints;
pub mod parameters;
pub mod path_constraints;
pub mod question;

// Re-export for public API
pub use header_constraints::PacketHeaderConstraints;
pub use parameters::ReachabilityParameters;
pub use path_constraints::{PathConstraints, PathConstraintsInput, ALL_LOCATIONS};
pub use question::{Question, QuestionOptions, SpecifiersReachabilityQuestion, ACTIONS_FIELD};
