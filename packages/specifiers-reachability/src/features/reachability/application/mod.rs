//! Application layer for reachability resolution

pub mod dispositions;
pub mod header_space;
pub mod ip_space_strategy;
pub mod path_constraints;
pub mod resolve_usecase;

pub use dispositions::resolve_dispositions;
pub use header_space::resolve_header_space;
pub use ip_space_strategy::{resolve_ip_spaces, IpSpaceSpecifiers};
pub use path_constraints::resolve_path_constraints;
pub use resolve_usecase::{ReachabilityUseCase, ReachabilityUseCaseImpl};
