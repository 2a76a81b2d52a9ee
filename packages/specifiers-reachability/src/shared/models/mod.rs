//! Shared models: dispositions, header space, address space

pub mod disposition;
pub mod header_space;
pub mod integer_space;
pub mod ip_space;

pub use disposition::Disposition;
pub use header_space::{Application, ApplicationDefinition, HeaderSpace, IpProtocol, TcpFlagsMatch};
pub use integer_space::{IntegerSpace, SubRange};
pub use ip_space::{IpSpace, IpSpaceEntry};
