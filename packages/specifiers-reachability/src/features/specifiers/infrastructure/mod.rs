// Infrastructure: flexible expression grammar
//
// - flexible_node: `all`, `/regex/`, `a, b, c`
// - flexible_location: node expression, optionally `node[iface]`
// - flexible_ip_space: universe / infer-from-location strategies

pub mod flexible_ip_space;
pub mod flexible_location;
pub mod flexible_node;
mod name_grammar;

pub use flexible_ip_space::{
    FlexibleInferFromLocationIpSpaceSpecifierFactory, FlexibleUniverseIpSpaceSpecifierFactory,
};
pub use flexible_location::FlexibleLocationSpecifierFactory;
pub use flexible_node::FlexibleNodeSpecifierFactory;
