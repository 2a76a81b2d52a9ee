// SpecifierFactories - the factory set a resolution runs against
//
// Built once at startup and passed in explicitly; there is no global
// registry. Cloning shares the same factory instances.

use std::fmt;
use std::sync::Arc;

use super::infrastructure::{
    FlexibleInferFromLocationIpSpaceSpecifierFactory, FlexibleLocationSpecifierFactory,
    FlexibleNodeSpecifierFactory, FlexibleUniverseIpSpaceSpecifierFactory,
};
use super::ports::{IpSpaceSpecifierFactory, LocationSpecifierFactory, NodeSpecifierFactory};

/// Location, node and source/destination address factories
#[derive(Clone)]
pub struct SpecifierFactories {
    location: Arc<dyn LocationSpecifierFactory>,
    node: Arc<dyn NodeSpecifierFactory>,
    source_ip_space: Arc<dyn IpSpaceSpecifierFactory>,
    destination_ip_space: Arc<dyn IpSpaceSpecifierFactory>,
}

impl SpecifierFactories {
    pub fn new(
        location: Arc<dyn LocationSpecifierFactory>,
        node: Arc<dyn NodeSpecifierFactory>,
        source_ip_space: Arc<dyn IpSpaceSpecifierFactory>,
        destination_ip_space: Arc<dyn IpSpaceSpecifierFactory>,
    ) -> Self {
        Self {
            location,
            node,
            source_ip_space,
            destination_ip_space,
        }
    }

    /// Flexible grammar; sources infer from location, destinations use the universe
    pub fn flexible() -> Self {
        Self::new(
            Arc::new(FlexibleLocationSpecifierFactory::new()),
            Arc::new(FlexibleNodeSpecifierFactory::new()),
            Arc::new(FlexibleInferFromLocationIpSpaceSpecifierFactory::new()),
            Arc::new(FlexibleUniverseIpSpaceSpecifierFactory::new()),
        )
    }

    pub fn location(&self) -> &dyn LocationSpecifierFactory {
        self.location.as_ref()
    }

    pub fn node(&self) -> &dyn NodeSpecifierFactory {
        self.node.as_ref()
    }

    pub fn source_ip_space(&self) -> &dyn IpSpaceSpecifierFactory {
        self.source_ip_space.as_ref()
    }

    pub fn destination_ip_space(&self) -> &dyn IpSpaceSpecifierFactory {
        self.destination_ip_space.as_ref()
    }
}

impl Default for SpecifierFactories {
    fn default() -> Self {
        Self::flexible()
    }
}

impl fmt::Debug for SpecifierFactories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecifierFactories")
            .field("location", &self.location.name())
            .field("node", &self.node.name())
            .field("source_ip_space", &self.source_ip_space.name())
            .field("destination_ip_space", &self.destination_ip_space.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::specifiers::ports::IpSpaceStrategy;

    #[test]
    fn test_flexible_strategies() {
        let factories = SpecifierFactories::flexible();
        assert_eq!(
            factories.source_ip_space().strategy(),
            IpSpaceStrategy::InferFromLocation
        );
        assert_eq!(
            factories.destination_ip_space().strategy(),
            IpSpaceStrategy::Universe
        );
    }

    #[test]
    fn test_debug_lists_factory_names() {
        let debug = format!("{:?}", SpecifierFactories::default());
        assert!(debug.contains("FlexibleLocationSpecifierFactory"));
        assert!(debug.contains("FlexibleUniverseIpSpaceSpecifierFactory"));
    }

    #[test]
    fn test_factories_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpecifierFactories>();
    }
}
