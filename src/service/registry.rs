//! Service registry.
//!
//! # Design Decisions
//! - Ordered, append-only during startup; frozen once the server runs
//! - Endpoint slugs are not deduplicated here; colliding endpoints are
//!   the dispatcher's ambiguity case, not a registration error

use std::sync::Arc;

use super::{PageService, Service};

/// Ordered collection of page services.
#[derive(Debug, Default)]
pub struct Registry {
    services: Vec<Arc<PageService>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a service. Registration order is preserved.
    pub fn register(&mut self, service: PageService) {
        tracing::info!(endpoint = %service.endpoint(), "Adding service endpoint");
        self.services.push(Arc::new(service));
    }

    pub fn services(&self) -> &[Arc<PageService>] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::builder::PageServiceBuilder;

    #[test]
    fn registration_preserves_order() {
        let mut registry = Registry::new();
        registry.register(PageServiceBuilder::new().title("Blender Farm").build());
        registry.register(PageServiceBuilder::new().title("Adder").build());

        let endpoints: Vec<String> =
            registry.services().iter().map(|s| s.endpoint()).collect();
        assert_eq!(endpoints, vec!["blender-farm", "adder"]);
    }

    #[test]
    fn colliding_endpoints_are_allowed() {
        let mut registry = Registry::new();
        registry.register(PageServiceBuilder::new().title("Same Name").build());
        registry.register(PageServiceBuilder::new().title("same name").build());
        assert_eq!(registry.len(), 2);
    }
}
