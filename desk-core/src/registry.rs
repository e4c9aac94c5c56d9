use std::collections::BTreeMap;
use std::sync::Arc;

use crate::SearchService;

/// Maps collection names to search services.
///
/// Named services can be called from any transport (CLI, HTTP, jobs, ...).
#[derive(Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Arc<dyn SearchService>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            services: BTreeMap::new(),
        }
    }

    /// Register a service under a given name.
    pub fn register<S>(&mut self, name: S, service: Arc<dyn SearchService>)
    where
        S: Into<String>,
    {
        self.services.insert(name.into(), service);
    }

    /// Look up a service by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SearchService>> {
        self.services.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }
}
