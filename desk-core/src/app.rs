use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use crate::errors::{DeskError, DeskResult};
use crate::{DeskConfig, DeskConfigSnapshot, FindParams, SearchService, ServiceRegistry};

struct DeskAppInner {
    registry: RwLock<ServiceRegistry>,
    config: RwLock<DeskConfig>,
}

/// DeskApp is the central application container.
///
/// Transport-agnostic. Holds:
/// - service registry
/// - config
///
/// Cloning is cheap; clones share the same registry and config.
#[derive(Clone)]
pub struct DeskApp {
    inner: Arc<DeskAppInner>,
}

impl Default for DeskApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DeskApp {
    pub fn new() -> Self {
        Self::with_config(DeskConfig::new())
    }

    pub fn with_config(config: DeskConfig) -> Self {
        Self {
            inner: Arc::new(DeskAppInner {
                registry: RwLock::new(ServiceRegistry::new()),
                config: RwLock::new(config),
            }),
        }
    }

    pub fn register_service<S>(&self, name: S, service: Arc<dyn SearchService>)
    where
        S: Into<String>,
    {
        self.inner.registry.write().register(name, service);
    }

    /// Feathers: `app.service("name")`
    pub fn service(&self, name: &str) -> DeskResult<Arc<dyn SearchService>> {
        let found = self.inner.registry.read().get(name).cloned();
        found.ok_or_else(|| {
            DeskError::unknown_service(format!(
                "no service named {name:?} (known: {})",
                self.service_names().join(", ")
            ))
        })
    }

    pub fn service_names(&self) -> Vec<String> {
        self.inner.registry.read().names()
    }

    /// `app.service(name).find(params)` in one call.
    pub fn find(&self, name: &str, params: &FindParams) -> DeskResult<Vec<Value>> {
        self.service(name)?.find(params)
    }

    /// Feathers: `app.set(key, value)`
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.config.write().set(key, value);
    }

    /// Feathers: `app.get(key)`
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.config.read().get(key).map(|v| v.to_string())
    }

    pub fn config_snapshot(&self) -> DeskConfigSnapshot {
        self.inner.config.read().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorKind;
    use crate::source::CollectionKind;

    struct Echo;

    impl SearchService for Echo {
        fn collection(&self) -> CollectionKind {
            CollectionKind::Users
        }

        fn fields(&self) -> Vec<&'static str> {
            vec!["_id"]
        }

        fn find(&self, params: &FindParams) -> DeskResult<Vec<Value>> {
            Ok(vec![json!({ params.field.clone(): params.value })])
        }
    }

    #[test]
    fn find_dispatches_by_name() {
        let app = DeskApp::new();
        app.register_service("users", Arc::new(Echo));

        let out = app.find("users", &FindParams::new("_id", "1")).unwrap();
        assert_eq!(out, vec![json!({"_id": "1"})]);
    }

    #[test]
    fn unknown_service_lists_known_names() {
        let app = DeskApp::new();
        app.register_service("users", Arc::new(Echo));

        let err = app.service("people").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownService);
        assert!(err.message.contains("users"));
    }

    #[test]
    fn clones_share_config() {
        let app = DeskApp::new();
        let other = app.clone();
        other.set("data.users", "/tmp/users.json");

        assert_eq!(app.get("data.users").as_deref(), Some("/tmp/users.json"));
        assert_eq!(
            app.config_snapshot().get("data.users"),
            Some("/tmp/users.json")
        );
    }
}
