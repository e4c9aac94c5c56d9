//! # Desk Configuration
//!
//! A minimal string key/value store, in the spirit of Feathers'
//! `app.set()` / `app.get()`.
//!
//! ## Setting and reading values
//! ```rust
//! use desk_core::DeskConfig;
//! let mut config = DeskConfig::new();
//!
//! config.set("data.users", "fixtures/users.json");
//!
//! assert_eq!(config.get("data.users"), Some("fixtures/users.json"));
//! ```
//!
//! ## Environment overrides
//! `DeskConfig::load_env("DESK__")` maps `DESK__DATA__USERS=/srv/users.json`
//! to the key `data.users`.

use std::collections::HashMap;

pub const DATA_USERS: &str = "data.users";
pub const DATA_ORGANIZATIONS: &str = "data.organizations";
pub const DATA_TICKETS: &str = "data.tickets";

#[derive(Debug, Default)]
pub struct DeskConfig {
    values: HashMap<String, String>,
}

impl DeskConfig {
    /// Create an empty config store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Config pre-populated with the bundled snapshot locations.
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        config.set(DATA_USERS, "data/users.json");
        config.set(DATA_ORGANIZATIONS, "data/organizations.json");
        config.set(DATA_TICKETS, "data/tickets.json");
        config
    }

    /// Set a configuration key to a string value.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Get a configuration value by key.
    ///
    /// Returns None if the key is not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Check whether a key is present.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Apply every `PREFIX__A__B=value` from the process environment as `a.b`.
    pub fn load_env(&mut self, prefix: &str) {
        self.apply_env(prefix, std::env::vars());
    }

    pub(crate) fn apply_env<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                if !normalized.is_empty() {
                    self.set(normalized, value);
                }
            }
        }
    }

    pub fn snapshot(&self) -> DeskConfigSnapshot {
        DeskConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeskConfigSnapshot {
    map: HashMap<String, String>,
}

impl DeskConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(|v| v.parse::<usize>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.parse::<bool>().ok())
    }
}
