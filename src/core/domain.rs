use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::gateway::GatewayLookupVia;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_LOOKUP_URL: &str = "https://openlibrary.org/api/books";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 5;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_name: String,
    pub data_file: PathBuf,
    pub bind_addr: String,
    pub lookup_via: GatewayLookupVia,
    pub lookup_url: String,
    pub lookup_timeout_secs: u64,
    pub log_json: bool,
}

impl Configuration {
    pub fn new(library_name: &str, data_file: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            data_file: PathBuf::from(data_file),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            lookup_via: GatewayLookupVia::OpenLibrary,
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            lookup_timeout_secs: DEFAULT_LOOKUP_TIMEOUT_SECS,
            log_json: false,
        }
    }

    // Reads LIBRARY_* variables from the process environment (and .env if present).
    pub fn from_env(library_name: &str, data_file: &str) -> Self {
        let _ = dotenv::dotenv();
        Self::from_source(library_name, data_file, |key| std::env::var(key).ok())
    }

    pub fn from_source<F>(library_name: &str, data_file: &str, var: F) -> Self
        where F: Fn(&str) -> Option<String> {
        let mut config = Configuration::new(library_name, data_file);
        if let Some(name) = non_blank(var("LIBRARY_NAME")) {
            config.library_name = name;
        }
        if let Some(file) = non_blank(var("LIBRARY_DATA_FILE")) {
            config.data_file = PathBuf::from(file);
        }
        if let Some(addr) = non_blank(var("LIBRARY_BIND_ADDR")) {
            config.bind_addr = addr;
        }
        if let Some(via) = non_blank(var("LIBRARY_LOOKUP")) {
            config.lookup_via = GatewayLookupVia::from(via);
        }
        if let Some(url) = non_blank(var("LIBRARY_LOOKUP_URL")) {
            config.lookup_url = url;
        }
        if let Some(secs) = non_blank(var("LIBRARY_LOOKUP_TIMEOUT_SECS")).and_then(|s| s.parse::<u64>().ok()) {
            config.lookup_timeout_secs = secs;
        }
        if let Some(json) = non_blank(var("LIBRARY_LOG_JSON")) {
            config.log_json = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayLookupVia;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test", "test.json");
        assert_eq!("test", config.library_name.as_str());
        assert_eq!(PathBuf::from("test.json"), config.data_file);
        assert_eq!("0.0.0.0:8000", config.bind_addr.as_str());
        assert_eq!(GatewayLookupVia::OpenLibrary, config.lookup_via);
        assert_eq!(Duration::from_secs(5), config.lookup_timeout());
        assert!(!config.log_json);
    }

    #[test]
    fn test_should_override_config_from_vars() {
        let vars = HashMap::from([
            ("LIBRARY_NAME", "City Library"),
            ("LIBRARY_DATA_FILE", "/tmp/city.json"),
            ("LIBRARY_BIND_ADDR", "127.0.0.1:9000"),
            ("LIBRARY_LOOKUP", "offline"),
            ("LIBRARY_LOOKUP_TIMEOUT_SECS", "2"),
            ("LIBRARY_LOG_JSON", "true"),
        ]);
        let config = Configuration::from_source("API Library", "api.json",
                                                |k| vars.get(k).map(|v| v.to_string()));
        assert_eq!("City Library", config.library_name.as_str());
        assert_eq!(PathBuf::from("/tmp/city.json"), config.data_file);
        assert_eq!("127.0.0.1:9000", config.bind_addr.as_str());
        assert_eq!(GatewayLookupVia::Offline, config.lookup_via);
        assert_eq!(2, config.lookup_timeout_secs);
        assert!(config.log_json);
    }

    #[test]
    fn test_should_ignore_invalid_timeout_and_blank_values() {
        let vars = HashMap::from([
            ("LIBRARY_NAME", "   "),
            ("LIBRARY_LOOKUP_TIMEOUT_SECS", "soon"),
        ]);
        let config = Configuration::from_source("API Library", "api.json",
                                                |k| vars.get(k).map(|v| v.to_string()));
        assert_eq!("API Library", config.library_name.as_str());
        assert_eq!(5, config.lookup_timeout_secs);
    }
}
