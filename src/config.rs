//! Configuration for the employee service
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{EmployeeError, Result};

/// Main configuration for a service instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for all data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── employees.json             (collection file)
    ///     └── employee-id-sequence.txt   (counter file)
    pub data_dir: PathBuf,

    /// File name of the collection file inside `data_dir`
    pub collection_file: String,

    /// File name of the counter file inside `data_dir`
    pub counter_file: String,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./employee_data"),
            collection_file: "employees.json".to_string(),
            counter_file: "employee-id-sequence.txt".to_string(),
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the collection file
    pub fn collection_path(&self) -> PathBuf {
        self.data_dir.join(&self.collection_file)
    }

    /// Full path of the counter file
    pub fn counter_path(&self) -> PathBuf {
        self.data_dir.join(&self.counter_file)
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            EmployeeError::Config(format!("invalid listen address `{}`: {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for all storage)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the collection file name
    pub fn collection_file(mut self, name: impl Into<String>) -> Self {
        self.config.collection_file = name.into();
        self
    }

    /// Set the counter file name
    pub fn counter_file(mut self, name: impl Into<String>) -> Self {
        self.config.counter_file = name.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
