// Mon Oct 19 2026 - Alex

use crate::utils::StringUtils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the text surrounding the generated accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub package: Option<String>,
    pub imports: Vec<String>,
    pub base_class: String,
    pub container_class: String,
    pub class_prefix: String,
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: None,
            imports: vec!["com.comphenix.protocol.events.PacketContainer".to_string()],
            base_class: "AbstractPacket".to_string(),
            container_class: "PacketContainer".to_string(),
            class_prefix: "Packet".to_string(),
            indent_width: 4,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn with_package(mut self, package: &str) -> Self {
        self.package = Some(package.to_string());
        self
    }

    pub fn with_import(mut self, import: &str) -> Self {
        self.imports.push(import.to_string());
        self
    }

    pub fn with_base_class(mut self, base_class: &str) -> Self {
        self.base_class = base_class.to_string();
        self
    }

    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base_class.trim().is_empty() {
            return Err("base_class must not be empty".to_string());
        }
        if self.container_class.trim().is_empty() {
            return Err("container_class must not be empty".to_string());
        }
        if self.indent_width == 0 {
            return Err("indent_width must be greater than 0".to_string());
        }
        if !StringUtils::is_valid_identifier(&self.class_prefix) {
            return Err(format!("class_prefix '{}' is not a valid identifier", self.class_prefix));
        }
        if let Some(package) = &self.package {
            if !package.split('.').all(StringUtils::is_valid_identifier) {
                return Err(format!("package '{}' is not a valid package name", package));
            }
        }
        Ok(())
    }
}
