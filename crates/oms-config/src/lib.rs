//! Configuration module for the OMS order-lifecycle engine.
//!
//! This module provides structures and utilities for managing the engine
//! configuration. It supports loading configuration from TOML files and
//! provides validation to ensure all required configuration values are
//! properly set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		let message = err.message().to_string();
		ConfigError::Parse(message)
	}
}

/// Main configuration structure for the order-lifecycle engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Configuration for the HTTP service.
	#[serde(default)]
	pub service: ServiceConfig,
	/// Configuration for the storage backend.
	#[serde(default)]
	pub storage: StorageConfig,
	/// Configuration for the notification backend.
	#[serde(default)]
	pub notification: NotificationConfig,
}

/// Configuration for the HTTP service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
	/// Host address to bind the server to.
	#[serde(default = "default_host")]
	pub host: String,
	/// Port to bind the server to.
	#[serde(default = "default_port")]
	pub port: u16,
}

impl Default for ServiceConfig {
	fn default() -> Self {
		Self {
			host: default_host(),
			port: default_port(),
		}
	}
}

fn default_host() -> String {
	"127.0.0.1".to_string()
}

fn default_port() -> u16 {
	8080
}

/// Configuration for the storage backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
	/// Which storage backend to use.
	#[serde(default = "default_storage_backend")]
	pub backend: String,
}

impl Default for StorageConfig {
	fn default() -> Self {
		Self {
			backend: default_storage_backend(),
		}
	}
}

fn default_storage_backend() -> String {
	"memory".to_string()
}

/// Configuration for the notification backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
	/// Which notification backend to use.
	#[serde(default = "default_notification_backend")]
	pub backend: String,
	/// Topic that order snapshots are published on.
	#[serde(default = "default_topic")]
	pub topic: String,
}

impl Default for NotificationConfig {
	fn default() -> Self {
		Self {
			backend: default_notification_backend(),
			topic: default_topic(),
		}
	}
}

fn default_notification_backend() -> String {
	"log".to_string()
}

fn default_topic() -> String {
	"orders".to_string()
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub async fn from_file(path: &str) -> Result<Self, ConfigError> {
		let contents = tokio::fs::read_to_string(path).await?;
		contents.parse()
	}

	/// Validates the configuration to ensure all required fields are
	/// properly set.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.service.host.is_empty() {
			return Err(ConfigError::Validation(
				"Service host cannot be empty".into(),
			));
		}
		if self.service.port == 0 {
			return Err(ConfigError::Validation(
				"Service port must be greater than 0".into(),
			));
		}
		match self.storage.backend.as_str() {
			"memory" => {}
			other => {
				return Err(ConfigError::Validation(format!(
					"Unknown storage backend '{}'",
					other
				)));
			}
		}
		match self.notification.backend.as_str() {
			"log" | "channel" => {}
			other => {
				return Err(ConfigError::Validation(format!(
					"Unknown notification backend '{}'",
					other
				)));
			}
		}
		if self.notification.topic.is_empty() {
			return Err(ConfigError::Validation(
				"Notification topic cannot be empty".into(),
			));
		}
		Ok(())
	}
}

/// Parses a configuration from a TOML string and validates it.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let config: Config = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}
}
