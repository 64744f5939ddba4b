use std::{
	net::{IpAddr, Ipv4Addr},
	str::FromStr,
};

use tracing::Level;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("{0} must be set")]
	Missing(&'static str),
	#[error("{name} has an invalid value {value:?}")]
	Invalid { name: &'static str, value: String },
}

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
	/// The PostgreSQL connection string.
	pub database_url: String,
	pub database_max_connections: u32,
	pub host: IpAddr,
	pub port: u16,
	pub log_level: Level,
}

impl Config {
	/// Reads the configuration from the process environment.
	///
	/// Call [`dotenvy::dotenv`] first to pick up a `.env` file.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|name| std::env::var(name).ok())
	}

	/// Reads the configuration using `lookup` to resolve variable names.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		Ok(Self {
			database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
			database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
			host: parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::LOCALHOST))?,
			port: parse_or(&lookup, "PORT", 3000)?,
			log_level: parse_or(&lookup, "LOG_LEVEL", Level::INFO)?,
		})
	}
}

fn parse_or<T: FromStr>(
	lookup: impl Fn(&str) -> Option<String>,
	name: &'static str,
	default: T,
) -> Result<T, ConfigError> {
	match lookup(name) {
		Some(value) => value
			.trim()
			.parse()
			.map_err(|_| ConfigError::Invalid { name, value }),
		None => Ok(default),
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use tracing::Level;

	use super::{Config, ConfigError};

	fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
		let vars = vars
			.iter()
			.map(|(k, v)| ((*k).to_string(), (*v).to_string()))
			.collect::<HashMap<_, _>>();

		Config::from_lookup(|name| vars.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config(&[("DATABASE_URL", "postgres://localhost/blog_cms")]).unwrap();

		assert_eq!(config.database_url, "postgres://localhost/blog_cms");
		assert_eq!(config.database_max_connections, 10);
		assert_eq!(config.host.to_string(), "127.0.0.1");
		assert_eq!(config.port, 3000);
		assert_eq!(config.log_level, Level::INFO);
	}

	#[test]
	fn test_overrides() {
		let config = config(&[
			("DATABASE_URL", "postgres://db/blog_cms"),
			("HOST", "0.0.0.0"),
			("PORT", "8080"),
			("DATABASE_MAX_CONNECTIONS", "4"),
			("LOG_LEVEL", "debug"),
		])
		.unwrap();

		assert_eq!(config.host.to_string(), "0.0.0.0");
		assert_eq!(config.port, 8080);
		assert_eq!(config.database_max_connections, 4);
		assert_eq!(config.log_level, Level::DEBUG);
	}

	#[test]
	fn test_missing_database_url() {
		assert!(matches!(
			config(&[]),
			Err(ConfigError::Missing("DATABASE_URL"))
		));
	}

	#[test]
	fn test_invalid_port() {
		let error = config(&[("DATABASE_URL", "postgres://db"), ("PORT", "http")]).unwrap_err();

		assert!(matches!(error, ConfigError::Invalid { name: "PORT", .. }));
	}
}
