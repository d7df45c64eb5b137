// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};
use unicorn_common_config::load_secret_env_any;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	GeminiConfigLayer, HttpConfigLayer, LoggingConfigLayer, NaverConfigLayer, ProvidersConfigLayer,
	YouTubeConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source. A missing file is an empty layer.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/unicorn/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: `UNICORN_SERVER_<SECTION>_<FIELD>`. Provider credentials also
/// accept the bare names older deployments used (`NAVER_CLIENT_ID`,
/// `NAVER_CLIENT_SECRET`, `YOUTUBE_API_KEY`, `GEMINI_API_KEY`), and every
/// secret may be supplied through `<NAME>_FILE`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			logging: Some(load_logging_from_env()),
			providers: Some(load_providers_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_var_any(names: &[&str]) -> Option<String> {
	names.iter().find_map(|name| env_var(name))
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("UNICORN_SERVER_HOST"),
		port: env_u16("UNICORN_SERVER_PORT")?,
	})
}

fn load_logging_from_env() -> LoggingConfigLayer {
	LoggingConfigLayer {
		level: env_var("UNICORN_SERVER_LOG_LEVEL"),
	}
}

fn load_providers_from_env() -> Result<ProvidersConfigLayer, ConfigError> {
	let client_id = env_var_any(&["UNICORN_SERVER_NAVER_CLIENT_ID", "NAVER_CLIENT_ID"]);
	let client_secret =
		load_secret_env_any(&["UNICORN_SERVER_NAVER_CLIENT_SECRET", "NAVER_CLIENT_SECRET"])?;
	let naver = (client_id.is_some() || client_secret.is_some()).then(|| NaverConfigLayer {
		client_id,
		client_secret,
	});

	let youtube = load_secret_env_any(&["UNICORN_SERVER_YOUTUBE_API_KEY", "YOUTUBE_API_KEY"])?
		.map(|api_key| YouTubeConfigLayer {
			api_key: Some(api_key),
		});

	let gemini_key = load_secret_env_any(&["UNICORN_SERVER_GEMINI_API_KEY", "GEMINI_API_KEY"])?;
	let gemini_model = env_var("UNICORN_SERVER_GEMINI_MODEL");
	let gemini = (gemini_key.is_some() || gemini_model.is_some()).then(|| GeminiConfigLayer {
		api_key: gemini_key,
		model: gemini_model,
	});

	Ok(ProvidersConfigLayer {
		naver,
		youtube,
		gemini,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.providers.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let source = TomlSource::new("/nonexistent/unicorn.toml");
		let layer = source.load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn test_toml_source_parses_sections() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"
[http]
port = 8080

[providers.naver]
client_id = "naver-id"
client_secret = "naver-secret"

[providers.gemini]
model = "gemini-pro"
"#
		)
		.unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(layer.http.unwrap().port, Some(8080));

		let providers = layer.providers.unwrap();
		let naver = providers.naver.unwrap();
		assert_eq!(naver.client_id.as_deref(), Some("naver-id"));
		assert_eq!(naver.client_secret.unwrap().expose(), "naver-secret");
		assert_eq!(providers.gemini.unwrap().model.as_deref(), Some("gemini-pro"));
		assert!(providers.youtube.is_none());
	}

	#[test]
	fn test_toml_source_reports_parse_errors() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[http\nport = ").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}
}
