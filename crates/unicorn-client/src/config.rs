// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client configuration.

use unicorn_common_config::{load_secret_env, SecretEnvError, SecretString};

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Root URL of the proxy server.
	pub proxy_url: String,
	/// Shared passphrase that unlocks the teacher console. `None` keeps it locked.
	pub teacher_passphrase: Option<SecretString>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			proxy_url: DEFAULT_PROXY_URL.to_string(),
			teacher_passphrase: None,
		}
	}
}

impl ClientConfig {
	/// Read `UNICORN_PROXY_URL` and `UNICORN_TEACHER_PASSPHRASE` (or its
	/// `_FILE` variant).
	pub fn from_env() -> Result<Self, SecretEnvError> {
		let proxy_url = std::env::var("UNICORN_PROXY_URL")
			.ok()
			.filter(|v| !v.is_empty())
			.unwrap_or_else(|| DEFAULT_PROXY_URL.to_string());

		Ok(Self {
			proxy_url,
			teacher_passphrase: load_secret_env("UNICORN_TEACHER_PASSPHRASE")?,
		})
	}

	pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
		self.proxy_url = proxy_url.into();
		self
	}
}
