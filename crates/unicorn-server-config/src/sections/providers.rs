// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! External provider credentials.
//!
//! Each provider is optional. A provider without credentials is reported as
//! unconfigured by the proxy route that needs it; the server still starts.

use serde::{Deserialize, Serialize};
use unicorn_common_config::SecretString;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfigLayer {
	#[serde(default)]
	pub naver: Option<NaverConfigLayer>,
	#[serde(default)]
	pub youtube: Option<YouTubeConfigLayer>,
	#[serde(default)]
	pub gemini: Option<GeminiConfigLayer>,
}

impl ProvidersConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if let Some(other_naver) = other.naver {
			self
				.naver
				.get_or_insert_with(Default::default)
				.merge(other_naver);
		}
		if let Some(other_youtube) = other.youtube {
			self
				.youtube
				.get_or_insert_with(Default::default)
				.merge(other_youtube);
		}
		if let Some(other_gemini) = other.gemini {
			self
				.gemini
				.get_or_insert_with(Default::default)
				.merge(other_gemini);
		}
	}

	pub fn finalize(self) -> ProvidersConfig {
		ProvidersConfig {
			naver: self.naver.map(|n| n.finalize()).unwrap_or_default(),
			youtube: self.youtube.map(|y| y.finalize()).unwrap_or_default(),
			gemini: self.gemini.map(|g| g.finalize()).unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaverConfigLayer {
	pub client_id: Option<String>,
	pub client_secret: Option<SecretString>,
}

impl NaverConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.client_id.is_some() {
			self.client_id = other.client_id;
		}
		if other.client_secret.is_some() {
			self.client_secret = other.client_secret;
		}
	}

	pub fn finalize(self) -> NaverConfig {
		NaverConfig {
			client_id: self.client_id,
			client_secret: self.client_secret,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YouTubeConfigLayer {
	pub api_key: Option<SecretString>,
}

impl YouTubeConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
	}

	pub fn finalize(self) -> YouTubeConfig {
		YouTubeConfig {
			api_key: self.api_key,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiConfigLayer {
	pub api_key: Option<SecretString>,
	pub model: Option<String>,
}

impl GeminiConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.model.is_some() {
			self.model = other.model;
		}
	}

	pub fn finalize(self) -> GeminiConfig {
		GeminiConfig {
			api_key: self.api_key,
			model: self.model,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
	#[serde(default)]
	pub naver: NaverConfig,
	#[serde(default)]
	pub youtube: YouTubeConfig,
	#[serde(default)]
	pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NaverConfig {
	pub client_id: Option<String>,
	pub client_secret: Option<SecretString>,
}

impl NaverConfig {
	/// Both halves of the credential pair are required.
	pub fn is_configured(&self) -> bool {
		self.client_id.is_some() && self.client_secret.is_some()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YouTubeConfig {
	pub api_key: Option<SecretString>,
}

impl YouTubeConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiConfig {
	pub api_key: Option<SecretString>,
	/// Falls back to the client's default model when unset.
	pub model: Option<String>,
}

impl GeminiConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use unicorn_common_config::Secret;

	#[test]
	fn naver_needs_both_halves() {
		let only_id = NaverConfig {
			client_id: Some("id".to_string()),
			client_secret: None,
		};
		assert!(!only_id.is_configured());

		let both = NaverConfig {
			client_id: Some("id".to_string()),
			client_secret: Some(Secret::new("secret".to_string())),
		};
		assert!(both.is_configured());
	}

	#[test]
	fn merge_keeps_unset_fields() {
		let mut base = ProvidersConfigLayer {
			gemini: Some(GeminiConfigLayer {
				api_key: Some(Secret::new("file-key".to_string())),
				model: Some("gemini-pro".to_string()),
			}),
			..Default::default()
		};
		base.merge(ProvidersConfigLayer {
			gemini: Some(GeminiConfigLayer {
				api_key: Some(Secret::new("env-key".to_string())),
				model: None,
			}),
			youtube: Some(YouTubeConfigLayer {
				api_key: Some(Secret::new("yt".to_string())),
			}),
			..Default::default()
		});

		let config = base.finalize();
		assert_eq!(config.gemini.api_key.unwrap().expose(), "env-key");
		assert_eq!(config.gemini.model.as_deref(), Some("gemini-pro"));
		assert!(config.youtube.is_configured());
		assert!(!config.naver.is_configured());
	}

	#[test]
	fn debug_output_redacts_credentials() {
		let config = ProvidersConfig {
			youtube: YouTubeConfig {
				api_key: Some(Secret::new("AIza-very-secret".to_string())),
			},
			..Default::default()
		};
		assert!(!format!("{config:?}").contains("AIza-very-secret"));
	}
}
