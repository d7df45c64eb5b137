// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gemini `generateContent` request types.

use serde::{Deserialize, Serialize};

/// Output budget used when a caller does not name one.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// A single-turn text generation request, as accepted by the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
	pub prompt: String,
	#[serde(default = "default_max_output_tokens")]
	pub max_output_tokens: u32,
}

fn default_max_output_tokens() -> u32 {
	DEFAULT_MAX_OUTPUT_TOKENS
}

impl GenerateRequest {
	pub fn new(prompt: impl Into<String>, max_output_tokens: u32) -> Self {
		Self {
			prompt: prompt.into(),
			max_output_tokens,
		}
	}
}

/// Sampling settings. Low temperature keeps quiz and feedback output stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
	pub temperature: f32,
	pub top_k: u32,
	pub top_p: f32,
	pub max_output_tokens: u32,
}

impl GenerationConfig {
	pub fn with_max_output_tokens(max_output_tokens: u32) -> Self {
		Self {
			temperature: 0.2,
			top_k: 40,
			top_p: 0.95,
			max_output_tokens,
		}
	}
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Part {
	pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Content {
	pub parts: Vec<Part>,
}

/// Wire body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiRequestBody {
	pub contents: Vec<Content>,
	pub generation_config: GenerationConfig,
}

impl From<&GenerateRequest> for GeminiRequestBody {
	fn from(request: &GenerateRequest) -> Self {
		Self {
			contents: vec![Content {
				parts: vec![Part {
					text: request.prompt.clone(),
				}],
			}],
			generation_config: GenerationConfig::with_max_output_tokens(request.max_output_tokens),
		}
	}
}
