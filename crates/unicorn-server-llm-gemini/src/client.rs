// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gemini API client implementation.

use reqwest::{Client, Url};
use tracing::{debug, error, info, instrument, trace};
use unicorn_common_config::SecretString;

use crate::error::GeminiError;
use crate::types::{GeminiRequestBody, GenerateRequest};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
	http_client: Client,
	api_key: SecretString,
	model: String,
	base_url: String,
}

impl GeminiClient {
	pub fn new(api_key: SecretString, model: impl Into<String>) -> Result<Self, GeminiError> {
		let http_client =
			unicorn_common_http::client_with_timeout(unicorn_common_http::GENERATION_TIMEOUT)?;
		let model = model.into();

		info!(model = %model, "Initialized Gemini client");

		Ok(Self {
			http_client,
			api_key,
			model,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	fn generate_content_url(&self) -> Result<Url, GeminiError> {
		let mut url = Url::parse(&format!(
			"{}/{}:generateContent",
			self.base_url, self.model
		))
		.map_err(|e| GeminiError::InvalidResponse(format!("Invalid base URL: {e}")))?;
		url
			.query_pairs_mut()
			.append_pair("key", self.api_key.expose());
		Ok(url)
	}

	/// Run one generation and return Gemini's response envelope untouched.
	#[instrument(skip(self, request), fields(model = %self.model, max_output_tokens = request.max_output_tokens))]
	pub async fn generate(
		&self,
		request: &GenerateRequest,
	) -> Result<serde_json::Value, GeminiError> {
		let url = self.generate_content_url()?;
		let body = GeminiRequestBody::from(request);

		debug!(prompt_chars = request.prompt.chars().count(), "Sending request to Gemini");
		trace!(request = ?body, "Request payload");

		let response = self
			.http_client
			.post(url)
			.json(&body)
			.send()
			.await
			.map_err(|e| {
				let e = GeminiError::from(e);
				error!(error = %e, "Network error during Gemini request");
				e
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Gemini");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			let message = self.api_key.scrub(&body);
			error!(status = status.as_u16(), body = %message, "Gemini API error");
			return Err(GeminiError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		let text = response.text().await.map_err(|e| {
			let e = GeminiError::from(e);
			error!(error = %e, "Failed to read Gemini response body");
			e
		})?;
		trace!(body = %text, "Response body");

		serde_json::from_str(&text).map_err(|e| {
			error!(error = %e, "Failed to parse Gemini response");
			GeminiError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}
