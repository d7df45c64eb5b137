// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Naver web search API client implementation.

use reqwest::{Client, Url};
use tracing::{debug, error, instrument, trace};
use unicorn_common_config::SecretString;

use crate::error::NaverError;
use crate::types::NaverSearchRequest;

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/v1/search/webkr";

/// Client for the Naver web document search API.
#[derive(Debug, Clone)]
pub struct NaverClient {
	http_client: Client,
	client_id: String,
	client_secret: SecretString,
	base_url: String,
}

impl NaverClient {
	/// Creates a client for the given credential pair.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: SecretString,
	) -> Result<Self, NaverError> {
		let http_client =
			unicorn_common_http::client_with_timeout(unicorn_common_http::LOOKUP_TIMEOUT)?;

		Ok(Self {
			http_client,
			client_id: client_id.into(),
			client_secret,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Point the client at a different endpoint (tests use a mock server).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Run a search and return Naver's envelope untouched.
	#[instrument(skip(self), fields(query = %request.query, display = request.display))]
	pub async fn search(
		&self,
		request: NaverSearchRequest,
	) -> Result<serde_json::Value, NaverError> {
		let mut url = Url::parse(&self.base_url)
			.map_err(|e| NaverError::InvalidResponse(format!("Invalid base URL: {e}")))?;

		url
			.query_pairs_mut()
			.append_pair("query", &request.query)
			.append_pair("display", &request.display.to_string())
			.append_pair("start", &request.start.to_string())
			.append_pair("sort", request.sort.as_param());

		debug!(url = %self.base_url, "Sending search request to Naver");

		let response = self
			.http_client
			.get(url)
			.header("X-Naver-Client-Id", &self.client_id)
			.header("X-Naver-Client-Secret", self.client_secret.expose())
			.send()
			.await
			.map_err(|e| {
				let e = NaverError::from(e);
				error!(error = %e, "Network error during Naver request");
				e
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Naver");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			let message = self.client_secret.scrub(&body);
			error!(status = status.as_u16(), body = %message, "Naver API error");
			return Err(NaverError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		let body = response.text().await.map_err(|e| {
			let e = NaverError::from(e);
			error!(error = %e, "Failed to read Naver response body");
			e
		})?;

		trace!(body = %body, "Response body");

		let envelope: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Naver response");
			NaverError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			result_count = envelope
				.get("items")
				.and_then(|items| items.as_array())
				.map(Vec::len)
				.unwrap_or(0),
			"Search completed successfully"
		);

		Ok(envelope)
	}
}
