// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client for the Unicorn proxy.
//!
//! The capability operations live in their own modules ([`crate::search`],
//! [`crate::video`], [`crate::quiz`], [`crate::letter`]) as `impl` blocks on
//! [`UnicornClient`].

use reqwest::{Client, Response};
use serde::Serialize;
use tracing::{debug, error, warn};
use unicorn_common_http::{GENERATION_TIMEOUT, LOOKUP_TIMEOUT};
use unicorn_content_core::AdapterResult;

use crate::config::ClientConfig;
use crate::error::AdapterError;

/// Talks to the proxy; holds no provider credentials.
#[derive(Debug, Clone)]
pub struct UnicornClient {
	http_client: Client,
	base_url: String,
}

impl UnicornClient {
	pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		debug!(base_url = %base_url, "creating UnicornClient");
		Ok(Self {
			http_client: unicorn_common_http::client_with_timeout(GENERATION_TIMEOUT)?,
			base_url,
		})
	}

	pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
		Self::new(config.proxy_url.clone())
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn url(&self, path: &str) -> String {
		format!("{}{path}", self.base_url)
	}

	/// GET a lookup route. Lookups use the shorter timeout.
	pub(crate) async fn get_json(
		&self,
		operation: &str,
		path: &str,
		query: &[(&str, &str)],
	) -> Result<serde_json::Value, AdapterError> {
		debug!(operation, path, "sending request to proxy");

		let response = self
			.http_client
			.get(self.url(path))
			.query(query)
			.timeout(LOOKUP_TIMEOUT)
			.send()
			.await
			.map_err(|e| AdapterError::from_transport(operation, e))?;

		read_json(operation, response).await
	}

	/// POST a JSON body to a generation route.
	pub(crate) async fn post_json<B: Serialize + ?Sized>(
		&self,
		operation: &str,
		path: &str,
		body: &B,
	) -> Result<serde_json::Value, AdapterError> {
		debug!(operation, path, "sending request to proxy");

		let response = self
			.http_client
			.post(self.url(path))
			.json(body)
			.send()
			.await
			.map_err(|e| AdapterError::from_transport(operation, e))?;

		read_json(operation, response).await
	}
}

async fn read_json(operation: &str, response: Response) -> Result<serde_json::Value, AdapterError> {
	let status = response.status();
	debug!(operation, status = %status, "received response from proxy");

	let body = response
		.text()
		.await
		.map_err(|e| AdapterError::from_transport(operation, e))?;

	if !status.is_success() {
		return Err(AdapterError::from_status(operation, status, &body));
	}

	serde_json::from_str(&body)
		.map_err(|e| AdapterError::malformed(format!("{operation} failed: invalid JSON: {e}")))
}

/// Turn an adapter outcome into the caller-facing envelope, substituting
/// `fallback()` for eligible failures.
pub(crate) fn settle<T>(
	operation: &'static str,
	outcome: Result<T, AdapterError>,
	fallback: impl FnOnce() -> T,
) -> AdapterResult<T> {
	match outcome {
		Ok(data) => AdapterResult::live(data),
		Err(e) if e.is_fallback_eligible() => {
			warn!(operation, kind = ?e.kind, error = %e, "live call failed, using fallback data");
			AdapterResult::fallback(fallback())
		}
		Err(e) => {
			error!(operation, kind = ?e.kind, error = %e, "adapter call failed");
			AdapterResult::failure(e.message)
		}
	}
}
