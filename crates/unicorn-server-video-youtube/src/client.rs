// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! YouTube Data API v3 client implementation.

use reqwest::{Client, Response, Url};
use tracing::{debug, error, instrument, trace};
use unicorn_common_config::SecretString;
use unicorn_content_core::{secure_search_thumbnails, VideoDetail};

use crate::error::YouTubeError;
use crate::types::{VideoListResponse, VideoSearchRequest};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the YouTube Data API search and videos endpoints.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
	http_client: Client,
	api_key: SecretString,
	base_url: String,
}

impl YouTubeClient {
	pub fn new(api_key: SecretString) -> Result<Self, YouTubeError> {
		let http_client =
			unicorn_common_http::client_with_timeout(unicorn_common_http::LOOKUP_TIMEOUT)?;

		Ok(Self {
			http_client,
			api_key,
			base_url: DEFAULT_BASE_URL.to_string(),
		})
	}

	/// Set the API root; `/search` and `/videos` are appended to it.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into().trim_end_matches('/').to_string();
		self
	}

	fn endpoint(&self, resource: &str) -> Result<Url, YouTubeError> {
		Url::parse(&format!("{}/{resource}", self.base_url))
			.map_err(|e| YouTubeError::InvalidResponse(format!("Invalid base URL: {e}")))
	}

	/// Search for Korean-language, strictly safe videos. Returns the provider's
	/// envelope with every thumbnail URL rewritten to https.
	#[instrument(skip(self), fields(query = %request.query, max_results = request.max_results))]
	pub async fn search(
		&self,
		request: VideoSearchRequest,
	) -> Result<serde_json::Value, YouTubeError> {
		let mut url = self.endpoint("search")?;
		url
			.query_pairs_mut()
			.append_pair("part", "snippet")
			.append_pair("q", &request.query)
			.append_pair("type", "video")
			.append_pair("maxResults", &request.max_results.to_string())
			.append_pair("relevanceLanguage", "ko")
			.append_pair("safeSearch", "strict")
			.append_pair("key", self.api_key.expose());

		debug!("Sending video search request to YouTube");

		let body = self.fetch(url).await?;
		let mut envelope: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse YouTube search response");
			YouTubeError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		secure_search_thumbnails(&mut envelope);

		debug!(
			result_count = envelope
				.get("items")
				.and_then(|items| items.as_array())
				.map(Vec::len)
				.unwrap_or(0),
			"Video search completed successfully"
		);

		Ok(envelope)
	}

	/// Look up one video with its statistics and duration.
	#[instrument(skip(self))]
	pub async fn video_details(&self, video_id: &str) -> Result<VideoDetail, YouTubeError> {
		let mut url = self.endpoint("videos")?;
		url
			.query_pairs_mut()
			.append_pair("part", "snippet,contentDetails,statistics")
			.append_pair("id", video_id)
			.append_pair("key", self.api_key.expose());

		debug!("Sending video detail request to YouTube");

		let body = self.fetch(url).await?;
		let list: VideoListResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse YouTube videos response");
			YouTubeError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		let Some(resource) = list.items.into_iter().next() else {
			debug!("YouTube returned no video for id");
			return Err(YouTubeError::NotFound(video_id.to_string()));
		};

		Ok(resource.into_detail(video_id))
	}

	/// GET `url`, returning the body on success. The URL carries the key, so it
	/// is never logged.
	async fn fetch(&self, url: Url) -> Result<String, YouTubeError> {
		let response = self.http_client.get(url).send().await.map_err(|e| {
			let e = YouTubeError::from(e);
			error!(error = %e, "Network error during YouTube request");
			e
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from YouTube");

		if !status.is_success() {
			return Err(self.api_error(response).await);
		}

		let body = response.text().await.map_err(|e| {
			let e = YouTubeError::from(e);
			error!(error = %e, "Failed to read YouTube response body");
			e
		})?;
		trace!(body = %body, "Response body");
		Ok(body)
	}

	async fn api_error(&self, response: Response) -> YouTubeError {
		let status = response.status().as_u16();
		let body = response.text().await.unwrap_or_default();
		let message = self.api_key.scrub(&body);
		error!(status, body = %message, "YouTube API error");
		YouTubeError::ApiError { status, message }
	}
}
