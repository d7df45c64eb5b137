// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! YouTube search and video detail proxy handlers.

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};
use serde::Deserialize;
use unicorn_content_core::VideoDetail;
use unicorn_server_video_youtube::{VideoSearchRequest, YouTubeError, DEFAULT_MAX_RESULTS};

use crate::{api::AppState, error::ServerError, routes::required_param};

const PROVIDER: &str = "YouTube";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeSearchParams {
	pub query: Option<String>,
	pub max_results: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTubeDetailsParams {
	pub video_id: Option<String>,
}

/// GET /api/youtube-search?query=&maxResults= - Relay a video search with
/// thumbnails upgraded to https.
pub async fn youtube_search(
	State(state): State<AppState>,
	params: Result<Query<YouTubeSearchParams>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
	let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
	let query = required_param(params.query, "query")?;

	let client = state
		.youtube_client
		.as_ref()
		.ok_or(ServerError::Unconfigured(PROVIDER))?;

	let request = VideoSearchRequest::new(query, params.max_results.unwrap_or(DEFAULT_MAX_RESULTS));
	tracing::debug!(
		query = %request.query,
		max_results = request.max_results,
		"youtube_search: calling YouTube"
	);

	let envelope = client.search(request).await.map_err(map_youtube_error)?;
	Ok(Json(envelope))
}

/// GET /api/youtube-details?videoId= - Look up one video.
pub async fn youtube_details(
	State(state): State<AppState>,
	params: Result<Query<YouTubeDetailsParams>, QueryRejection>,
) -> Result<Json<VideoDetail>, ServerError> {
	let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
	let video_id = required_param(params.video_id, "videoId")?;

	let client = state
		.youtube_client
		.as_ref()
		.ok_or(ServerError::Unconfigured(PROVIDER))?;

	tracing::debug!(video_id = %video_id, "youtube_details: calling YouTube");

	let detail = client
		.video_details(&video_id)
		.await
		.map_err(map_youtube_error)?;
	Ok(Json(detail))
}

fn map_youtube_error(e: YouTubeError) -> ServerError {
	match e {
		YouTubeError::ApiError { status, message } => ServerError::Upstream {
			provider: PROVIDER,
			status,
			details: message,
		},
		YouTubeError::NotFound(id) => ServerError::NotFound(format!("Video not found: {id}")),
		YouTubeError::Timeout => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: true,
			message: e.to_string(),
		},
		YouTubeError::Network(_) => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: false,
			message: e.to_string(),
		},
		YouTubeError::InvalidResponse(message) => ServerError::InvalidUpstreamResponse {
			provider: PROVIDER,
			message,
		},
	}
}
