// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Naver web search proxy handler.

use axum::{
	extract::{rejection::QueryRejection, Query, State},
	Json,
};
use serde::Deserialize;
use unicorn_server_search_naver::{NaverError, NaverSearchRequest};

use crate::{api::AppState, error::ServerError, routes::required_param};

const PROVIDER: &str = "Naver";

#[derive(Debug, Deserialize)]
pub struct NaverSearchParams {
	pub query: Option<String>,
}

/// GET /api/naver-search?query= - Relay a Naver web search.
pub async fn naver_search(
	State(state): State<AppState>,
	params: Result<Query<NaverSearchParams>, QueryRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
	let Query(params) = params.map_err(|e| ServerError::BadRequest(e.body_text()))?;
	let query = required_param(params.query, "query").inspect_err(|_| {
		tracing::warn!("naver_search: missing query");
	})?;

	let client = state
		.naver_client
		.as_ref()
		.ok_or(ServerError::Unconfigured(PROVIDER))?;

	tracing::debug!(query = %query, "naver_search: calling Naver");

	let envelope = client
		.search(NaverSearchRequest::new(query))
		.await
		.map_err(map_naver_error)?;

	Ok(Json(envelope))
}

fn map_naver_error(e: NaverError) -> ServerError {
	match e {
		NaverError::ApiError { status, message } => ServerError::Upstream {
			provider: PROVIDER,
			status,
			details: message,
		},
		NaverError::Timeout => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: true,
			message: e.to_string(),
		},
		NaverError::Network(_) => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: false,
			message: e.to_string(),
		},
		NaverError::InvalidResponse(message) => ServerError::InvalidUpstreamResponse {
			provider: PROVIDER,
			message,
		},
	}
}
