// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct ProviderStatus {
	pub naver: bool,
	pub youtube: bool,
	pub gemini: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	/// Whether each provider has credentials; never the credentials themselves.
	pub providers: ProviderStatus,
}

/// GET /health - Liveness plus which providers are configured.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		providers: ProviderStatus {
			naver: state.naver_client.is_some(),
			youtube: state.youtube_client.is_some(),
			gemini: state.gemini_client.is_some(),
		},
	})
}
