// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Gemini text generation proxy handler.

use axum::{
	extract::{rejection::JsonRejection, State},
	Json,
};
use unicorn_server_llm_gemini::{GeminiError, GenerateRequest};

use crate::{api::AppState, error::ServerError};

const PROVIDER: &str = "Gemini";
const MAX_OUTPUT_TOKENS_LIMIT: u32 = 8192;

/// POST /api/gemini-generate - Run one generation with the server's key.
///
/// Body: `{ "prompt": string, "maxOutputTokens"?: number }`. The response is
/// Gemini's envelope unchanged.
pub async fn gemini_generate(
	State(state): State<AppState>,
	body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ServerError> {
	let Json(mut request) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;

	if request.prompt.trim().is_empty() {
		tracing::warn!("gemini_generate: empty prompt");
		return Err(ServerError::BadRequest("prompt is required".to_string()));
	}
	request.max_output_tokens = request.max_output_tokens.clamp(1, MAX_OUTPUT_TOKENS_LIMIT);

	let client = state
		.gemini_client
		.as_ref()
		.ok_or(ServerError::Unconfigured(PROVIDER))?;

	tracing::debug!(
		model = client.model(),
		max_output_tokens = request.max_output_tokens,
		"gemini_generate: calling Gemini"
	);

	let envelope = client.generate(&request).await.map_err(map_gemini_error)?;
	Ok(Json(envelope))
}

fn map_gemini_error(e: GeminiError) -> ServerError {
	match e {
		GeminiError::ApiError { status, message } => ServerError::Upstream {
			provider: PROVIDER,
			status,
			details: message,
		},
		GeminiError::Timeout => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: true,
			message: e.to_string(),
		},
		GeminiError::Network(_) => ServerError::UpstreamUnreachable {
			provider: PROVIDER,
			timed_out: false,
			message: e.to_string(),
		},
		GeminiError::InvalidResponse(message) => ServerError::InvalidUpstreamResponse {
			provider: PROVIDER,
			message,
		},
	}
}
