// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

/// Errors a proxy route can answer with.
///
/// No variant carries a credential: provider diagnostics are scrubbed before
/// they get here and transport errors have their URL stripped.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// A required parameter is missing or malformed.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	#[error("Method not allowed")]
	MethodNotAllowed,

	/// The named provider has no credentials in the server configuration.
	#[error("{0} is not configured on the server")]
	Unconfigured(&'static str),

	#[error("Not found: {0}")]
	NotFound(String),

	/// The provider answered with a non-success status, relayed as-is.
	#[error("{provider} returned status {status}")]
	Upstream {
		provider: &'static str,
		status: u16,
		details: String,
	},

	/// The provider could not be reached or did not answer in time.
	#[error("Failed to contact {provider}: {message}")]
	UpstreamUnreachable {
		provider: &'static str,
		timed_out: bool,
		message: String,
	},

	/// The provider answered 2xx with a body that is not JSON.
	#[error("Invalid response from {provider}: {message}")]
	InvalidUpstreamResponse {
		provider: &'static str,
		message: String,
	},

	#[error("Internal error: {0}")]
	Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
}

impl ErrorResponse {
	fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
			details: None,
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, body) = match &self {
			ServerError::BadRequest(msg) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse::new("bad_request", msg.clone()),
			),
			ServerError::MethodNotAllowed => (
				StatusCode::METHOD_NOT_ALLOWED,
				ErrorResponse::new("method_not_allowed", "Method not allowed"),
			),
			ServerError::Unconfigured(provider) => {
				tracing::error!(provider, "provider credentials not configured");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new(
						"unconfigured",
						format!("{provider} credentials are not configured on the server"),
					),
				)
			}
			ServerError::NotFound(what) => (
				StatusCode::NOT_FOUND,
				ErrorResponse::new("not_found", what.clone()),
			),
			ServerError::Upstream {
				provider,
				status,
				details,
			} => {
				tracing::warn!(provider, status, "relaying provider error status");
				let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
				(
					status,
					ErrorResponse {
						error: "upstream_error".to_string(),
						message: format!("{provider} API error"),
						details: Some(details.clone()),
					},
				)
			}
			ServerError::UpstreamUnreachable {
				provider,
				timed_out,
				message,
			} => {
				tracing::error!(provider, timed_out, error = %message, "provider unreachable");
				let status = if *timed_out {
					StatusCode::GATEWAY_TIMEOUT
				} else {
					StatusCode::BAD_GATEWAY
				};
				(
					status,
					ErrorResponse::new("upstream_unreachable", format!("Failed to contact {provider}")),
				)
			}
			ServerError::InvalidUpstreamResponse { provider, message } => {
				tracing::error!(provider, error = %message, "invalid provider response");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse::new("upstream_error", format!("Invalid response from {provider}")),
				)
			}
			ServerError::Internal(msg) => {
				tracing::error!(error = %msg, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("internal_error", "An internal error occurred"),
				)
			}
		};

		(status, Json(body)).into_response()
	}
}
