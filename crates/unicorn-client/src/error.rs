// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Adapter failure classification.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Why an adapter call did not produce live data.
///
/// The kind is decided where the failure happens; whether fallback content is
/// used depends only on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterErrorKind {
	/// A local precondition on the input failed. Nothing was sent.
	Validation,
	/// The proxy has no credentials for the provider.
	Unconfigured,
	/// Transport failure, timeout, or a 5xx/408/429 status.
	RequestFailed,
	/// Any other non-success status, such as a provider refusing the query.
	Rejected,
	/// The body was not the JSON we expected, or generated data was invalid.
	MalformedResponse,
	/// The provider answered successfully with nothing in it.
	EmptyResult,
	/// A generation envelope without candidate text.
	UnexpectedShape,
}

impl AdapterErrorKind {
	pub fn is_fallback_eligible(self) -> bool {
		matches!(
			self,
			AdapterErrorKind::Unconfigured
				| AdapterErrorKind::RequestFailed
				| AdapterErrorKind::MalformedResponse
				| AdapterErrorKind::EmptyResult
		)
	}
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AdapterError {
	pub kind: AdapterErrorKind,
	pub message: String,
}

impl AdapterError {
	pub fn new(kind: AdapterErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn validation(message: impl Into<String>) -> Self {
		Self::new(AdapterErrorKind::Validation, message)
	}

	pub fn malformed(message: impl Into<String>) -> Self {
		Self::new(AdapterErrorKind::MalformedResponse, message)
	}

	pub fn is_fallback_eligible(&self) -> bool {
		self.kind.is_fallback_eligible()
	}

	/// Classify a transport failure. The URL is dropped from the message.
	pub(crate) fn from_transport(operation: &str, e: reqwest::Error) -> Self {
		let detail = if e.is_timeout() {
			"request timed out".to_string()
		} else {
			e.without_url().to_string()
		};
		Self::new(
			AdapterErrorKind::RequestFailed,
			format!("{operation} failed: {detail}"),
		)
	}

	/// Classify a non-success proxy response from its status and body.
	pub(crate) fn from_status(operation: &str, status: StatusCode, body: &str) -> Self {
		let envelope: Option<ProxyErrorBody> = serde_json::from_str(body).ok();
		let code = envelope.as_ref().map(|e| e.error.as_str());

		let kind = match code {
			Some("unconfigured") => AdapterErrorKind::Unconfigured,
			Some("not_found") => AdapterErrorKind::EmptyResult,
			_ if status.is_server_error()
				|| status == StatusCode::REQUEST_TIMEOUT
				|| status == StatusCode::TOO_MANY_REQUESTS =>
			{
				AdapterErrorKind::RequestFailed
			}
			_ => AdapterErrorKind::Rejected,
		};

		let reason = envelope
			.map(|e| match e.details {
				Some(details) if !details.is_empty() => format!("{}: {details}", e.message),
				_ => e.message,
			})
			.unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());

		Self::new(
			kind,
			format!("{operation} failed: HTTP {}: {reason}", status.as_u16()),
		)
	}
}

/// The proxy's error envelope.
#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
	error: String,
	#[serde(default)]
	message: String,
	#[serde(default)]
	details: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn eligibility_is_decided_by_kind() {
		use AdapterErrorKind::*;
		for kind in [Unconfigured, RequestFailed, MalformedResponse, EmptyResult] {
			assert!(kind.is_fallback_eligible(), "{kind:?}");
		}
		for kind in [Validation, Rejected, UnexpectedShape] {
			assert!(!kind.is_fallback_eligible(), "{kind:?}");
		}
	}

	#[test]
	fn status_classification() {
		let body = r#"{"error":"upstream_error","message":"Naver API error","details":"blocked"}"#;
		let forbidden = AdapterError::from_status("search", StatusCode::FORBIDDEN, body);
		assert_eq!(forbidden.kind, AdapterErrorKind::Rejected);
		assert!(forbidden.message.contains("blocked"));

		let unconfigured = AdapterError::from_status(
			"search",
			StatusCode::INTERNAL_SERVER_ERROR,
			r#"{"error":"unconfigured","message":"Naver credentials are not configured"}"#,
		);
		assert_eq!(unconfigured.kind, AdapterErrorKind::Unconfigured);

		let gateway = AdapterError::from_status("search", StatusCode::BAD_GATEWAY, "<html>");
		assert_eq!(gateway.kind, AdapterErrorKind::RequestFailed);
		assert!(gateway.message.contains("Bad Gateway"));

		let limited = AdapterError::from_status("search", StatusCode::TOO_MANY_REQUESTS, "");
		assert_eq!(limited.kind, AdapterErrorKind::RequestFailed);

		let missing = AdapterError::from_status(
			"video detail",
			StatusCode::NOT_FOUND,
			r#"{"error":"not_found","message":"Video not found: x"}"#,
		);
		assert_eq!(missing.kind, AdapterErrorKind::EmptyResult);
	}
}
