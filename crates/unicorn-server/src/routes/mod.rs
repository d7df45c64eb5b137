// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod gemini;
pub mod health;
pub mod naver;
pub mod youtube;

use crate::error::ServerError;

/// Answer for a known path called with the wrong method.
pub async fn method_not_allowed() -> ServerError {
	ServerError::MethodNotAllowed
}

/// Answer for an unknown path.
pub async fn not_found() -> ServerError {
	ServerError::NotFound("No such route".to_string())
}

/// Trim a required parameter, rejecting it when absent or blank.
pub(crate) fn required_param(value: Option<String>, name: &str) -> Result<String, ServerError> {
	match value.map(|v| v.trim().to_string()) {
		Some(v) if !v.is_empty() => Ok(v),
		_ => Err(ServerError::BadRequest(format!("{name} parameter is required"))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_parameter_is_rejected() {
		assert!(required_param(None, "query").is_err());
		assert!(required_param(Some("   ".to_string()), "query").is_err());

		let err = required_param(Some(String::new()), "videoId").unwrap_err();
		assert!(err.to_string().contains("videoId"));
	}

	#[test]
	fn parameter_is_trimmed() {
		assert_eq!(
			required_param(Some("  평화 ".to_string()), "query").unwrap(),
			"평화"
		);
	}
}
