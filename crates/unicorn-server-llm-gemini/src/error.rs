// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
	#[error("Network error: {0}")]
	Network(reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	#[error("Gemini API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	#[error("Invalid response from Gemini: {0}")]
	InvalidResponse(String),
}

impl From<reqwest::Error> for GeminiError {
	fn from(e: reqwest::Error) -> Self {
		if e.is_timeout() {
			return GeminiError::Timeout;
		}
		// The key travels in the query string.
		GeminiError::Network(e.without_url())
	}
}
