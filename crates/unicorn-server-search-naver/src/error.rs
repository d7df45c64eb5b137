// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Naver search client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NaverError {
	/// Transport failure. The request URL is stripped before storing.
	#[error("Network error: {0}")]
	Network(reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	/// Naver answered with a non-success status. `message` is the provider's
	/// diagnostic body with credentials scrubbed.
	#[error("Naver API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	#[error("Invalid response from Naver: {0}")]
	InvalidResponse(String),
}

impl From<reqwest::Error> for NaverError {
	fn from(e: reqwest::Error) -> Self {
		if e.is_timeout() {
			return NaverError::Timeout;
		}
		NaverError::Network(e.without_url())
	}
}
