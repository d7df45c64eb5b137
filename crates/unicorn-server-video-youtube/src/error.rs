// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the YouTube client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum YouTubeError {
	/// Transport failure. The request URL (which carries the API key) is
	/// stripped before storing.
	#[error("Network error: {0}")]
	Network(reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	/// Non-success status; `message` has the API key scrubbed.
	#[error("YouTube API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	#[error("Invalid response from YouTube: {0}")]
	InvalidResponse(String),

	/// The videos endpoint returned no item for the requested id.
	#[error("Video not found: {0}")]
	NotFound(String),
}

impl From<reqwest::Error> for YouTubeError {
	fn from(e: reqwest::Error) -> Self {
		if e.is_timeout() {
			return YouTubeError::Timeout;
		}
		YouTubeError::Network(e.without_url())
	}
}
