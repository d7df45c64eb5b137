// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core content types for Unicorn.
//!
//! Shared by the proxy server (which reshapes provider payloads) and the client
//! adapters (which normalize them and fall back to static tables).

pub mod records;
pub mod result;
pub mod sanitize;

pub use records::{
	LetterAnalysis, QuizQuestion, QuizSet, SearchResultItem, SearchResults, Sentiment,
	VideoDetail, VideoSummary, MAX_LETTER_THEMES,
};
pub use result::AdapterResult;
pub use sanitize::{
	secure_search_thumbnails, secure_thumbnail_url, strip_emphasis, video_thumbnail_url,
};
