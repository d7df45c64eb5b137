// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request parameters for the Naver web search endpoint.

/// Naver accepts 1-100 results per page; the console shows ten.
pub const DEFAULT_DISPLAY: u32 = 10;
const MAX_DISPLAY: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
	/// Relevance.
	#[default]
	Similarity,
	Date,
}

impl SortOrder {
	pub fn as_param(self) -> &'static str {
		match self {
			SortOrder::Similarity => "sim",
			SortOrder::Date => "date",
		}
	}
}

#[derive(Debug, Clone)]
pub struct NaverSearchRequest {
	pub query: String,
	pub display: u32,
	pub start: u32,
	pub sort: SortOrder,
}

impl NaverSearchRequest {
	/// First page of relevance-sorted results for `query`.
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			display: DEFAULT_DISPLAY,
			start: 1,
			sort: SortOrder::Similarity,
		}
	}

	/// Set the page size, clamped to what Naver accepts.
	pub fn with_display(mut self, display: u32) -> Self {
		self.display = display.clamp(1, MAX_DISPLAY);
		self
	}
}
