// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Reading-material search.

use serde::Deserialize;
use tracing::instrument;
use unicorn_content_core::{strip_emphasis, AdapterResult, SearchResultItem, SearchResults};

use crate::client::{settle, UnicornClient};
use crate::error::AdapterError;
use crate::fallback;

const OPERATION: &str = "content search";
const SEARCH_PATH: &str = "/api/naver-search";

#[derive(Debug, Deserialize)]
struct NaverEnvelope {
	#[serde(default)]
	items: Vec<NaverItem>,
}

#[derive(Debug, Deserialize)]
struct NaverItem {
	#[serde(default)]
	title: String,
	#[serde(default)]
	description: String,
	#[serde(default)]
	link: String,
}

impl From<NaverItem> for SearchResultItem {
	fn from(item: NaverItem) -> Self {
		SearchResultItem {
			title: strip_emphasis(&item.title),
			description: strip_emphasis(&item.description),
			link: item.link,
		}
	}
}

/// Map the provider envelope, removing emphasis markup. A missing or empty
/// item list is an empty result, not a failure.
fn normalize(envelope: serde_json::Value) -> Result<SearchResults, AdapterError> {
	let envelope: NaverEnvelope = serde_json::from_value(envelope)
		.map_err(|e| AdapterError::malformed(format!("{OPERATION} failed: unexpected response: {e}")))?;

	Ok(SearchResults {
		items: envelope.items.into_iter().map(SearchResultItem::from).collect(),
	})
}

impl UnicornClient {
	/// Search web documents about unification education.
	#[instrument(skip(self))]
	pub async fn search_unification_content(&self, query: &str) -> AdapterResult<SearchResults> {
		let outcome = self
			.get_json(OPERATION, SEARCH_PATH, &[("query", query)])
			.await
			.and_then(normalize);

		settle(OPERATION, outcome, fallback::search_results)
	}
}
