// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request parameters and wire types for the YouTube Data API.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use unicorn_content_core::{video_thumbnail_url, VideoDetail, VideoSummary};

/// Results per search page when the caller does not ask for a count.
pub const DEFAULT_MAX_RESULTS: u32 = 8;
/// The search endpoint rejects anything above this.
pub const MAX_RESULTS_LIMIT: u32 = 50;

#[derive(Debug, Clone)]
pub struct VideoSearchRequest {
	pub query: String,
	pub max_results: u32,
}

impl VideoSearchRequest {
	/// `max_results` is clamped to 1..=50.
	pub fn new(query: impl Into<String>, max_results: u32) -> Self {
		Self {
			query: query.into(),
			max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
		}
	}
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
	#[serde(default)]
	pub items: Vec<VideoResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoResource {
	pub id: String,
	pub snippet: VideoSnippet,
	#[serde(default)]
	pub statistics: VideoStatistics,
	pub content_details: VideoContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoSnippet {
	pub title: String,
	#[serde(default)]
	pub description: String,
	pub channel_title: String,
	pub published_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoStatistics {
	/// Hidden by some channels.
	#[serde(default)]
	pub view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoContentDetails {
	pub duration: String,
}

impl VideoResource {
	/// Reshape into the record the video page consumes. The thumbnail is the
	/// canonical https high-quality frame for `requested_id`.
	pub(crate) fn into_detail(self, requested_id: &str) -> VideoDetail {
		VideoDetail {
			summary: VideoSummary {
				id: self.id,
				title: self.snippet.title,
				description: self.snippet.description,
				thumbnail_url: video_thumbnail_url(requested_id),
				channel_title: self.snippet.channel_title,
				published_at: self.snippet.published_at,
			},
			view_count: self.statistics.view_count.unwrap_or_else(|| "0".to_string()),
			duration: self.content_details.duration,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn default_page_size() {
		let request = VideoSearchRequest::new("평화", DEFAULT_MAX_RESULTS);
		assert_eq!(request.max_results, 8);
	}

	#[test]
	fn reshapes_video_resource() {
		let list: VideoListResponse = serde_json::from_value(json!({
			"items": [{
				"id": "Hhn7UiRa41M",
				"snippet": {
					"title": "통일 이야기",
					"description": "애니메이션",
					"channelTitle": "통일부 통일교육원",
					"publishedAt": "2023-06-25T09:00:00Z"
				},
				"statistics": { "viewCount": "15243" },
				"contentDetails": { "duration": "PT5M32S" }
			}]
		}))
		.unwrap();

		let detail = list.items.into_iter().next().unwrap().into_detail("Hhn7UiRa41M");
		assert_eq!(detail.summary.id, "Hhn7UiRa41M");
		assert_eq!(
			detail.summary.thumbnail_url,
			"https://i.ytimg.com/vi/Hhn7UiRa41M/hqdefault.jpg"
		);
		assert_eq!(detail.view_count, "15243");
		assert_eq!(detail.duration, "PT5M32S");
	}

	#[test]
	fn hidden_view_count_defaults_to_zero() {
		let resource: VideoResource = serde_json::from_value(json!({
			"id": "x",
			"snippet": {
				"title": "t",
				"channelTitle": "c",
				"publishedAt": "2023-01-01T00:00:00Z"
			},
			"statistics": {},
			"contentDetails": { "duration": "PT1M" }
		}))
		.unwrap();

		assert_eq!(resource.into_detail("x").view_count, "0");
	}

	proptest! {
		#[test]
		fn max_results_is_clamped(n in 0u32..500) {
			let request = VideoSearchRequest::new("q", n);
			prop_assert!((1..=MAX_RESULTS_LIMIT).contains(&request.max_results));
		}
	}
}
