// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Video search and video detail.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;
use unicorn_content_core::{
	secure_thumbnail_url, video_thumbnail_url, AdapterResult, VideoDetail, VideoSummary,
};

use crate::client::{settle, UnicornClient};
use crate::error::{AdapterError, AdapterErrorKind};
use crate::fallback;

const SEARCH_OPERATION: &str = "video search";
const DETAIL_OPERATION: &str = "video detail";
const SEARCH_PATH: &str = "/api/youtube-search";
const DETAIL_PATH: &str = "/api/youtube-details";

/// Searches are narrowed to unification education material.
const QUERY_PREFIX: &str = "통일 교육";

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
	#[serde(default)]
	items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
	id: SearchItemId,
	snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
	video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchSnippet {
	title: String,
	#[serde(default)]
	description: String,
	channel_title: String,
	published_at: DateTime<Utc>,
	#[serde(default)]
	thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
	high: Option<Thumbnail>,
	medium: Option<Thumbnail>,
	default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
	url: String,
}

impl From<SearchItem> for VideoSummary {
	fn from(item: SearchItem) -> Self {
		let thumbnails = item.snippet.thumbnails;
		let thumbnail_url = thumbnails
			.high
			.or(thumbnails.medium)
			.or(thumbnails.default)
			.map(|t| secure_thumbnail_url(&t.url))
			.unwrap_or_else(|| video_thumbnail_url(&item.id.video_id));

		VideoSummary {
			id: item.id.video_id,
			title: item.snippet.title,
			description: item.snippet.description,
			thumbnail_url,
			channel_title: item.snippet.channel_title,
			published_at: item.snippet.published_at,
		}
	}
}

fn normalize_search(envelope: serde_json::Value) -> Result<Vec<VideoSummary>, AdapterError> {
	let envelope: SearchEnvelope = serde_json::from_value(envelope).map_err(|e| {
		AdapterError::malformed(format!("{SEARCH_OPERATION} failed: unexpected response: {e}"))
	})?;

	if envelope.items.is_empty() {
		return Err(AdapterError::new(
			AdapterErrorKind::EmptyResult,
			format!("{SEARCH_OPERATION} returned no videos"),
		));
	}

	Ok(envelope.items.into_iter().map(VideoSummary::from).collect())
}

fn normalize_detail(envelope: serde_json::Value) -> Result<VideoDetail, AdapterError> {
	let mut detail: VideoDetail = serde_json::from_value(envelope).map_err(|e| {
		AdapterError::malformed(format!("{DETAIL_OPERATION} failed: unexpected response: {e}"))
	})?;
	detail.summary.thumbnail_url = secure_thumbnail_url(&detail.summary.thumbnail_url);
	Ok(detail)
}

impl UnicornClient {
	/// Search videos; the query is narrowed with a fixed education prefix.
	#[instrument(skip(self))]
	pub async fn search_unification_videos(
		&self,
		query: &str,
		max_results: u32,
	) -> AdapterResult<Vec<VideoSummary>> {
		let search_query = format!("{QUERY_PREFIX} {query}");
		let max_results = max_results.to_string();

		let outcome = self
			.get_json(
				SEARCH_OPERATION,
				SEARCH_PATH,
				&[
					("query", search_query.as_str()),
					("maxResults", max_results.as_str()),
				],
			)
			.await
			.and_then(normalize_search);

		settle(SEARCH_OPERATION, outcome, fallback::videos)
	}

	#[instrument(skip(self))]
	pub async fn get_video_details(&self, video_id: &str) -> AdapterResult<VideoDetail> {
		let outcome = self
			.get_json(DETAIL_OPERATION, DETAIL_PATH, &[("videoId", video_id)])
			.await
			.and_then(normalize_detail);

		settle(DETAIL_OPERATION, outcome, || fallback::video_detail(video_id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	fn search_item(id: &str, thumbnail: &str) -> serde_json::Value {
		json!({
			"id": { "kind": "youtube#video", "videoId": id },
			"snippet": {
				"title": "평화 이야기",
				"description": "설명",
				"channelTitle": "EBS 초등",
				"publishedAt": "2024-03-01T10:00:00Z",
				"thumbnails": { "high": { "url": thumbnail } }
			}
		})
	}

	#[tokio::test]
	async fn search_prefixes_query_and_maps_items() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(SEARCH_PATH))
			.and(query_param("query", "통일 교육 평화"))
			.and(query_param("maxResults", "8"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"items": [search_item("vid1", "http://i.ytimg.com/vi/vid1/hqdefault.jpg")]
			})))
			.expect(1)
			.mount(&server)
			.await;

		let client = UnicornClient::new(server.uri()).unwrap();
		let result = client.search_unification_videos("평화", 8).await;

		assert!(!result.is_from_fallback());
		let videos = result.into_data().unwrap();
		assert_eq!(videos[0].id, "vid1");
		assert_eq!(videos[0].channel_title, "EBS 초등");
		assert_eq!(
			videos[0].thumbnail_url,
			"https://i.ytimg.com/vi/vid1/hqdefault.jpg"
		);
	}

	#[tokio::test]
	async fn empty_search_falls_back_to_fixed_videos() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(SEARCH_PATH))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
			.mount(&server)
			.await;

		let client = UnicornClient::new(server.uri()).unwrap();
		let result = client.search_unification_videos("없음", 8).await;

		assert!(result.is_success());
		assert!(result.is_from_fallback());
		let ids: Vec<_> = result.data().unwrap().iter().map(|v| v.id.as_str()).collect();
		assert_eq!(ids, ["Hhn7UiRa41M", "IZqJTNRerUM", "KbL2tS8sNo0", "j12gKrLPZ-k"]);
	}

	#[tokio::test]
	async fn detail_is_returned_as_is() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(DETAIL_PATH))
			.and(query_param("videoId", "vid1"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({
				"id": "vid1",
				"title": "평화 이야기",
				"description": "설명",
				"thumbnailUrl": "https://i.ytimg.com/vi/vid1/hqdefault.jpg",
				"channelTitle": "EBS 초등",
				"publishedAt": "2024-03-01T10:00:00Z",
				"viewCount": "42",
				"duration": "PT3M"
			})))
			.mount(&server)
			.await;

		let client = UnicornClient::new(server.uri()).unwrap();
		let result = client.get_video_details("vid1").await;

		assert!(!result.is_from_fallback());
		let detail = result.into_data().unwrap();
		assert_eq!(detail.view_count, "42");
		assert_eq!(detail.duration, "PT3M");
	}

	#[tokio::test]
	async fn missing_video_uses_known_fallback_record() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path(DETAIL_PATH))
			.respond_with(ResponseTemplate::new(404).set_body_json(json!({
				"error": "not_found",
				"message": "Video not found: Hhn7UiRa41M"
			})))
			.mount(&server)
			.await;

		let client = UnicornClient::new(server.uri()).unwrap();
		let result = client.get_video_details("Hhn7UiRa41M").await;

		assert!(result.is_from_fallback());
		let detail = result.into_data().unwrap();
		assert_eq!(detail.summary.title, "통일 이야기: 함께 꿈꾸는 미래");
		assert_eq!(detail.view_count, "15243");
	}

	#[tokio::test]
	async fn unreachable_detail_uses_default_record_with_id() {
		let client = UnicornClient::new("http://127.0.0.1:1").unwrap();
		let result = client.get_video_details("zzz").await;

		assert!(result.is_from_fallback());
		let detail = result.into_data().unwrap();
		assert_eq!(detail.summary.id, "zzz");
		assert_eq!(
			detail.summary.thumbnail_url,
			"https://i.ytimg.com/vi/zzz/hqdefault.jpg"
		);
	}
}
