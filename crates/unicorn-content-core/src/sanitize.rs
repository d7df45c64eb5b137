// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Normalization applied to provider payloads before they reach a caller.

const EMPHASIS_TAGS: [&str; 2] = ["<b>", "</b>"];

/// Remove the `<b>`/`</b>` wrappers the search provider puts around matched
/// terms. All other text is left untouched.
///
/// Repeats until nothing changes, so nested input such as `<<b>b>` cannot
/// rebuild a tag.
pub fn strip_emphasis(text: &str) -> String {
	let mut current = text.to_string();
	loop {
		let next = EMPHASIS_TAGS
			.iter()
			.fold(current.clone(), |acc, tag| acc.replace(tag, ""));
		if next == current {
			return next;
		}
		current = next;
	}
}

/// Force a thumbnail URL onto https. Already-secure or scheme-less URLs pass
/// through unchanged, so applying this twice equals applying it once.
pub fn secure_thumbnail_url(url: &str) -> String {
	match url.strip_prefix("http://") {
		Some(rest) => format!("https://{rest}"),
		None => url.to_string(),
	}
}

/// Canonical high-quality thumbnail for a video id.
pub fn video_thumbnail_url(video_id: &str) -> String {
	format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
}

/// Rewrite every `items[].snippet.thumbnails.*.url` in a raw video-search
/// envelope to https, leaving the rest of the body as the provider sent it.
pub fn secure_search_thumbnails(envelope: &mut serde_json::Value) {
	let Some(items) = envelope.get_mut("items").and_then(|v| v.as_array_mut()) else {
		return;
	};

	for item in items {
		let Some(thumbnails) = item
			.get_mut("snippet")
			.and_then(|s| s.get_mut("thumbnails"))
			.and_then(|t| t.as_object_mut())
		else {
			continue;
		};

		for thumbnail in thumbnails.values_mut() {
			if let Some(url) = thumbnail.get_mut("url") {
				if let Some(current) = url.as_str() {
					*url = serde_json::Value::String(secure_thumbnail_url(current));
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use serde_json::json;

	#[test]
	fn strips_bold_wrappers_only() {
		assert_eq!(
			strip_emphasis("<b>통일</b> 교육의 <b>중요성</b>"),
			"통일 교육의 중요성"
		);
		assert_eq!(strip_emphasis("<i>kept</i>"), "<i>kept</i>");
	}

	#[test]
	fn nested_markup_cannot_rebuild_a_tag() {
		assert_eq!(strip_emphasis("<<b>b>통일<</b>/b>"), "통일");
		assert_eq!(strip_emphasis("<<<b>b>b>평화"), "평화");
	}

	#[test]
	fn upgrades_insecure_thumbnail() {
		assert_eq!(
			secure_thumbnail_url("http://i.ytimg.com/vi/abc/hqdefault.jpg"),
			"https://i.ytimg.com/vi/abc/hqdefault.jpg"
		);
	}

	#[test]
	fn secure_thumbnail_passes_through() {
		let url = "https://i.ytimg.com/vi/abc/hqdefault.jpg";
		assert_eq!(secure_thumbnail_url(url), url);
	}

	#[test]
	fn rewrites_every_thumbnail_in_envelope() {
		let mut envelope = json!({
			"kind": "youtube#searchListResponse",
			"items": [
				{
					"id": { "videoId": "a" },
					"snippet": {
						"thumbnails": {
							"default": { "url": "http://i.ytimg.com/vi/a/default.jpg" },
							"high": { "url": "https://i.ytimg.com/vi/a/hqdefault.jpg" }
						}
					}
				},
				{ "id": { "videoId": "b" } }
			]
		});

		secure_search_thumbnails(&mut envelope);

		assert_eq!(
			envelope["items"][0]["snippet"]["thumbnails"]["default"]["url"],
			"https://i.ytimg.com/vi/a/default.jpg"
		);
		assert_eq!(
			envelope["items"][0]["snippet"]["thumbnails"]["high"]["url"],
			"https://i.ytimg.com/vi/a/hqdefault.jpg"
		);
		assert_eq!(envelope["kind"], "youtube#searchListResponse");
	}

	#[test]
	fn envelope_without_items_is_untouched() {
		let mut envelope = json!({ "error": "nothing here" });
		let before = envelope.clone();
		secure_search_thumbnails(&mut envelope);
		assert_eq!(envelope, before);
	}

	proptest! {
		#[test]
		fn thumbnail_upgrade_is_idempotent(url in "(https?://)?[a-z./0-9_-]{0,40}") {
			let once = secure_thumbnail_url(&url);
			let twice = secure_thumbnail_url(&once);
			prop_assert_eq!(&once, &twice);
			prop_assert!(!once.starts_with("http://"));
		}

		#[test]
		fn stripped_text_has_no_emphasis(words in proptest::collection::vec("[가-힣a-z ]{0,8}", 0..6)) {
			let text = words.join("<<b>b>x<</b>/b></b>");
			let stripped = strip_emphasis(&text);
			prop_assert!(!stripped.contains("<b>"));
			prop_assert!(!stripped.contains("</b>"));
		}
	}
}
