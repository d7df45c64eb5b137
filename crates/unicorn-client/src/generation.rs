// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pulling structured data out of a generation envelope.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::UnicornClient;
use crate::error::{AdapterError, AdapterErrorKind};

pub(crate) const GENERATE_PATH: &str = "/api/gemini-generate";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
	prompt: &'a str,
	max_output_tokens: u32,
}

/// Text of the first part of the first candidate.
pub fn candidate_text(envelope: &serde_json::Value) -> Result<&str, AdapterError> {
	envelope
		.pointer("/candidates/0/content/parts/0/text")
		.and_then(serde_json::Value::as_str)
		.filter(|text| !text.is_empty())
		.ok_or_else(|| {
			AdapterError::new(
				AdapterErrorKind::UnexpectedShape,
				"generation response has no candidate text",
			)
		})
}

/// The slice from the first `{` to the last `}` inclusive. Models often wrap
/// JSON in prose or code fences.
pub fn json_object_slice(text: &str) -> Option<&str> {
	let start = text.find('{')?;
	let end = text.rfind('}')?;
	(end > start).then(|| &text[start..=end])
}

/// Parse the JSON object embedded in the generated text.
pub fn parse_generated<T: DeserializeOwned>(text: &str) -> Result<T, AdapterError> {
	let json = json_object_slice(text)
		.ok_or_else(|| AdapterError::malformed("no JSON object found in generated text"))?;
	serde_json::from_str(json)
		.map_err(|e| AdapterError::malformed(format!("generated JSON is invalid: {e}")))
}

impl UnicornClient {
	/// Run one generation through the proxy and decode the embedded object.
	pub(crate) async fn generate_structured<T: DeserializeOwned>(
		&self,
		operation: &str,
		prompt: &str,
		max_output_tokens: u32,
	) -> Result<T, AdapterError> {
		let envelope = self
			.post_json(
				operation,
				GENERATE_PATH,
				&GenerateBody {
					prompt,
					max_output_tokens,
				},
			)
			.await?;
		let text = candidate_text(&envelope)?;
		tracing::trace!(operation, text = %text, "generated text");
		parse_generated(text)
	}
}
