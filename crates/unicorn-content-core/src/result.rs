// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! The uniform envelope every client adapter returns.

use serde::Serialize;

/// Outcome of one adapter call.
///
/// Fields are private so the envelope can only be built through
/// [`AdapterResult::live`], [`AdapterResult::fallback`] and
/// [`AdapterResult::failure`]: `data` is present exactly when the call
/// succeeded, and `fromFallback` is only ever set on a success.
///
/// Serialized as `{ success, data, error, fromFallback }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterResult<T> {
	success: bool,
	data: Option<T>,
	error: Option<String>,
	from_fallback: bool,
}

impl<T> AdapterResult<T> {
	/// Data obtained from the live provider.
	pub fn live(data: T) -> Self {
		Self {
			success: true,
			data: Some(data),
			error: None,
			from_fallback: false,
		}
	}

	/// Data substituted from a static table.
	pub fn fallback(data: T) -> Self {
		Self {
			success: true,
			data: Some(data),
			error: None,
			from_fallback: true,
		}
	}

	/// A failure the caller should display as an error message.
	pub fn failure(error: impl Into<String>) -> Self {
		Self {
			success: false,
			data: None,
			error: Some(error.into()),
			from_fallback: false,
		}
	}

	pub fn is_success(&self) -> bool {
		self.success
	}

	pub fn is_from_fallback(&self) -> bool {
		self.from_fallback
	}

	pub fn data(&self) -> Option<&T> {
		self.data.as_ref()
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn into_data(self) -> Option<T> {
		self.data
	}

	/// Convert to a `Result`, discarding the fallback flag.
	pub fn into_result(self) -> Result<T, String> {
		match (self.data, self.error) {
			(Some(data), _) => Ok(data),
			(None, error) => Err(error.unwrap_or_default()),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AdapterResult<U> {
		AdapterResult {
			success: self.success,
			data: self.data.map(f),
			error: self.error,
			from_fallback: self.from_fallback,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn live_result_shape() {
		let result = AdapterResult::live(vec![1, 2]);
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			json!({ "success": true, "data": [1, 2], "error": null, "fromFallback": false })
		);
	}

	#[test]
	fn fallback_result_is_a_success() {
		let result = AdapterResult::fallback("static");
		assert!(result.is_success());
		assert!(result.is_from_fallback());
		assert_eq!(result.data(), Some(&"static"));
		assert_eq!(result.error(), None);
	}

	#[test]
	fn failure_has_no_data_and_no_fallback_flag() {
		let result: AdapterResult<()> = AdapterResult::failure("provider rejected the query");
		assert!(!result.is_success());
		assert!(!result.is_from_fallback());
		assert!(result.data().is_none());
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			json!({
				"success": false,
				"data": null,
				"error": "provider rejected the query",
				"fromFallback": false
			})
		);
	}

	#[test]
	fn into_result_and_map() {
		let doubled = AdapterResult::fallback(21).map(|n| n * 2);
		assert!(doubled.is_from_fallback());
		assert_eq!(doubled.into_result(), Ok(42));

		let failed: AdapterResult<i32> = AdapterResult::failure("nope");
		assert_eq!(failed.into_result(), Err("nope".to_string()));
	}
}
