// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application-level content records returned to callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A web search hit with emphasis markup already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
	pub title: String,
	pub description: String,
	pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResults {
	pub items: Vec<SearchResultItem>,
}

/// A video as listed in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
	pub id: String,
	pub title: String,
	pub description: String,
	/// Always https.
	pub thumbnail_url: String,
	pub channel_title: String,
	pub published_at: DateTime<Utc>,
}

/// A single video with statistics, as shown on the video page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetail {
	#[serde(flatten)]
	pub summary: VideoSummary,
	/// Integer carried as a string, as the provider reports it.
	pub view_count: String,
	/// ISO-8601 duration, e.g. `PT5M32S`.
	pub duration: String,
}

/// A four-option multiple choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
	pub question: String,
	pub options: [String; 4],
	#[serde(alias = "answer")]
	pub answer_index: u8,
}

impl QuizQuestion {
	pub fn new(question: &str, options: [&str; 4], answer_index: u8) -> Self {
		Self {
			question: question.to_string(),
			options: options.map(str::to_string),
			answer_index,
		}
	}

	/// The answer must point at one of the four options and the question text
	/// must be present.
	pub fn is_well_formed(&self) -> bool {
		usize::from(self.answer_index) < self.options.len() && !self.question.trim().is_empty()
	}

	pub fn answer(&self) -> Option<&str> {
		self.options
			.get(usize::from(self.answer_index))
			.map(String::as_str)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuizSet {
	pub questions: Vec<QuizQuestion>,
}

impl QuizSet {
	/// Non-empty and every question well formed.
	pub fn is_usable(&self) -> bool {
		!self.questions.is_empty() && self.questions.iter().all(QuizQuestion::is_well_formed)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
	Positive,
	Neutral,
	Negative,
}

/// Feedback on a student's thank-you letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterAnalysis {
	pub sentiment: Sentiment,
	pub themes: Vec<String>,
	pub suggestions: String,
}

/// Letters are summarized by at most this many themes.
pub const MAX_LETTER_THEMES: usize = 3;

impl LetterAnalysis {
	pub fn is_usable(&self) -> bool {
		!self.themes.is_empty() && !self.suggestions.trim().is_empty()
	}

	/// Drop themes beyond [`MAX_LETTER_THEMES`].
	pub fn truncate_themes(mut self) -> Self {
		self.themes.truncate(MAX_LETTER_THEMES);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn quiz_question_accepts_provider_answer_field() {
		let question: QuizQuestion = serde_json::from_value(json!({
			"question": "휴전협정이 체결된 해는?",
			"options": ["1950년", "1951년", "1953년", "1955년"],
			"answer": 2
		}))
		.unwrap();

		assert_eq!(question.answer_index, 2);
		assert_eq!(question.answer(), Some("1953년"));
		assert!(question.is_well_formed());
	}

	#[test]
	fn quiz_question_serializes_answer_index() {
		let question = QuizQuestion::new("q", ["a", "b", "c", "d"], 0);
		let value = serde_json::to_value(&question).unwrap();
		assert_eq!(value["answerIndex"], 0);
		assert!(value.get("answer").is_none());
	}

	#[test]
	fn quiz_question_requires_exactly_four_options() {
		let three = json!({ "question": "q", "options": ["a", "b", "c"], "answer": 0 });
		let five = json!({ "question": "q", "options": ["a", "b", "c", "d", "e"], "answer": 0 });
		assert!(serde_json::from_value::<QuizQuestion>(three).is_err());
		assert!(serde_json::from_value::<QuizQuestion>(five).is_err());
	}

	#[test]
	fn out_of_range_answer_is_not_well_formed() {
		let question = QuizQuestion::new("q", ["a", "b", "c", "d"], 4);
		assert!(!question.is_well_formed());
		assert_eq!(question.answer(), None);
	}

	#[test]
	fn empty_quiz_set_is_not_usable() {
		assert!(!QuizSet::default().is_usable());
	}

	#[test]
	fn video_detail_flattens_summary() {
		let detail = VideoDetail {
			summary: VideoSummary {
				id: "abc".to_string(),
				title: "t".to_string(),
				description: "d".to_string(),
				thumbnail_url: "https://i.ytimg.com/vi/abc/hqdefault.jpg".to_string(),
				channel_title: "c".to_string(),
				published_at: "2023-06-25T09:00:00Z".parse().unwrap(),
			},
			view_count: "15243".to_string(),
			duration: "PT5M32S".to_string(),
		};

		let value = serde_json::to_value(&detail).unwrap();
		assert_eq!(value["id"], "abc");
		assert_eq!(value["thumbnailUrl"], "https://i.ytimg.com/vi/abc/hqdefault.jpg");
		assert_eq!(value["channelTitle"], "c");
		assert_eq!(value["viewCount"], "15243");
		assert_eq!(value["publishedAt"], "2023-06-25T09:00:00Z");

		let back: VideoDetail = serde_json::from_value(value).unwrap();
		assert_eq!(back, detail);
	}

	#[test]
	fn letter_analysis_parses_lowercase_sentiment() {
		let analysis: LetterAnalysis = serde_json::from_value(json!({
			"sentiment": "neutral",
			"themes": ["감사", "평화", "미래", "우정"],
			"suggestions": "구체적인 예를 들어 보세요."
		}))
		.unwrap();

		assert_eq!(analysis.sentiment, Sentiment::Neutral);
		assert_eq!(analysis.truncate_themes().themes.len(), MAX_LETTER_THEMES);
	}
}
