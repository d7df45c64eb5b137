// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Feedback on student thank-you letters.

use tracing::instrument;
use unicorn_content_core::{AdapterResult, LetterAnalysis, MAX_LETTER_THEMES};

use crate::client::{settle, UnicornClient};
use crate::error::AdapterError;
use crate::fallback;

const OPERATION: &str = "letter analysis";

pub const MIN_LETTER_CHARS: usize = 20;
const MAX_OUTPUT_TOKENS: u32 = 1024;

fn letter_prompt(letter: &str) -> String {
	format!(
		r#"다음은 초등학생이 UN참전국에 보내는 한국전쟁 감사 편지입니다.
이 편지의 내용을 분석하고, 다음 항목을 JSON 형식으로 반환해주세요:

1. sentiment: 편지의 전반적인 감정 (positive, neutral, negative)
2. themes: 편지에서 언급된 주요 주제 (문자열 배열, 최대 {MAX_LETTER_THEMES}개)
3. suggestions: 편지를 개선하기 위한 간단한 제안 (초등학생 수준에 맞게)

편지 내용:
{letter}

JSON 형식으로 반환:
{{
  "sentiment": "감정",
  "themes": ["주제1", "주제2", "주제3"],
  "suggestions": "개선 제안"
}}
"#
	)
}

fn require_usable(analysis: LetterAnalysis) -> Result<LetterAnalysis, AdapterError> {
	if analysis.is_usable() {
		Ok(analysis.truncate_themes())
	} else {
		Err(AdapterError::malformed(
			"generated analysis has no themes or suggestions",
		))
	}
}

impl UnicornClient {
	#[instrument(skip(self, letter), fields(letter_chars = letter.chars().count()))]
	pub async fn analyze_letter_content(&self, letter: &str) -> AdapterResult<LetterAnalysis> {
		if letter.chars().count() < MIN_LETTER_CHARS {
			let e = AdapterError::validation(format!(
				"letter is too short to analyze: at least {MIN_LETTER_CHARS} characters are required"
			));
			return settle(OPERATION, Err(e), fallback::letter_analysis);
		}

		let outcome = self
			.generate_structured::<LetterAnalysis>(
				OPERATION,
				&letter_prompt(letter),
				MAX_OUTPUT_TOKENS,
			)
			.await
			.and_then(require_usable);

		settle(OPERATION, outcome, fallback::letter_analysis)
	}
}
