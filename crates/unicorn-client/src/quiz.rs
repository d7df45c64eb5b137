// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Quiz generation from reading material.

use tracing::instrument;
use unicorn_content_core::{AdapterResult, QuizSet};

use crate::client::{settle, UnicornClient};
use crate::error::AdapterError;
use crate::fallback;

const OPERATION: &str = "quiz generation";

/// Content shorter than this (in characters) is refused locally.
pub const MIN_CONTENT_CHARS: usize = 50;
/// Only this many leading characters of content reach the prompt.
pub const MAX_PROMPT_CONTENT_CHARS: usize = 3000;
const MAX_OUTPUT_TOKENS: u32 = 2048;

pub const MIN_GRADE: u8 = 3;
pub const MAX_GRADE: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
	pub question_count: u8,
	pub grade_level: u8,
}

impl Default for QuizOptions {
	fn default() -> Self {
		Self {
			question_count: 3,
			grade_level: MIN_GRADE,
		}
	}
}

impl QuizOptions {
	pub fn new(question_count: u8, grade_level: u8) -> Self {
		Self {
			question_count: question_count.max(1),
			grade_level: grade_level.clamp(MIN_GRADE, MAX_GRADE),
		}
	}
}

fn quiz_prompt(content: &str, options: QuizOptions) -> String {
	let excerpt: String = content.chars().take(MAX_PROMPT_CONTENT_CHARS).collect();
	let QuizOptions {
		question_count,
		grade_level,
	} = options;

	format!(
		r#"다음 콘텐츠를 읽고 한국 초등학교 {grade_level}학년 수준에 적합한 객관식 퀴즈 {question_count}개를 생성해주세요.
각 퀴즈는 질문과 4개의 선택지, 그리고 정답 번호(0-3)로 구성해주세요.
내용은 한국 통일 교육과 관련된 것으로, 아이들이 이해하기 쉽고 긍정적인 방식으로 작성해주세요.

콘텐츠:
{excerpt}

JSON 형식으로 다음과 같이 반환해주세요:
{{
  "questions": [
    {{
      "question": "질문 내용",
      "options": ["선택지1", "선택지2", "선택지3", "선택지4"],
      "answer": 정답번호(0-3)
    }}
  ]
}}
"#
	)
}

fn validate_content(content: &str) -> Result<(), AdapterError> {
	if content.chars().count() < MIN_CONTENT_CHARS {
		return Err(AdapterError::validation(format!(
			"content is too short to build a quiz: at least {MIN_CONTENT_CHARS} characters are required"
		)));
	}
	Ok(())
}

fn require_usable(quiz: QuizSet) -> Result<QuizSet, AdapterError> {
	if quiz.is_usable() {
		Ok(quiz)
	} else {
		Err(AdapterError::malformed(
			"generated quiz is empty or has an answer outside the options",
		))
	}
}

impl UnicornClient {
	/// Author multiple choice questions for `content`.
	#[instrument(skip(self, content), fields(content_chars = content.chars().count()))]
	pub async fn generate_quiz_questions(
		&self,
		content: &str,
		options: QuizOptions,
	) -> AdapterResult<QuizSet> {
		let outcome = match validate_content(content) {
			Ok(()) => self
				.generate_structured::<QuizSet>(
					OPERATION,
					&quiz_prompt(content, options),
					MAX_OUTPUT_TOKENS,
				)
				.await
				.and_then(require_usable),
			Err(e) => Err(e),
		};

		settle(OPERATION, outcome, || fallback::quiz_for(content))
	}
}
