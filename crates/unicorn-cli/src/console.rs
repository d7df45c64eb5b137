// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Command handlers for the student and teacher consoles.

use serde::Serialize;
use unicorn_client::{QuizOptions, SessionError, TeacherGate, TeacherSession, UnicornClient};
use unicorn_content_core::{
	AdapterResult, LetterAnalysis, QuizSet, SearchResults, VideoDetail, VideoSummary,
};

/// Everything a teacher-only command needs. Built only through
/// [`TeacherContext::unlock`].
pub struct TeacherContext<'a> {
	client: &'a UnicornClient,
	session: TeacherSession,
}

impl<'a> TeacherContext<'a> {
	pub fn unlock(
		client: &'a UnicornClient,
		gate: &TeacherGate,
		attempt: &str,
	) -> Result<Self, SessionError> {
		let session = gate.unlock(attempt)?;
		tracing::info!(unlocked_at = %session.unlocked_at(), "teacher console unlocked");
		Ok(Self { client, session })
	}

	fn trace(&self, command: &'static str) {
		tracing::debug!(command, unlocked_at = %self.session.unlocked_at(), "running teacher command");
	}

	pub async fn search(&self, query: &str) -> AdapterResult<SearchResults> {
		self.trace("search");
		self.client.search_unification_content(query).await
	}

	pub async fn videos(&self, query: &str, max_results: u32) -> AdapterResult<Vec<VideoSummary>> {
		self.trace("videos");
		self.client.search_unification_videos(query, max_results).await
	}

	pub async fn quiz(&self, content: &str, options: QuizOptions) -> AdapterResult<QuizSet> {
		self.trace("quiz");
		self.client.generate_quiz_questions(content, options).await
	}
}

pub async fn video(client: &UnicornClient, video_id: &str) -> AdapterResult<VideoDetail> {
	client.get_video_details(video_id).await
}

pub async fn letter(client: &UnicornClient, text: &str) -> AdapterResult<LetterAnalysis> {
	client.analyze_letter_content(text).await
}

/// Pretty JSON for stdout, plus whether the call succeeded.
pub fn render<T: Serialize>(result: &AdapterResult<T>) -> serde_json::Result<(String, bool)> {
	Ok((serde_json::to_string_pretty(result)?, result.is_success()))
}
