// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Pre-authored content served when a live provider cannot be used.
//!
//! Every function builds its data fresh; nothing here is cached or shared.

use chrono::{DateTime, TimeZone, Utc};
use unicorn_content_core::{
	video_thumbnail_url, LetterAnalysis, QuizQuestion, QuizSet, SearchResultItem, SearchResults,
	Sentiment, VideoDetail, VideoSummary,
};

const CHANNEL: &str = "통일부 통일교육원";

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
	Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
		.single()
		.unwrap_or_default()
}

fn item(title: &str, description: &str, link: &str) -> SearchResultItem {
	SearchResultItem {
		title: title.to_string(),
		description: description.to_string(),
		link: link.to_string(),
	}
}

/// Three reading materials from the unification education institute.
pub fn search_results() -> SearchResults {
	SearchResults {
		items: vec![
			item(
				"초등학생을 위한 통일 교육의 중요성",
				"초등학생 시기는 통일 교육에 있어 매우 중요한 시기입니다. 이 시기에 형성된 통일에 대한 인식은 이후 성인이 되어서도 영향을 미치게 됩니다.",
				"https://www.uniedu.go.kr/uniedu/home/pds/pdsatcl/view.do?id=19042",
			),
			item(
				"평화·통일교육 : 방향과 관점",
				"통일부 통일교육원에서 발간한 평화·통일교육의 방향과 관점에 대한 자료입니다. 통일교육의 목표와 내용, 방법 등을 담고 있습니다.",
				"https://www.uniedu.go.kr/uniedu/home/pds/pdsatcl/view.do?id=19868",
			),
			item(
				"한반도 평화프로세스와 통일교육",
				"한반도 평화 정착을 위한 과정과 통일교육의 연계성에 대해 다루고 있습니다. 평화와 통일의 관계를 초등학생이 이해할 수 있도록 설명합니다.",
				"https://www.uniedu.go.kr/uniedu/home/pds/pdsatcl/view.do?id=18881",
			),
		],
	}
}

fn summary(id: &str, title: &str, description: &str, published_at: DateTime<Utc>) -> VideoSummary {
	VideoSummary {
		id: id.to_string(),
		title: title.to_string(),
		description: description.to_string(),
		thumbnail_url: video_thumbnail_url(id),
		channel_title: CHANNEL.to_string(),
		published_at,
	}
}

pub fn videos() -> Vec<VideoSummary> {
	vec![
		summary(
			"Hhn7UiRa41M",
			"통일 이야기: 함께 꿈꾸는 미래",
			"통일 후 한반도의 모습을 상상해보는 애니메이션",
			utc(2023, 6, 25, 9, 0),
		),
		summary(
			"IZqJTNRerUM",
			"한반도의 평화와 통일",
			"한반도 평화와 통일의 중요성에 대해 설명하는 영상",
			utc(2023, 5, 10, 7, 30),
		),
		summary(
			"KbL2tS8sNo0",
			"북한 어린이들의 학교생활",
			"북한 어린이들의 일상과 학교생활에 대해 알아봅니다.",
			utc(2023, 7, 15, 11, 20),
		),
		summary(
			"j12gKrLPZ-k",
			"이산가족 할아버지의 이야기",
			"한국전쟁으로 인해 가족과 헤어진 할아버지의 이산가족 사연",
			utc(2023, 4, 5, 14, 15),
		),
	]
}

/// Known ids map to fixed records; any other id gets the generic record with
/// the id substituted.
pub fn video_detail(video_id: &str) -> VideoDetail {
	let (summary, view_count, duration) = match video_id {
		"Hhn7UiRa41M" => (
			summary(
				video_id,
				"통일 이야기: 함께 꿈꾸는 미래",
				"통일 후 한반도의 모습을 상상해보는 애니메이션입니다. 초등학생들에게 통일의 의미와 가치를 알려줍니다.",
				utc(2023, 6, 25, 9, 0),
			),
			"15243",
			"PT5M32S",
		),
		"IZqJTNRerUM" => (
			summary(
				video_id,
				"한반도의 평화와 통일",
				"한반도 평화와 통일의 중요성에 대해 설명하는 영상입니다. 남북관계의 역사와 평화로운 미래에 대해 이야기합니다.",
				utc(2023, 5, 10, 7, 30),
			),
			"8721",
			"PT7M15S",
		),
		_ => (
			summary(
				video_id,
				"통일 교육 영상",
				"통일 교육과 관련된 영상입니다.",
				utc(2023, 1, 1, 0, 0),
			),
			"1000",
			"PT5M00S",
		),
	};

	VideoDetail {
		summary,
		view_count: view_count.to_string(),
		duration: duration.to_string(),
	}
}

const UNIFICATION_KEYWORDS: [&str; 3] = ["통일", "평화", "남북"];
const WAR_KEYWORDS: [&str; 3] = ["전쟁", "UN", "참전국"];

/// Pick one of three fixed quiz sets by keyword presence in `content`.
/// Unification keywords are checked before war keywords.
pub fn quiz_for(content: &str) -> QuizSet {
	let questions = if UNIFICATION_KEYWORDS.iter().any(|k| content.contains(k)) {
		vec![
			QuizQuestion::new(
				"한국전쟁은 언제 발발했나요?",
				["1945년", "1950년", "1953년", "1960년"],
				1,
			),
			QuizQuestion::new(
				"남북한의 분단선인 휴전선은 무엇을 기준으로 하나요?",
				["38선", "압록강", "두만강", "한강"],
				0,
			),
			QuizQuestion::new(
				"통일이 되면 얻을 수 있는 가장 큰 이점은 무엇인가요?",
				["경제적 이익", "이산가족 상봉", "군사적 긴장 완화", "모든 답이 맞음"],
				3,
			),
		]
	} else if WAR_KEYWORDS.iter().any(|k| content.contains(k)) {
		vec![
			QuizQuestion::new(
				"UN참전국 중 가장 많은 병력을 파견한 국가는?",
				["영국", "터키", "미국", "프랑스"],
				2,
			),
			QuizQuestion::new(
				"한국전쟁 휴전협정이 체결된 해는?",
				["1950년", "1951년", "1953년", "1955년"],
				2,
			),
			QuizQuestion::new(
				"한국전쟁 중 UN군 사령관이었던 인물은?",
				["아이젠하워", "맥아더", "패튼", "워싱턴"],
				1,
			),
		]
	} else {
		vec![
			QuizQuestion::new(
				"한반도 평화를 위해 가장 중요한 것은 무엇인가요?",
				["경제 협력", "문화 교류", "정치적 합의", "모든 답이 맞음"],
				3,
			),
			QuizQuestion::new(
				"북한 어린이들과 남한 어린이들의 공통점으로 맞는 것은?",
				["같은 언어를 사용함", "같은 역사를 공부함", "같은 노래를 부름", "모든 답이 맞음"],
				0,
			),
			QuizQuestion::new(
				"통일 교육의 목적으로 적절한 것은?",
				["통일의 필요성 이해", "평화 의식 함양", "민족 공동체 의식 함양", "모든 답이 맞음"],
				3,
			),
		]
	};

	QuizSet { questions }
}

pub fn letter_analysis() -> LetterAnalysis {
	LetterAnalysis {
		sentiment: Sentiment::Positive,
		themes: vec!["감사".to_string(), "평화".to_string(), "미래".to_string()],
		suggestions: "참전국의 구체적인 기여에 대해 언급하면 더 좋을 것 같습니다.".to_string(),
	}
}
