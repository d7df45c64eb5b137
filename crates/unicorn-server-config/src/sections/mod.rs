// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod logging;
mod providers;

pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use providers::{
	GeminiConfig, GeminiConfigLayer, NaverConfig, NaverConfigLayer, ProvidersConfig,
	ProvidersConfigLayer, YouTubeConfig, YouTubeConfigLayer,
};
