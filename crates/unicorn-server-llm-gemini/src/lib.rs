// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Google Gemini `generateContent` client for the Unicorn proxy.

pub mod client;
pub mod error;
pub mod types;

pub use client::{GeminiClient, DEFAULT_MODEL};
pub use error::GeminiError;
pub use types::{GenerateRequest, GenerationConfig, DEFAULT_MAX_OUTPUT_TOKENS};
