// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Naver web search client for the Unicorn proxy.
//!
//! The client holds the Naver credential pair and returns the provider's raw
//! JSON envelope so the proxy can relay it verbatim.

pub mod client;
pub mod error;
pub mod types;

pub use client::NaverClient;
pub use error::NaverError;
pub use types::{NaverSearchRequest, SortOrder};
