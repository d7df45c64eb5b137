// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! YouTube Data API v3 client for the Unicorn proxy.
//!
//! Search results are returned as the provider's envelope (thumbnails forced to
//! https); video detail lookups are reshaped into [`VideoDetail`].
//!
//! [`VideoDetail`]: unicorn_content_core::VideoDetail

pub mod client;
pub mod error;
pub mod types;

pub use client::YouTubeClient;
pub use error::YouTubeError;
pub use types::{VideoSearchRequest, DEFAULT_MAX_RESULTS};
