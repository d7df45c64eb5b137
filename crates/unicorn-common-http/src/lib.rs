// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with a consistent User-Agent header.
//!
//! Every outbound call in the workspace (proxy to provider, client to proxy)
//! is built from here so requests are identifiable in provider dashboards.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Deadline for search and video lookups.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for generative-text calls, which routinely take several seconds.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Client builder carrying the standard `unicorn/{version}` User-Agent.
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Build a client with the given request timeout.
pub fn client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	builder().timeout(timeout).build()
}

pub fn user_agent() -> String {
	format!("unicorn/{}", env!("CARGO_PKG_VERSION"))
}
