// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Credential-holding proxy for the Unicorn education content pipeline.
//!
//! Browsers and the CLI call this server instead of the providers directly, so
//! provider credentials never leave it.

pub mod api;
pub mod cors;
pub mod error;
pub mod routes;

pub use api::{create_app_state, create_router, AppState};
pub use error::{ErrorResponse, ServerError};
