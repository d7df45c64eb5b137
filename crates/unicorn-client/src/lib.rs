// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client adapters for the Unicorn proxy.
//!
//! Every operation on [`UnicornClient`] returns an [`AdapterResult`]. When the
//! live provider is unreachable, unconfigured or answers with something
//! unusable, the adapter substitutes pre-authored content from [`fallback`]
//! and marks the result `fromFallback`. Rejections (a 403 for a blocked query,
//! for example) and local validation failures are reported as failures.
//!
//! [`AdapterResult`]: unicorn_content_core::AdapterResult

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod generation;
pub mod letter;
pub mod quiz;
pub mod search;
pub mod session;
pub mod video;

pub use client::UnicornClient;
pub use config::{ClientConfig, DEFAULT_PROXY_URL};
pub use error::{AdapterError, AdapterErrorKind};
pub use quiz::QuizOptions;
pub use session::{SessionError, TeacherGate, TeacherSession};
