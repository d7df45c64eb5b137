// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the Unicorn proxy server and client.
//!
//! - [`Secret<T>`]: redacting wrapper for provider credentials and the
//!   teacher passphrase
//! - [`load_secret_env`]: `VAR` / `VAR_FILE` loading

pub mod env;
pub mod secret;

pub use env::{load_secret_env, load_secret_env_any, SecretEnvError};
pub use secret::{Secret, SecretString, REDACTED};
