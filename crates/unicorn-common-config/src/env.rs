// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Loading credentials from the environment.
//!
//! Each credential may be given directly (`VAR`) or as a mounted file
//! (`VAR_FILE`), the latter taking precedence.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

/// Load `var` (or the file named by `{var}_FILE`) as a secret.
///
/// Empty values count as unset. A single trailing newline is stripped from
/// file contents.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| SecretEnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content).to_string();
		if value.is_empty() {
			return Ok(None);
		}
		return Ok(Some(Secret::new(value)));
	}

	match env::var(var) {
		Ok(value) if !value.is_empty() => Ok(Some(Secret::new(value))),
		_ => Ok(None),
	}
}

/// Try each name in order and return the first secret that is set.
///
/// Used where a deployment may still carry the bare provider variable names.
pub fn load_secret_env_any(vars: &[&str]) -> Result<Option<Secret<String>>, SecretEnvError> {
	for var in vars {
		if let Some(secret) = load_secret_env(var)? {
			return Ok(Some(secret));
		}
	}
	Ok(None)
}
