// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Teacher console gate.
//!
//! Teacher-only operations take a [`TeacherSession`] argument. The only way
//! to get one is [`TeacherGate::unlock`], so holding the value is the proof
//! that the passphrase was presented.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};
use unicorn_common_config::SecretString;

use crate::config::ClientConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
	#[error("teacher console is locked: no passphrase is configured")]
	NotConfigured,

	#[error("incorrect teacher passphrase")]
	WrongPassphrase,
}

#[derive(Debug, Clone)]
pub struct TeacherGate {
	passphrase: Option<SecretString>,
}

impl TeacherGate {
	pub fn new(passphrase: Option<SecretString>) -> Self {
		Self {
			passphrase: passphrase.filter(|p| !p.is_empty()),
		}
	}

	pub fn from_config(config: &ClientConfig) -> Self {
		Self::new(config.teacher_passphrase.clone())
	}

	pub fn is_configured(&self) -> bool {
		self.passphrase.is_some()
	}

	/// Compare `attempt` against the configured passphrase in constant time.
	pub fn unlock(&self, attempt: &str) -> Result<TeacherSession, SessionError> {
		let passphrase = self.passphrase.as_ref().ok_or(SessionError::NotConfigured)?;

		if !passphrase.matches(attempt) {
			warn!("teacher console unlock rejected");
			return Err(SessionError::WrongPassphrase);
		}

		debug!("teacher console unlocked");
		Ok(TeacherSession {
			unlocked_at: Utc::now(),
		})
	}
}

/// An unlocked teacher console.
#[derive(Debug, Clone)]
pub struct TeacherSession {
	unlocked_at: DateTime<Utc>,
}

impl TeacherSession {
	pub fn unlocked_at(&self) -> DateTime<Utc> {
		self.unlocked_at
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use unicorn_common_config::Secret;

	fn gate(passphrase: &str) -> TeacherGate {
		TeacherGate::new(Some(Secret::new(passphrase.to_string())))
	}

	#[test]
	fn correct_passphrase_unlocks() {
		let before = Utc::now();
		let session = gate("peace-2025").unlock("peace-2025").unwrap();
		assert!(session.unlocked_at() >= before);
	}

	#[test]
	fn wrong_passphrase_is_rejected() {
		let gate = gate("peace-2025");
		assert_eq!(gate.unlock("peace").unwrap_err(), SessionError::WrongPassphrase);
		assert_eq!(gate.unlock("").unwrap_err(), SessionError::WrongPassphrase);
		assert_eq!(
			gate.unlock("peace-2025 ").unwrap_err(),
			SessionError::WrongPassphrase
		);
	}

	#[test]
	fn unset_or_empty_passphrase_keeps_console_locked() {
		for gate in [TeacherGate::new(None), gate("")] {
			assert!(!gate.is_configured());
			assert_eq!(gate.unlock("").unwrap_err(), SessionError::NotConfigured);
		}
	}

	#[test]
	fn debug_output_hides_passphrase() {
		let rendered = format!("{:?}", gate("peace-2025"));
		assert!(!rendered.contains("peace-2025"));
	}

	#[test]
	fn gate_reads_client_config() {
		let config = ClientConfig {
			teacher_passphrase: Some(Secret::new("s3cret".to_string())),
			..ClientConfig::default()
		};
		assert!(TeacherGate::from_config(&config).unlock("s3cret").is_ok());
	}
}
