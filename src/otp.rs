//! OTP extraction from mailbox message previews.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::error::OtpNotFoundError;

static OTP_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("[0-9]{6}").expect("Failed to compile the OTP pattern."));

/// Finds the OTP code inside free-text message content.
///
/// The leftmost run of six consecutive ASCII digits wins, with plain regex
/// semantics: a shorter run never matches, while a longer run still yields its
/// first six digits. That behavior is the contract the platform's email
/// template is matched against, so it must not be replaced with a
/// digit-counting heuristic.
pub fn extract(text: &str) -> Result<&str, OtpNotFoundError> {
	OTP_PATTERN.find(text).map(|found| found.as_str()).ok_or(OtpNotFoundError::CodeMissing)
}
