//! Persisted credential record and its lifecycle helpers.

// self
use crate::{_prelude::*, auth::secret::TokenSecret};

/// Credential issued by the platform together with the window the broker
/// assumes it stays valid for.
///
/// `expires_at` is always `refreshed_at` plus
/// [`ASSUMED_VALIDITY`](CredentialRecord::ASSUMED_VALIDITY). The platform
/// never confirms the real validity window, so the field records the broker's
/// assumption rather than server truth.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
	/// Platform token secret; callers must avoid logging it.
	pub token: TokenSecret,
	/// Instant the refresh run completed.
	#[serde(with = "time::serde::rfc3339")]
	pub refreshed_at: OffsetDateTime,
	/// Assumed expiry instant.
	#[serde(with = "time::serde::rfc3339")]
	pub expires_at: OffsetDateTime,
}
impl CredentialRecord {
	/// Validity window assumed for every issued token.
	pub const ASSUMED_VALIDITY: Duration = Duration::hours(24);

	/// Builds a record for a freshly issued token.
	pub fn issue(token: impl Into<String>, refreshed_at: OffsetDateTime) -> Self {
		Self {
			token: TokenSecret::new(token),
			refreshed_at,
			expires_at: refreshed_at + Self::ASSUMED_VALIDITY,
		}
	}

	/// Convenience helper that stamps the record with the current clock.
	pub fn issue_now(token: impl Into<String>) -> Self {
		Self::issue(token, OffsetDateTime::now_utc())
	}

	/// Returns `true` if the assumed validity window has elapsed at `instant`.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the assumed validity window has elapsed.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for CredentialRecord {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CredentialRecord")
			.field("token", &"<redacted>")
			.field("refreshed_at", &self.refreshed_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn issue_applies_the_assumed_validity_window() {
		let refreshed = macros::datetime!(2025-06-01 00:00 UTC);
		let record = CredentialRecord::issue("abcXYZ", refreshed);

		assert_eq!(record.token.expose(), "abcXYZ");
		assert_eq!(record.expires_at - record.refreshed_at, Duration::hours(24));
		assert_eq!(record.expires_at, macros::datetime!(2025-06-02 00:00 UTC));
	}

	#[test]
	fn serialized_shape_matches_the_stored_contract() {
		let record = CredentialRecord::issue("abcXYZ", macros::datetime!(2025-06-01 12:30 UTC));
		let value = serde_json::to_value(&record).expect("Record should serialize to JSON.");
		let object = value.as_object().expect("Record should serialize to a JSON object.");
		let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();

		keys.sort_unstable();

		assert_eq!(keys, ["expires_at", "refreshed_at", "token"]);
		assert_eq!(object["token"], "abcXYZ");
		assert_eq!(object["refreshed_at"], "2025-06-01T12:30:00Z");
		assert_eq!(object["expires_at"], "2025-06-02T12:30:00Z");
	}

	#[test]
	fn debug_redacts_the_token() {
		let record = CredentialRecord::issue_now("abcXYZ");
		let printed = format!("{record:?}");

		assert!(printed.contains("<redacted>"));
		assert!(!printed.contains("abcXYZ"));
	}

	#[test]
	fn expiry_predicates_follow_the_assumed_window() {
		let refreshed = macros::datetime!(2025-06-01 00:00 UTC);
		let record = CredentialRecord::issue("abcXYZ", refreshed);

		assert!(!record.is_expired_at(refreshed + Duration::hours(23)));
		assert!(record.is_expired_at(refreshed + Duration::hours(24)));
	}
}
