//! Broker-wide error types shared across clients, flows, and stores.

// self
use crate::_prelude::*;

/// Broker-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical broker error exposed by public APIs.
///
/// Every stage error is fatal to the run it happened in; nothing is caught or
/// retried internally, so callers always see the original failure.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// No OTP code could be located for this run.
	#[error(transparent)]
	OtpNotFound(#[from] OtpNotFoundError),

	/// Mailbox credentials were rejected.
	#[error("Mailbox authentication failed with HTTP status {status}.")]
	Authentication {
		/// HTTP status returned by the mailbox token endpoint.
		status: u16,
	},
	/// Mailbox listing failed at the HTTP layer.
	#[error("Mailbox listing failed with HTTP status {status}.")]
	Fetch {
		/// HTTP status returned by the mailbox messages endpoint.
		status: u16,
	},
	/// Platform refused to dispatch the OTP email.
	#[error("OTP dispatch was rejected: {reason}.")]
	Dispatch {
		/// Platform- or broker-supplied reason string.
		reason: String,
	},
	/// Platform rejected the signed login.
	#[error("Login was rejected: {reason}.")]
	Login {
		/// Platform- or broker-supplied reason string.
		reason: String,
	},
	/// Platform accepted the login but omitted the issued token.
	#[error("Login response is missing the issued token.")]
	MissingToken,
	/// A collaborator answered with JSON this crate could not decode.
	#[error("The {endpoint} response returned malformed JSON.")]
	ResponseParse {
		/// Endpoint label identifying which body failed to decode.
		endpoint: &'static str,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Reasons a refresh run could not come up with an OTP code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum OtpNotFoundError {
	/// The mailbox listing came back empty.
	#[error("The mailbox returned no messages.")]
	EmptyMailbox,
	/// The newest message carries no six-digit code.
	#[error("No OTP code was found in the message preview.")]
	CodeMissing,
}

/// Configuration and validation failures raised by the broker.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A descriptor base URL produced an invalid endpoint.
	#[error("Descriptor produced an invalid endpoint URL.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Descriptor builder validation failed.
	#[error(transparent)]
	Descriptor(#[from] crate::provider::DescriptorError),
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling a collaborator endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred during transport.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
