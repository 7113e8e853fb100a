//! Shared HTTP transport plumbing for the broker's REST collaborators.
//!
//! Both collaborators speak plain JSON over HTTP, so the crate keeps a single
//! thin [`ReqwestHttpClient`] wrapper plus one decoding helper that annotates
//! malformed bodies with the path that failed to parse.

// std
use std::ops::Deref;
// crates.io
use reqwest::Response;
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, error::TransportError};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Collaborator endpoints return their results directly, so custom
/// clients should keep redirect following disabled.
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Reads and decodes a JSON response body, labeling decode failures with the
/// endpoint they came from.
pub(crate) async fn read_json<T>(response: Response, endpoint: &'static str) -> Result<T>
where
	T: DeserializeOwned,
{
	let bytes = response.bytes().await.map_err(TransportError::from)?;
	let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|e| Error::ResponseParse { endpoint, source: e })
}
