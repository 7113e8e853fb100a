//! Target-platform client: OTP dispatch and the signed email login.
//!
//! The platform wraps every payload in an application-level envelope whose
//! `code` field decides success independently of the HTTP status, so both
//! operations check the transport status first and the envelope second.

// self
use crate::{
	_prelude::*,
	error::TransportError,
	http::{self, ReqwestHttpClient},
	provider::PlatformDescriptor,
	sign,
};

const ENVELOPE_SUCCESS: i64 = 200;
// The dispatch endpoint accepts any signature; only the login is verified.
const DISPATCH_SIGN: &str = "any";

#[derive(Serialize)]
struct DispatchRequest<'a> {
	sign: &'a str,
	time: String,
	event: &'a str,
	clientparams: &'a str,
	email: &'a str,
	token: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
	captcha: &'a str,
	sign: String,
	time: String,
	clientparams: &'a str,
	email: &'a str,
}

#[derive(Deserialize)]
struct Envelope<T> {
	code: i64,
	#[serde(default)]
	msg: String,
	#[serde(default)]
	data: Option<T>,
}

#[derive(Default, Deserialize)]
struct LoginData {
	#[serde(default)]
	userinfo: Option<UserInfo>,
}

#[derive(Deserialize)]
struct UserInfo {
	#[serde(default)]
	token: String,
}

fn unix_millis_now() -> String {
	(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).to_string()
}

/// REST client for the target platform.
#[derive(Clone)]
pub struct PlatformClient {
	http_client: ReqwestHttpClient,
	descriptor: PlatformDescriptor,
}
impl PlatformClient {
	/// Creates a client with its own default transport.
	pub fn new(descriptor: PlatformDescriptor) -> Self {
		Self::with_http_client(descriptor, ReqwestHttpClient::default())
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		descriptor: PlatformDescriptor,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self { http_client, descriptor }
	}

	/// Returns the descriptor this client was built from.
	pub fn descriptor(&self) -> &PlatformDescriptor {
		&self.descriptor
	}

	/// Asks the platform to email an OTP code to the account address.
	///
	/// The request carries a placeholder signature and an empty login token;
	/// the dispatch endpoint accepts both.
	pub async fn request_otp_dispatch(&self) -> Result<()> {
		let endpoint = self.descriptor.dispatch_endpoint()?;
		let body = DispatchRequest {
			sign: DISPATCH_SIGN,
			time: unix_millis_now(),
			event: &self.descriptor.dispatch_event,
			clientparams: &self.descriptor.clientparams,
			email: &self.descriptor.email,
			token: "",
		};
		let response = self
			.http_client
			.post(endpoint)
			.json(&body)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();

		if !status.is_success() {
			return Err(Error::Dispatch { reason: format!("HTTP status {}", status.as_u16()) });
		}

		let envelope =
			http::read_json::<Envelope<serde_json::Value>>(response, "OTP dispatch").await?;

		if envelope.code != ENVELOPE_SUCCESS {
			return Err(Error::Dispatch { reason: envelope.msg });
		}

		Ok(())
	}

	/// Performs the signed login and returns the issued token.
	///
	/// The timestamp is generated fresh here and signed together with the
	/// code; the dispatch-stage timestamp is never reused.
	pub async fn login(&self, otp: &str) -> Result<String> {
		let endpoint = self.descriptor.login_endpoint()?;
		let time = unix_millis_now();
		let signature = sign::sign(
			[
				("captcha", otp),
				("clientparams", self.descriptor.clientparams.as_str()),
				("email", self.descriptor.email.as_str()),
				("time", time.as_str()),
			],
			self.descriptor.secret_key.expose(),
		);
		let body = LoginRequest {
			captcha: otp,
			sign: signature,
			time,
			clientparams: &self.descriptor.clientparams,
			email: &self.descriptor.email,
		};
		let response = self
			.http_client
			.post(endpoint)
			.json(&body)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();

		if !status.is_success() {
			return Err(Error::Login { reason: format!("HTTP status {}", status.as_u16()) });
		}

		let envelope = http::read_json::<Envelope<LoginData>>(response, "login").await?;

		if envelope.code != ENVELOPE_SUCCESS {
			return Err(Error::Login { reason: envelope.msg });
		}

		envelope
			.data
			.and_then(|data| data.userinfo)
			.map(|userinfo| userinfo.token)
			.filter(|token| !token.is_empty())
			.ok_or(Error::MissingToken)
	}
}
impl Debug for PlatformClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PlatformClient").field("descriptor", &self.descriptor).finish()
	}
}
