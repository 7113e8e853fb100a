// crates.io
use httpmock::prelude::*;
// self
use otp_broker::{
	error::Error,
	platform::PlatformClient,
	provider::PlatformDescriptor,
	url::Url,
};

fn build_client(server: &MockServer) -> PlatformClient {
	let base = Url::parse(&server.base_url()).expect("Mock server URL should parse successfully.");
	let descriptor = PlatformDescriptor::builder(base)
		.email("bot@example.com")
		.clientparams("cp-1")
		.secret_key("sk-test")
		.build()
		.expect("Platform descriptor should build successfully.");

	PlatformClient::new(descriptor)
}

#[tokio::test]
async fn dispatch_succeeds_on_envelope_success() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/ems/send");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"code":200,"msg":"ok"}"#);
		})
		.await;

	client.request_otp_dispatch().await.expect("Dispatch should succeed.");
	mock.assert_async().await;
}

#[tokio::test]
async fn dispatch_maps_http_rejections() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/ems/send");
			then.status(503);
		})
		.await;
	let err = client.request_otp_dispatch().await.expect_err("Dispatch should fail.");

	assert!(matches!(&err, Error::Dispatch { reason } if reason.contains("503")));
}

#[tokio::test]
async fn dispatch_maps_envelope_rejections_independently_of_http_status() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/ems/send");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"code":500,"msg":"limit reached"}"#);
		})
		.await;
	let err = client.request_otp_dispatch().await.expect_err("Dispatch should fail.");

	assert!(matches!(&err, Error::Dispatch { reason } if reason == "limit reached"));
}

#[tokio::test]
async fn login_returns_the_issued_token() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/email/login");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"code":200,"msg":"ok","data":{"userinfo":{"token":"abcXYZ"}}}"#);
		})
		.await;
	let token = client.login("482913").await.expect("Login should succeed.");

	mock.assert_async().await;

	assert_eq!(token, "abcXYZ");
}

#[tokio::test]
async fn login_maps_envelope_rejections() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/email/login");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"code":403,"msg":"captcha mismatch"}"#);
		})
		.await;
	let err = client.login("482913").await.expect_err("Login should fail.");

	assert!(matches!(&err, Error::Login { reason } if reason == "captcha mismatch"));
}

#[tokio::test]
async fn login_requires_the_nested_token() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/email/login");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"code":200,"msg":"ok","data":{}}"#);
		})
		.await;
	let err = client.login("482913").await.expect_err("Login should fail.");

	assert!(matches!(err, Error::MissingToken));
}
