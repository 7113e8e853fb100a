// crates.io
use httpmock::prelude::*;
// self
use otp_broker::{
	error::Error,
	mailbox::MailboxClient,
	provider::MailboxDescriptor,
	url::Url,
};

fn build_client(server: &MockServer) -> MailboxClient {
	let base = Url::parse(&server.base_url()).expect("Mock server URL should parse successfully.");
	let descriptor = MailboxDescriptor::builder(base)
		.address("bot@mail.example")
		.password("mailbox-pass")
		.build()
		.expect("Mailbox descriptor should build successfully.");

	MailboxClient::new(descriptor)
}

#[tokio::test]
async fn authenticate_returns_the_session_bearer() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"tA"}"#);
		})
		.await;
	let session = client.authenticate().await.expect("Authentication should succeed.");

	mock.assert_async().await;

	assert_eq!(session.bearer(), "tA");
}

#[tokio::test]
async fn authenticate_maps_rejections_to_the_http_status() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(401);
		})
		.await;
	let err = client.authenticate().await.expect_err("Authentication should fail.");

	assert!(matches!(err, Error::Authentication { status: 401 }));
}

#[tokio::test]
async fn authenticate_surfaces_malformed_bodies() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).header("content-type", "application/json").body("not json");
		})
		.await;
	let err = client.authenticate().await.expect_err("Authentication should fail.");

	assert!(matches!(err, Error::ResponseParse { endpoint: "mailbox token", .. }));
}

#[tokio::test]
async fn list_messages_defaults_to_an_empty_page() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"tA"}"#);
		})
		.await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/messages").header("authorization", "Bearer tA");
			then.status(200).header("content-type", "application/json").body("{}");
		})
		.await;
	let session = client.authenticate().await.expect("Authentication should succeed.");
	let messages = client.list_messages(&session).await.expect("Listing should succeed.");

	mock.assert_async().await;

	assert!(messages.is_empty());
}

#[tokio::test]
async fn list_messages_maps_rejections_to_the_http_status() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"tA"}"#);
		})
		.await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/messages");
			then.status(500);
		})
		.await;
	let session = client.authenticate().await.expect("Authentication should succeed.");
	let err = client.list_messages(&session).await.expect_err("Listing should fail.");

	assert!(matches!(err, Error::Fetch { status: 500 }));
}

#[tokio::test]
async fn list_messages_keeps_the_provider_order() {
	let server = MockServer::start_async().await;
	let client = build_client(&server);
	let _auth_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"tA"}"#);
		})
		.await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/messages");
			then.status(200).header("content-type", "application/json").body(
				r#"{"hydra:member":[{"id":"m-2","intro":"newest"},{"id":"m-1","intro":"older"}]}"#,
			);
		})
		.await;
	let session = client.authenticate().await.expect("Authentication should succeed.");
	let messages = client.list_messages(&session).await.expect("Listing should succeed.");

	assert_eq!(messages.len(), 2);
	assert_eq!(messages[0].intro, "newest");
}
