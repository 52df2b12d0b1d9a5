// std
use std::{sync::Arc, time::Duration};
// crates.io
use httpmock::prelude::*;
// self
use shopease_api_client::{
	ClientConfig, Error, HttpClient,
	auth::{MemoryAuthProvider, StaticSession},
	error::TransportError,
	http::{ReqwestTransport, RequestContext},
	http_types::StatusCode,
	interceptor::Pipeline,
	obs::{LogKind, MemoryLogSink},
};

fn build_client(
	config: ClientConfig,
	provider: MemoryAuthProvider,
) -> (HttpClient<ReqwestTransport>, MemoryLogSink) {
	let sink = MemoryLogSink::default();
	let transport =
		ReqwestTransport::new(&config).expect("Reqwest transport should build for tests.");
	let client = HttpClient::with_transport(
		config,
		transport,
		Pipeline::standard(provider, Arc::new(sink.clone())),
	);

	(client, sink)
}

fn config_for(server: &MockServer) -> ClientConfig {
	ClientConfig::builder()
		.base_url(server.base_url())
		.build()
		.expect("Mock server base URL should be valid.")
}

#[tokio::test]
async fn signed_in_get_sends_bearer_and_default_headers() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/products/")
				.query_param("category", "lighting")
				.header("authorization", "Bearer live-token")
				.header("content-type", "application/json");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":"p-1","name":"Desk Lamp","price":39.5}]"#);
		})
		.await;
	let (client, sink) = build_client(
		config_for(&server),
		MemoryAuthProvider::signed_in(StaticSession::new("live-token")),
	);
	let response = client
		.send(RequestContext::get("/products/").with_query("category", "lighting"))
		.await
		.expect("Authenticated product listing should succeed.");

	mock.assert_async().await;

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.text(), r#"[{"id":"p-1","name":"Desk Lamp","price":39.5}]"#);

	let products: Vec<serde_json::Value> =
		response.json().expect("Product listing should decode as JSON.");

	assert_eq!(products[0]["name"], "Desk Lamp");
	assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn post_json_sends_encoded_body() {
	let server = MockServer::start_async().await;
	let order = serde_json::json!({
		"items": [{ "product_id": "p-1", "quantity": 2 }],
		"shipping_address": "1 Main St",
	});
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/orders/").json_body(order.clone());
			then.status(201).json_body(serde_json::json!({ "id": "o-1", "status": "pending" }));
		})
		.await;
	let (client, _sink) = build_client(
		config_for(&server),
		MemoryAuthProvider::signed_in(StaticSession::new("buyer")),
	);
	let response =
		client.post_json("/orders/", &order).await.expect("Order creation should succeed.");

	mock.assert_async().await;

	assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn server_error_is_surfaced_with_body_and_logged_once() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/products/p-9");
			then.status(500).body(r#"{"detail":"Error deleting product"}"#);
		})
		.await;
	let (client, sink) = build_client(config_for(&server), MemoryAuthProvider::default());
	let err = client.delete("/products/p-9").await.expect_err("HTTP 500 should surface.");

	mock.assert_async().await;

	match &err {
		Error::ServerResponse { response } => {
			assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
			assert_eq!(response.text(), r#"{"detail":"Error deleting product"}"#);
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(sink.kinds(), vec![LogKind::ApiError]);
}

#[tokio::test]
async fn slow_server_times_out_as_network_failure() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/orders/");
			then.status(200).delay(Duration::from_millis(500)).body("[]");
		})
		.await;

	let config = ClientConfig::builder()
		.base_url(server.base_url())
		.timeout(Duration::from_millis(50))
		.build()
		.expect("Config with short timeout should build.");
	let (client, sink) = build_client(config, MemoryAuthProvider::default());
	let err = client.get("/orders/").await.expect_err("Delayed response should time out.");

	assert!(matches!(err, Error::Transport(TransportError::Timeout { .. })), "{err:?}");
	assert!(err.response().is_none());
	assert_eq!(sink.kinds(), vec![LogKind::ApiError, LogKind::NetworkError]);
}

#[tokio::test]
async fn per_request_timeout_overrides_config() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/users/me");
			then.status(200).delay(Duration::from_millis(300)).body("{}");
		})
		.await;

	let (client, _sink) = build_client(config_for(&server), MemoryAuthProvider::default());
	let err = client
		.send(RequestContext::get("/users/me").with_timeout(Duration::from_millis(30)))
		.await
		.expect_err("Per-request timeout should apply.");

	assert!(err.is_network());
}

#[tokio::test]
async fn unreachable_server_is_a_network_failure() {
	let config = ClientConfig::builder()
		.base_url("http://127.0.0.1:1")
		.build()
		.expect("Loopback base URL should be valid.");
	let (client, sink) = build_client(config, MemoryAuthProvider::default());
	let err = client.get("/products/").await.expect_err("Closed port should refuse connections.");

	assert!(err.is_network(), "{err:?}");
	assert!(err.response().is_none());
	assert_eq!(sink.kinds(), vec![LogKind::ApiError, LogKind::NetworkError]);
}

#[tokio::test]
async fn standard_client_uses_reqwest_transport() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/");
			then.status(200).body(r#"{"message":"Welcome to ShopEase API"}"#);
		})
		.await;
	let client = HttpClient::new(config_for(&server), MemoryAuthProvider::default())
		.expect("Standard client should build.");
	let response = client.get("").await.expect("Root endpoint should succeed.");

	mock.assert_async().await;

	assert_eq!(response.text(), r#"{"message":"Welcome to ShopEase API"}"#);
	assert_eq!(client.pipeline().request_stage_names(), vec!["auth_decorator"]);
}
