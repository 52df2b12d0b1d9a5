//! Demonstrates the standard client against a mock ShopEase backend: anonymous browsing, an
//! authenticated order, and a failed request whose error is logged and surfaced.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use shopease_api_client::{
	ClientConfig, HttpClient,
	auth::{MemoryAuthProvider, StaticSession},
	http::ReqwestTransport,
	interceptor::Pipeline,
	obs::MemoryLogSink,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let products_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/products/");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":"p-1","name":"Desk Lamp","price":39.5}]"#);
		})
		.await;
	let orders_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/orders/").header("authorization", "Bearer demo-id-token");
			then.status(200).body(r#"{"id":"o-1","status":"pending"}"#);
		})
		.await;
	let config = ClientConfig::builder().base_url(server.base_url()).build()?;
	let provider = MemoryAuthProvider::default();
	let sink = MemoryLogSink::default();
	let transport = ReqwestTransport::new(&config)?;
	let client = <HttpClient<ReqwestTransport>>::with_transport(
		config,
		transport,
		Pipeline::standard(provider.clone(), Arc::new(sink.clone())),
	);
	let products = client.get("/products/").await?;

	println!("Anonymous product listing: {}.", products.text());

	provider.sign_in(StaticSession::new("demo-id-token"));

	let order = client
		.post_json("/orders/", &serde_json::json!({ "items": [{ "product_id": "p-1", "quantity": 1 }] }))
		.await?;

	println!("Authenticated order: {}.", order.text());

	let missing = client.get("/orders/unknown").await;

	println!("Unmatched route surfaced: {}.", missing.is_err());

	for line in sink.lines() {
		println!("[{}] {}", line.kind, line.message);
	}

	products_mock.assert_async().await;
	orders_mock.assert_async().await;

	Ok(())
}
