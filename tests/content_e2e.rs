//! Content API E2E tests
//!
//! Covers pages, industries, FAQs, notices, press releases and popups over
//! the full router with the mock backend.

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;

#[tokio::test]
async fn test_get_pages_and_detail() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/pages", server.base_url))
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());
	let body: serde_json::Value = resp.json().await.unwrap();
	let pages = body["pages"].as_array().unwrap();
	assert!(!pages.is_empty());

	let slug = pages[0]["slug"].as_str().unwrap();
	let resp = client
		.get(format!("{}/v1/pages/{}", server.base_url, slug))
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());
	let page: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(page["slug"], slug);
	assert!(page["sections"].as_array().unwrap().len() > 0);

	server.abort();
}

#[tokio::test]
async fn test_get_unknown_page_is_404() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/pages/careers", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "PAGE_NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_get_industries() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/industries", server.base_url))
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	let industries = body["industries"].as_array().unwrap();
	assert_eq!(body["total"], industries.len() as u64);
	assert_eq!(industries[0]["code"], "karaoke");
	assert_eq!(industries[0]["name"], "노래연습장");

	server.abort();
}

#[tokio::test]
async fn test_get_faqs_filtered_by_category() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/faqs?category=payment", server.base_url))
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	let faqs = body["faqs"].as_array().unwrap();
	assert_eq!(faqs.len(), 1);
	assert_eq!(faqs[0]["category"], "payment");
	assert_eq!(body["category"], "payment");

	server.abort();
}

#[tokio::test]
async fn test_get_faqs_unknown_category_is_400() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/faqs?category=membership", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 400);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "VALIDATION_ERROR");
	assert!(body["message"].as_str().unwrap().contains("membership"));

	server.abort();
}

#[tokio::test]
async fn test_get_notices_clamps_pagination() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	// limit=500 exceeds the cap and must be clamped before the upstream call
	let resp = client
		.get(format!("{}/v1/notices?page=0&limit=500", server.base_url))
		.send()
		.await
		.unwrap();
	assert!(resp.status().is_success());

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["pagination"]["page"], 1);
	assert_eq!(body["pagination"]["limit"], 50);
	assert!(body["notices"].as_array().unwrap().len() > 0);

	server.abort();
}

#[tokio::test]
async fn test_get_notice_detail_increments_views() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let counted: serde_json::Value = client
		.get(format!("{}/v1/notices/2", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let previewed: serde_json::Value = client
		.get(format!("{}/v1/notices/2?preview=true", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();

	assert_eq!(
		counted["views"].as_u64().unwrap(),
		previewed["views"].as_u64().unwrap() + 1
	);

	server.abort();
}

#[tokio::test]
async fn test_get_notice_not_found() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/notices/999", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "NOT_FOUND");

	server.abort();
}

#[tokio::test]
async fn test_get_press_releases_and_detail() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!("{}/v1/press-releases", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let list = body["pressReleases"].as_array().unwrap();
	assert_eq!(list.len(), 2);

	let id = list[0]["id"].as_u64().unwrap();
	let detail: serde_json::Value = client
		.get(format!("{}/v1/press-releases/{}", server.base_url, id))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	assert_eq!(detail["id"].as_u64().unwrap(), id);

	server.abort();
}

#[tokio::test]
async fn test_get_active_popups() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let body: serde_json::Value = client
		.get(format!("{}/v1/popups/active", server.base_url))
		.send()
		.await
		.unwrap()
		.json()
		.await
		.unwrap();
	let popups = body["popups"].as_array().unwrap();
	assert_eq!(popups.len(), 1);
	assert!(popups[0]["imageUrl"].as_str().unwrap().contains("popup"));

	server.abort();
}

#[tokio::test]
async fn test_backend_failure_surfaces_korean_message() {
	let server = TestServer::spawn_failing("서비스 점검 중입니다.")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(format!("{}/v1/industries", server.base_url))
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 502);
	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "BACKEND_ERROR");
	assert_eq!(body["message"], "서비스 점검 중입니다.");

	server.abort();
}
