//! Inquiry submission E2E tests

mod mocks;

use crate::mocks::TestServer;
use reqwest::Client;
use serde_json::json;

fn valid_form() -> serde_json::Value {
	json!({
		"name": "김철수",
		"phone": "010-1234-5678",
		"email": "chulsoo@example.com",
		"businessType": "karaoke",
		"message": "공연권료 납부 절차를 문의드립니다.",
		"privacyAgreed": true
	})
}

#[tokio::test]
async fn test_submit_inquiry() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/inquiries", server.base_url))
		.json(&valid_form())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 201);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["inquiry"]["name"], "김철수");
	assert!(body["inquiry"]["id"].as_u64().unwrap() > 0);

	server.abort();
}

#[tokio::test]
async fn test_submit_inquiry_without_consent_is_400() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let mut form = valid_form();
	form["privacyAgreed"] = json!(false);

	let resp = client
		.post(format!("{}/v1/inquiries", server.base_url))
		.json(&form)
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 400);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["error"], "VALIDATION_ERROR");
	assert_eq!(body["message"], "개인정보 수집 및 이용에 동의해주세요.");

	server.abort();
}

#[tokio::test]
async fn test_submit_inquiry_with_bad_email_is_400() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let mut form = valid_form();
	form["email"] = json!("not-an-email");

	let resp = client
		.post(format!("{}/v1/inquiries", server.base_url))
		.json(&form)
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 400);

	server.abort();
}

#[tokio::test]
async fn test_submit_inquiry_backend_failure_is_502() {
	let server = TestServer::spawn_failing("문의 접수에 실패했습니다.")
		.await
		.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.post(format!("{}/v1/inquiries", server.base_url))
		.json(&valid_form())
		.send()
		.await
		.unwrap();
	assert_eq!(resp.status(), 502);

	let body: serde_json::Value = resp.json().await.unwrap();
	assert_eq!(body["message"], "문의 접수에 실패했습니다.");

	server.abort();
}
