//! Wire-level tests for `HttpBackendClient` against a fake backend
//!
//! The fake is a plain axum app on an ephemeral port that speaks the
//! backend's two body shapes (enveloped and bare).

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;

use perfee_client::HttpBackendClient;
use perfee_types::{BackendApi, CalculationRequest, ClientError, FeeCategory, InquiryRequest};

async fn spawn_fake_backend() -> String {
	let app = Router::new()
		.route(
			"/api/industries",
			get(|| async {
				Json(json!({
					"success": true,
					"data": [
						{ "id": 1, "code": "karaoke", "name": "노래연습장", "monthlyFeeFrom": 11000 },
						{ "id": 2, "code": "hotel", "name": "호텔·콘도" }
					]
				}))
			}),
		)
		.route(
			"/api/faqs",
			get(|Query(params): Query<HashMap<String, String>>| async move {
				let category = params.get("category").cloned().unwrap_or_default();
				Json(json!({
					"success": true,
					"data": [
						{ "id": 7, "category": category, "question": "공연권료란 무엇인가요?", "answer": "...", "displayOrder": 1 }
					]
				}))
			}),
		)
		.route(
			"/api/notices",
			get(|Query(params): Query<HashMap<String, String>>| async move {
				let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
				let limit: u32 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(10);
				Json(json!({
					"notices": [
						{ "id": 3, "title": "설 연휴 고객센터 휴무 안내", "content": "...", "pinned": true, "views": 120, "createdAt": "2025-01-15T09:00:00Z" }
					],
					"pagination": { "page": page, "limit": limit, "total": 1, "totalPages": 1 }
				}))
			}),
		)
		.route(
			"/api/notices/{id}",
			get(
				|Path(id): Path<u64>, Query(params): Query<HashMap<String, String>>| async move {
					let incremented = params.get("incrementViews").map(String::as_str) == Some("true");
					let views = if incremented { 121 } else { 120 };
					Json(json!({
						"id": id, "title": "설 연휴 고객센터 휴무 안내", "content": "...",
						"views": views, "createdAt": "2025-01-15T09:00:00Z"
					}))
				},
			),
		)
		.route(
			"/api/popups/active",
			get(|| async {
				Json(json!({
					"popups": [
						{
							"id": 1, "title": "신규 납부자 안내",
							"imageUrl": "/images/popup-guide.png",
							"startsAt": "2025-01-01T00:00:00Z",
							"endsAt": "2025-12-31T00:00:00Z"
						}
					]
				}))
			}),
		)
		.route(
			"/api/calculate/karaoke",
			post(|Json(body): Json<Value>| async move {
				assert_eq!(body, json!({ "rooms": 12 }));
				Json(json!({
					"success": true,
					"data": { "monthlyFee": 28000, "koscapShare": 4200, "tier": "10실 초과" },
					"meta": { "basis": "방 수 기준 정액" }
				}))
			}),
		)
		.route(
			"/api/calculate/golf",
			post(|| async {
				Json(json!({
					"success": false,
					"error": { "message": "해당 조건의 요금표를 찾을 수 없습니다." }
				}))
			}),
		)
		.route(
			"/api/inquiries",
			post(|| async {
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					Json(json!({
						"success": false,
						"error": { "message": "문의 접수에 실패했습니다." }
					})),
				)
			}),
		)
		.route("/health", get(|| async { "OK" }));

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	format!("http://{addr}")
}

fn client_for(base_url: &str) -> HttpBackendClient {
	HttpBackendClient::from_base_url(base_url).expect("valid base url")
}

#[tokio::test]
async fn unwraps_enveloped_industries() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let industries = client.list_industries().await.unwrap();
	assert_eq!(industries.len(), 2);
	assert_eq!(industries[0].code, "karaoke");
	assert_eq!(industries[0].monthly_fee_from, Some(11_000));
	assert_eq!(industries[1].monthly_fee_from, None);
}

#[tokio::test]
async fn forwards_faq_category_filter() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let faqs = client
		.list_faqs(Some(perfee_types::FaqCategory::Payment))
		.await
		.unwrap();
	assert_eq!(faqs.len(), 1);
	assert_eq!(faqs[0].category, perfee_types::FaqCategory::Payment);
}

#[tokio::test]
async fn parses_bare_notice_page() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let page = client.list_notices(2, 5).await.unwrap();
	assert_eq!(page.pagination.page, 2);
	assert_eq!(page.pagination.limit, 5);
	assert!(page.notices[0].pinned);
}

#[tokio::test]
async fn notice_detail_controls_view_increment() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let counted = client.get_notice(3, true).await.unwrap();
	assert_eq!(counted.views, 121);

	let preview = client.get_notice(3, false).await.unwrap();
	assert_eq!(preview.views, 120);
}

#[tokio::test]
async fn parses_bare_popup_list() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let popups = client.active_popups().await.unwrap();
	assert_eq!(popups.len(), 1);
	assert_eq!(popups[0].image_url, "/images/popup-guide.png");
	assert!(popups[0].link_url.is_none());
}

#[tokio::test]
async fn calculate_returns_result_and_meta() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let request = CalculationRequest::from_category_value(
		FeeCategory::Karaoke,
		json!({ "rooms": 12 }),
	)
	.unwrap();

	let (result, meta) = client.calculate(&request).await.unwrap();
	assert_eq!(result.monthly_fee, 28_000);
	assert_eq!(result.koscap_share, 4_200);
	assert_eq!(meta.unwrap().basis.as_deref(), Some("방 수 기준 정액"));
}

#[tokio::test]
async fn failed_envelope_carries_server_message() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let request =
		CalculationRequest::from_category_value(FeeCategory::Golf, json!({ "holes": 18 })).unwrap();

	let err = client.calculate(&request).await.unwrap_err();
	match err {
		ClientError::Backend { message } => {
			assert_eq!(message, "해당 조건의 요금표를 찾을 수 없습니다.")
		},
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn non_2xx_becomes_http_error_with_server_message() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let request = InquiryRequest {
		name: "김철수".to_string(),
		phone: "010-1234-5678".to_string(),
		email: "chulsoo@example.com".to_string(),
		business_type: None,
		message: "문의드립니다.".to_string(),
		privacy_agreed: true,
	};

	let err = client.submit_inquiry(&request).await.unwrap_err();
	match err {
		ClientError::Http { status, message } => {
			assert_eq!(status, 500);
			assert_eq!(message, "문의 접수에 실패했습니다.");
		},
		other => panic!("unexpected error: {other:?}"),
	}
}

#[tokio::test]
async fn missing_route_maps_to_404_with_fallback_message() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);

	let err = client.get_press_release(99, false).await.unwrap_err();
	assert_eq!(err.status(), Some(404));
	assert!(err.is_not_found());
}

#[tokio::test]
async fn health_check_reports_reachable_backend() {
	let base = spawn_fake_backend().await;
	let client = client_for(&base);
	assert!(client.health_check().await);

	let dead = client_for("http://127.0.0.1:1");
	assert!(!dead.health_check().await);
}

#[tokio::test]
async fn rejects_invalid_base_url() {
	assert!(matches!(
		HttpBackendClient::from_base_url("not a url"),
		Err(ClientError::InvalidBaseUrl { .. })
	));
}
