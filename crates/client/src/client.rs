//! HTTP client for the backend REST API
//!
//! All fee arithmetic and persistence happen on the backend; every method
//! here is a single-shot request with no retries. Error translation is
//! identical on every path: a non-2xx status or a `success: false` envelope
//! becomes a `ClientError` carrying the server's Korean message when it sent
//! one, else the generic fallback.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use perfee_types::{
	ApiEnvelope, BackendApi, BackendResult, CalculationMeta, CalculationRequest,
	CalculationResult, ClientError, Faq, FaqCategory, Industry, Inquiry, InquiryRequest, Notice,
	NoticePage, Popup, PopupsResponse, PressRelease, PressReleaseList, GENERIC_ERROR_MESSAGE,
};

const USER_AGENT: &str = concat!("perfee-web/", env!("CARGO_PKG_VERSION"));
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;
const MAX_IDLE_PER_HOST: usize = 10;
const KEEP_ALIVE_SECS: u64 = 90;

/// Pooled reqwest client bound to a single backend base URL.
#[derive(Debug, Clone)]
pub struct HttpBackendClient {
	http: Client,
	base_url: Url,
	request_timeout_ms: u64,
}

impl HttpBackendClient {
	/// Create a client with explicit timeouts (milliseconds).
	pub fn new(
		base_url: &str,
		request_timeout_ms: u64,
		connect_timeout_ms: u64,
	) -> Result<Self, ClientError> {
		let base_url = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl {
			url: base_url.to_string(),
		})?;

		let mut headers = header::HeaderMap::new();
		headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

		let http = ClientBuilder::new()
			.user_agent(USER_AGENT)
			.default_headers(headers)
			.timeout(Duration::from_millis(request_timeout_ms))
			.connect_timeout(Duration::from_millis(connect_timeout_ms))
			.pool_max_idle_per_host(MAX_IDLE_PER_HOST)
			.tcp_keepalive(Duration::from_secs(KEEP_ALIVE_SECS))
			.build()?;

		Ok(Self {
			http,
			base_url,
			request_timeout_ms,
		})
	}

	/// Create a client with default timeouts.
	pub fn from_base_url(base_url: &str) -> Result<Self, ClientError> {
		Self::new(
			base_url,
			DEFAULT_REQUEST_TIMEOUT_MS,
			DEFAULT_CONNECT_TIMEOUT_MS,
		)
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
		self.base_url
			.join(path)
			.map_err(|_| ClientError::InvalidBaseUrl {
				url: format!("{}{}", self.base_url, path),
			})
	}

	fn wire_error(&self, err: reqwest::Error) -> ClientError {
		if err.is_timeout() {
			ClientError::Timeout {
				timeout_ms: self.request_timeout_ms,
			}
		} else {
			ClientError::Network(err)
		}
	}

	/// Read the body and fail non-2xx responses with the server's message
	/// when the body carries one.
	async fn read_body(&self, response: reqwest::Response) -> BackendResult<String> {
		let status = response.status();
		let text = response.text().await.map_err(|e| self.wire_error(e))?;

		if status.is_success() {
			return Ok(text);
		}

		let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&text)
			.ok()
			.and_then(|env| env.error.and_then(|e| e.message))
			.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

		warn!(status = status.as_u16(), "backend request failed");
		Err(ClientError::Http {
			status: status.as_u16(),
			message,
		})
	}

	/// GET an endpoint that wraps its body in `{ success, data, error }`.
	async fn get_enveloped<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &[(&str, String)],
	) -> BackendResult<T> {
		let url = self.endpoint(path)?;
		debug!(%url, "GET (enveloped)");
		let response = self
			.http
			.get(url)
			.query(query)
			.send()
			.await
			.map_err(|e| self.wire_error(e))?;
		let body = self.read_body(response).await?;
		Ok(unwrap_envelope::<T>(&body)?.0)
	}

	/// GET an endpoint that returns its body bare (notices, press releases).
	async fn get_bare<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &[(&str, String)],
	) -> BackendResult<T> {
		let url = self.endpoint(path)?;
		debug!(%url, "GET (bare)");
		let response = self
			.http
			.get(url)
			.query(query)
			.send()
			.await
			.map_err(|e| self.wire_error(e))?;
		let body = self.read_body(response).await?;
		serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
			reason: e.to_string(),
		})
	}

	/// POST a JSON body to an enveloped endpoint, returning data and meta.
	async fn post_enveloped<B: Serialize, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> BackendResult<(T, Option<serde_json::Value>)> {
		let url = self.endpoint(path)?;
		debug!(%url, "POST (enveloped)");
		let response = self
			.http
			.post(url)
			.json(body)
			.send()
			.await
			.map_err(|e| self.wire_error(e))?;
		let text = self.read_body(response).await?;
		unwrap_envelope(&text)
	}
}

/// Parse an envelope body, enforcing `success` and the presence of `data`.
fn unwrap_envelope<T: DeserializeOwned>(
	body: &str,
) -> BackendResult<(T, Option<serde_json::Value>)> {
	let envelope: ApiEnvelope<T> =
		serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse {
			reason: e.to_string(),
		})?;

	if !envelope.success {
		return Err(ClientError::backend_with_fallback(
			envelope.error.and_then(|e| e.message),
		));
	}

	let data = envelope.data.ok_or_else(|| ClientError::InvalidResponse {
		reason: "data 필드가 없습니다".to_string(),
	})?;
	Ok((data, envelope.meta))
}

fn view_query(increment_views: bool) -> Vec<(&'static str, String)> {
	if increment_views {
		vec![("incrementViews", "true".to_string())]
	} else {
		Vec::new()
	}
}

#[async_trait]
impl BackendApi for HttpBackendClient {
	async fn list_industries(&self) -> BackendResult<Vec<Industry>> {
		self.get_enveloped("/api/industries", &[]).await
	}

	async fn list_faqs(&self, category: Option<FaqCategory>) -> BackendResult<Vec<Faq>> {
		let query: Vec<(&str, String)> = category
			.map(|c| vec![("category", c.as_str().to_string())])
			.unwrap_or_default();
		self.get_enveloped("/api/faqs", &query).await
	}

	async fn list_notices(&self, page: u32, limit: u32) -> BackendResult<NoticePage> {
		let query = vec![
			("page", page.to_string()),
			("limit", limit.to_string()),
		];
		self.get_bare("/api/notices", &query).await
	}

	async fn get_notice(&self, id: u64, increment_views: bool) -> BackendResult<Notice> {
		self.get_bare(&format!("/api/notices/{id}"), &view_query(increment_views))
			.await
	}

	async fn list_press_releases(&self) -> BackendResult<Vec<PressRelease>> {
		let list: PressReleaseList = self.get_bare("/api/press-releases", &[]).await?;
		Ok(list.press_releases)
	}

	async fn get_press_release(
		&self,
		id: u64,
		increment_views: bool,
	) -> BackendResult<PressRelease> {
		self.get_bare(
			&format!("/api/press-releases/{id}"),
			&view_query(increment_views),
		)
		.await
	}

	async fn active_popups(&self) -> BackendResult<Vec<Popup>> {
		let body: PopupsResponse = self.get_bare("/api/popups/active", &[]).await?;
		Ok(body.popups)
	}

	async fn submit_inquiry(&self, request: &InquiryRequest) -> BackendResult<Inquiry> {
		let (inquiry, _meta) = self.post_enveloped("/api/inquiries", request).await?;
		Ok(inquiry)
	}

	async fn calculate(
		&self,
		request: &CalculationRequest,
	) -> BackendResult<(CalculationResult, Option<CalculationMeta>)> {
		let path = format!("/api/calculate/{}", request.category().as_path());
		let (result, raw_meta): (CalculationResult, Option<serde_json::Value>) =
			self.post_enveloped(&path, &request.to_body()).await?;

		// Meta is informational only; a malformed one is dropped, not fatal.
		let meta = raw_meta.and_then(|value| {
			serde_json::from_value::<CalculationMeta>(value)
				.map_err(|e| warn!(error = %e, "discarding malformed calculation meta"))
				.ok()
		});

		Ok((result, meta))
	}

	async fn health_check(&self) -> bool {
		let Ok(url) = self.endpoint("/health") else {
			return false;
		};
		match self.http.get(url).send().await {
			Ok(response) => response.status().is_success(),
			Err(_) => false,
		}
	}
}
