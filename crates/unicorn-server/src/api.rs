// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::any::Any;
use std::sync::Arc;

use axum::{
	middleware,
	response::{IntoResponse, Response},
	routing::{get, post},
	Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use unicorn_server_config::ServerConfig;
use unicorn_server_llm_gemini::{GeminiClient, DEFAULT_MODEL};
use unicorn_server_search_naver::NaverClient;
use unicorn_server_video_youtube::YouTubeClient;

use crate::{cors::cors_middleware, error::ServerError, routes};

/// Shared, immutable server state. A `None` client means that provider has no
/// credentials and its routes answer `unconfigured`.
#[derive(Clone, Default)]
pub struct AppState {
	pub naver_client: Option<Arc<NaverClient>>,
	pub youtube_client: Option<Arc<YouTubeClient>>,
	pub gemini_client: Option<Arc<GeminiClient>>,
}

/// Build provider clients for every provider that has credentials.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let providers = &config.providers;

	let naver_client = match (&providers.naver.client_id, &providers.naver.client_secret) {
		(Some(id), Some(secret)) => match NaverClient::new(id.clone(), secret.clone()) {
			Ok(client) => {
				tracing::info!("Naver configured, creating client");
				Some(Arc::new(client))
			}
			Err(e) => {
				tracing::warn!(error = %e, "Failed to create Naver client");
				None
			}
		},
		_ => {
			tracing::info!("Naver not configured");
			None
		}
	};

	let youtube_client = match &providers.youtube.api_key {
		Some(api_key) => match YouTubeClient::new(api_key.clone()) {
			Ok(client) => {
				tracing::info!("YouTube configured, creating client");
				Some(Arc::new(client))
			}
			Err(e) => {
				tracing::warn!(error = %e, "Failed to create YouTube client");
				None
			}
		},
		None => {
			tracing::info!("YouTube not configured");
			None
		}
	};

	let gemini_client = match &providers.gemini.api_key {
		Some(api_key) => {
			let model = providers.gemini.model.as_deref().unwrap_or(DEFAULT_MODEL);
			match GeminiClient::new(api_key.clone(), model) {
				Ok(client) => {
					tracing::info!(model, "Gemini configured, creating client");
					Some(Arc::new(client))
				}
				Err(e) => {
					tracing::warn!(error = %e, "Failed to create Gemini client");
					None
				}
			}
		}
		None => {
			tracing::info!("Gemini not configured");
			None
		}
	};

	AppState {
		naver_client,
		youtube_client,
		gemini_client,
	}
}

/// Turn a handler panic into the generic `internal_error` envelope. The panic
/// payload is logged, never returned.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
	let detail = panic
		.downcast_ref::<&str>()
		.map(|s| s.to_string())
		.or_else(|| panic.downcast_ref::<String>().cloned())
		.unwrap_or_else(|| "non-string panic payload".to_string());
	tracing::error!(panic = %detail, "request handler panicked");
	ServerError::Internal("unexpected server failure".to_string()).into_response()
}

/// Panic recovery inside the CORS layer, so recovered responses still carry
/// the cross-origin headers.
fn with_middleware<S>(router: Router<S>) -> Router<S>
where
	S: Clone + Send + Sync + 'static,
{
	router
		.layer(CatchPanicLayer::custom(panic_response))
		.layer(middleware::from_fn(cors_middleware))
}

/// Routes plus the CORS/preflight and panic layers. Tracing is added by the
/// binary.
pub fn create_router(state: AppState) -> Router {
	let router = Router::new()
		.route("/health", get(routes::health::health_check))
		.route(
			"/api/naver-search",
			get(routes::naver::naver_search).fallback(routes::method_not_allowed),
		)
		.route(
			"/api/youtube-search",
			get(routes::youtube::youtube_search).fallback(routes::method_not_allowed),
		)
		.route(
			"/api/youtube-details",
			get(routes::youtube::youtube_details).fallback(routes::method_not_allowed),
		)
		.route(
			"/api/gemini-generate",
			post(routes::gemini::gemini_generate).fallback(routes::method_not_allowed),
		)
		.fallback(routes::not_found);

	with_middleware(router).with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::{to_bytes, Body},
		http::{Request, StatusCode},
	};
	use serde_json::{json, Value};
	use tower::ServiceExt;
	use unicorn_common_config::Secret;
	use wiremock::matchers::{method, path, query_param};
	use wiremock::{Mock, MockServer, ResponseTemplate};

	async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
		let response = app.oneshot(request).await.unwrap();
		let status = response.status();
		let headers = response.headers().clone();
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		let value = if body.is_empty() {
			Value::Null
		} else {
			serde_json::from_slice(&body).unwrap()
		};
		(status, headers, value)
	}

	fn get_request(uri: &str) -> Request<Body> {
		Request::builder().uri(uri).body(Body::empty()).unwrap()
	}

	fn state_for(server: &MockServer) -> AppState {
		AppState {
			naver_client: Some(Arc::new(
				NaverClient::new("naver-id", Secret::new("naver-secret".to_string()))
					.unwrap()
					.with_base_url(format!("{}/v1/search/webkr", server.uri())),
			)),
			youtube_client: Some(Arc::new(
				YouTubeClient::new(Secret::new("yt-key".to_string()))
					.unwrap()
					.with_base_url(format!("{}/youtube/v3", server.uri())),
			)),
			gemini_client: Some(Arc::new(
				GeminiClient::new(Secret::new("gm-key".to_string()), DEFAULT_MODEL)
					.unwrap()
					.with_base_url(format!("{}/v1beta/models", server.uri())),
			)),
		}
	}

	#[tokio::test]
	async fn test_health_reports_configured_providers() {
		let app = create_router(AppState::default());
		let (status, _, body) = send(app, get_request("/health")).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["status"], "ok");
		assert_eq!(body["providers"]["naver"], false);
		assert_eq!(body["providers"]["gemini"], false);
	}

	#[tokio::test]
	async fn test_handler_panic_becomes_internal_error_with_cors_headers() {
		async fn explode() -> &'static str {
			panic!("handler exploded")
		}

		let app = with_middleware(Router::new().route("/explode", get(explode)));
		let (status, headers, body) = send(app, get_request("/explode")).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body["error"], "internal_error");
		assert!(!body["message"].as_str().unwrap().contains("exploded"));
		assert_eq!(headers["access-control-allow-origin"], "*");
	}

	#[tokio::test]
	async fn test_preflight_short_circuits_with_cors_headers() {
		let app = create_router(AppState::default());
		let request = Request::builder()
			.method("OPTIONS")
			.uri("/api/naver-search")
			.body(Body::empty())
			.unwrap();

		let (status, headers, body) = send(app, request).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, Value::Null);
		assert_eq!(headers["access-control-allow-origin"], "*");
		assert_eq!(headers["access-control-allow-methods"], "GET,OPTIONS,POST");
		assert_eq!(headers["access-control-allow-credentials"], "true");
	}

	#[tokio::test]
	async fn test_missing_query_is_bad_request_without_provider_call() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.respond_with(ResponseTemplate::new(200))
			.expect(0)
			.mount(&server)
			.await;

		for uri in [
			"/api/naver-search",
			"/api/naver-search?query=%20%20",
			"/api/youtube-search",
			"/api/youtube-details",
		] {
			let app = create_router(state_for(&server));
			let (status, headers, body) = send(app, get_request(uri)).await;
			assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
			assert_eq!(body["error"], "bad_request");
			assert_eq!(headers["access-control-allow-origin"], "*");
		}
	}

	#[tokio::test]
	async fn test_wrong_method_is_method_not_allowed() {
		let app = create_router(AppState::default());
		let request = Request::builder()
			.method("POST")
			.uri("/api/naver-search?query=x")
			.body(Body::empty())
			.unwrap();
		let (status, _, body) = send(app, request).await;
		assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
		assert_eq!(body["error"], "method_not_allowed");

		let app = create_router(AppState::default());
		let (status, _, _) = send(app, get_request("/api/gemini-generate")).await;
		assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
	}

	#[tokio::test]
	async fn test_unconfigured_provider() {
		let app = create_router(AppState::default());
		let (status, _, body) = send(app, get_request("/api/youtube-search?query=x")).await;

		assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
		assert_eq!(body["error"], "unconfigured");
	}

	#[tokio::test]
	async fn test_naver_success_is_relayed_verbatim() {
		let server = MockServer::start().await;
		let envelope = json!({ "items": [{ "title": "<b>통일</b>", "description": "d", "link": "l" }] });
		Mock::given(method("GET"))
			.and(path("/v1/search/webkr"))
			.and(query_param("query", "통일"))
			.respond_with(ResponseTemplate::new(200).set_body_json(envelope.clone()))
			.mount(&server)
			.await;

		let app = create_router(state_for(&server));
		let (status, _, body) = send(
			app,
			get_request("/api/naver-search?query=%ED%86%B5%EC%9D%BC"),
		)
		.await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, envelope);
	}

	#[tokio::test]
	async fn test_provider_status_is_passed_through_without_secrets() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/v1/search/webkr"))
			.respond_with(
				ResponseTemplate::new(403).set_body_string("query blocked for naver-secret"),
			)
			.mount(&server)
			.await;

		let app = create_router(state_for(&server));
		let (status, _, body) = send(app, get_request("/api/naver-search?query=x")).await;

		assert_eq!(status, StatusCode::FORBIDDEN);
		assert_eq!(body["error"], "upstream_error");
		let rendered = body.to_string();
		assert!(rendered.contains("query blocked"));
		assert!(!rendered.contains("naver-secret"));
	}

	#[tokio::test]
	async fn test_youtube_details_not_found() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/youtube/v3/videos"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
			.mount(&server)
			.await;

		let app = create_router(state_for(&server));
		let (status, _, body) = send(app, get_request("/api/youtube-details?videoId=nope")).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["error"], "not_found");
	}

	#[tokio::test]
	async fn test_youtube_search_clamps_max_results() {
		let server = MockServer::start().await;
		Mock::given(method("GET"))
			.and(path("/youtube/v3/search"))
			.and(query_param("maxResults", "50"))
			.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
			.expect(1)
			.mount(&server)
			.await;

		let app = create_router(state_for(&server));
		let (status, _, _) = send(
			app,
			get_request("/api/youtube-search?query=x&maxResults=500"),
		)
		.await;
		assert_eq!(status, StatusCode::OK);
	}

	#[tokio::test]
	async fn test_gemini_generate_relays_envelope() {
		let server = MockServer::start().await;
		let envelope = json!({ "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }] });
		Mock::given(method("POST"))
			.and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
			.respond_with(ResponseTemplate::new(200).set_body_json(envelope.clone()))
			.mount(&server)
			.await;

		let app = create_router(state_for(&server));
		let request = Request::builder()
			.method("POST")
			.uri("/api/gemini-generate")
			.header("Content-Type", "application/json")
			.body(Body::from(r#"{"prompt":"편지를 분석해 주세요","maxOutputTokens":1024}"#))
			.unwrap();
		let (status, _, body) = send(app, request).await;

		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, envelope);
	}

	#[tokio::test]
	async fn test_gemini_generate_rejects_empty_prompt() {
		let app = create_router(AppState::default());
		let request = Request::builder()
			.method("POST")
			.uri("/api/gemini-generate")
			.header("Content-Type", "application/json")
			.body(Body::from(r#"{"prompt":"  "}"#))
			.unwrap();
		let (status, _, body) = send(app, request).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error"], "bad_request");
	}

	#[tokio::test]
	async fn test_unreachable_provider_is_bad_gateway() {
		let state = AppState {
			naver_client: Some(Arc::new(
				NaverClient::new("id", Secret::new("unreachable-secret".to_string()))
					.unwrap()
					.with_base_url("http://127.0.0.1:1/v1/search/webkr"),
			)),
			..Default::default()
		};

		let app = create_router(state);
		let (status, _, body) = send(app, get_request("/api/naver-search?query=x")).await;

		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert_eq!(body["error"], "upstream_unreachable");
		assert!(!body.to_string().contains("unreachable-secret"));
	}
}
