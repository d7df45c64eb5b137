// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Permissive CORS headers and preflight handling.
//!
//! Every response carries the same fixed header set. `OPTIONS` requests are
//! answered here with an empty 200 and never reach a route, so preflight
//! succeeds whatever parameters are present.

use axum::{
	extract::Request,
	http::{header, HeaderMap, HeaderValue, Method, StatusCode},
	middleware::Next,
	response::{IntoResponse, Response},
};

pub const ALLOW_METHODS: &str = "GET,OPTIONS,POST";
pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
	Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

pub async fn cors_middleware(request: Request, next: Next) -> Response {
	if request.method() == Method::OPTIONS {
		tracing::trace!(path = %request.uri().path(), "answering preflight");
		let mut response = StatusCode::OK.into_response();
		apply_cors_headers(response.headers_mut());
		return response;
	}

	let mut response = next.run(request).await;
	apply_cors_headers(response.headers_mut());
	response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
		HeaderValue::from_static("true"),
	);
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_ORIGIN,
		HeaderValue::from_static("*"),
	);
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_METHODS,
		HeaderValue::from_static(ALLOW_METHODS),
	);
	headers.insert(
		header::ACCESS_CONTROL_ALLOW_HEADERS,
		HeaderValue::from_static(ALLOW_HEADERS),
	);
}
