//! CORS handling for cross-origin browser clients.
//!
//! The contract is the one the Scratch extension relies on: preflight
//! OPTIONS requests are answered directly with the caller's Origin echoed
//! back, an OPTIONS request without an Origin header is not a preflight and
//! gets 501, and every routed response mirrors the request Origin so
//! cross-origin fetches can read it. `tower_http::cors` cannot express the
//! 501 case, hence this middleware.

use super::error_response::ErrorResponse;
use axum::{
    extract::Request,
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn cors_layer(request: Request, next: Next) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();

    if request.method() == Method::OPTIONS {
        let Some(origin) = origin else {
            return ErrorResponse::new(
                StatusCode::NOT_IMPLEMENTED,
                "Non-CORS OPTIONS request not implemented",
            )
            .into_response();
        };

        let request_headers = request
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
            .cloned();

        let mut response = StatusCode::OK.into_response();
        let headers = response.headers_mut();
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            header::HeaderValue::from_static("POST, GET, OPTIONS"),
        );
        if let Some(requested) = request_headers {
            headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
        }
        return response;
    }

    let mut response = next.run(request).await;
    if let Some(origin) = origin {
        response
            .headers_mut()
            .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    response
}
