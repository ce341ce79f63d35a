use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use libcors::{CorsDecision, CorsError, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_owned();
    let headers = lowercased_headers(request.headers());

    let decision = match state.cors.decide(&method, &headers).await {
        Ok(decision) => decision,
        Err(err) => return error_response(err),
    };

    if let Some(status) = decision.status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
        let mut response = Response::builder()
            .status(status)
            .body(Body::empty())
            .unwrap();
        apply_decision(response.headers_mut(), &decision);
        return response;
    }

    let mut response = next.run(request).await;
    apply_decision(response.headers_mut(), &decision);
    response
}

/// `HeaderName` is already lower-case. Repeated lines of one header are joined
/// with `", "` so that every value takes part in the decision; non-UTF-8
/// values are skipped.
fn lowercased_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        collected
            .entry(name.as_str().to_owned())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_owned());
    }
    collected
}

fn apply_decision(map: &mut HeaderMap, decision: &CorsDecision) {
    for (name, value) in decision.headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }

    let existing = map
        .get(header::VARY)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    if let Some(vary) = decision.vary_header(existing.as_deref()) {
        if let Ok(value) = HeaderValue::from_str(&vary) {
            map.insert(axum::http::header::VARY, value);
        }
    }
}

/// Details stay in the log; the client only learns that evaluation failed.
fn error_response(err: CorsError) -> Response {
    tracing::error!(error = %err, "CORS evaluation failed");
    let mut response = Response::new(Body::from("CORS evaluation failed"));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
