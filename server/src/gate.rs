use crate::error::ErrorResponse;
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Turns away any request that does not declare a JSON body, whatever its method.
pub async fn require_json(request: Request, next: Next) -> Response {
    if declares_json(request.headers()) {
        return next.run(request).await;
    }
    tracing::debug!(
        content_type = ?request.headers().get(CONTENT_TYPE),
        "rejected request without json content type"
    );
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new("Content-Type must be application/json")),
    )
        .into_response()
}

fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod test {
    use super::declares_json;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{HeaderMap, HeaderValue};

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn accepts_json_with_parameters() {
        assert!(declares_json(&headers("application/json")));
        assert!(declares_json(&headers("Application/JSON; charset=utf-8")));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!declares_json(&HeaderMap::new()));
        assert!(!declares_json(&headers("text/plain")));
        assert!(!declares_json(&headers("application/json-patch+json")));
    }
}
