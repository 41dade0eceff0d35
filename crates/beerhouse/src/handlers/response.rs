//! Response shaping shared by every handler.
//!
//! JSON bodies are HTML-escaped and carry permissive CORS headers; empty
//! responses are `text/plain` with no body.

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::Response,
};
use serde::Serialize;

/// Builds a JSON response from any serializable value.
///
/// A serialization failure turns into a 500 error response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string(body) {
        Ok(json) => raw_json_response(status, json),
        Err(e) => {
            tracing::error!(error = %e, "error serializing response");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

/// Builds a `{"message": ...}` error response.
pub fn error_response(status: StatusCode, message: impl std::fmt::Display) -> Response {
    let body = serde_json::json!({ "message": message.to_string() });
    raw_json_response(status, body.to_string())
}

/// Builds a bodiless `text/plain` response.
pub fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain"),
    );
    response
}

fn raw_json_response(status: StatusCode, json: String) -> Response {
    let mut response = Response::new(Body::from(html_escape(&json)));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    response
}

/// Escapes characters that are unsafe to embed JSON in HTML.
///
/// The output is still valid JSON with the same meaning.
pub fn html_escape(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"{"name":"<b>Ale & Stout</b>"}"#),
            r#"{"name":"\u003cb\u003eAle \u0026 Stout\u003c/b\u003e"}"#
        );
        assert_eq!(html_escape(r#"{"plain":1}"#), r#"{"plain":1}"#);
    }

    #[test]
    fn test_html_escape_stays_valid_json() {
        let escaped = html_escape(&serde_json::json!({ "name": "<Ale & Stout>" }).to_string());
        let parsed: serde_json::Value = serde_json::from_str(&escaped).unwrap();

        assert_eq!(parsed["name"], "<Ale & Stout>");
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "beerID_can_not_be_empty");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(
            body_string(response).await,
            r#"{"message":"beerID_can_not_be_empty"}"#
        );
    }

    #[tokio::test]
    async fn test_empty_response_shape() {
        let response = empty_response(StatusCode::CREATED);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
        assert_eq!(body_string(response).await, "");
    }

    #[tokio::test]
    async fn test_json_response_escapes_body() {
        let response = json_response(StatusCode::OK, &vec!["a<b"]);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"["a\u003cb"]"#);
    }
}
