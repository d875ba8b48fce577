//! Stateless HTTP request builder and response parser for the task API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Any 2xx counts as success; the API does not promise specific codes.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{TodoItem, TodoPatch};

/// Synchronous, stateless client for the task API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base}/` carrying the full item, including the client-side id.
    pub fn build_create_todo(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update_todo(&self, id: u64, patch: &TodoPatch) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(patch).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/todo/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/todo/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// The created item as the server echoed it.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// The body must be JSON, but its value is not used: the gateway merges
    /// the locally supplied patch instead.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        serde_json::from_str::<serde_json::Value>(&response.body)
            .map(|_| ())
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map any non-2xx status to `ApiError::HttpError`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8000")
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let item = TodoItem::new(3, "Buy milk", "Pending");
        let req = client().build_create_todo(&item).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": 3, "message": "Buy milk", "status": "Pending"}));
    }

    #[test]
    fn build_update_todo_sends_only_present_fields() {
        let req = client().build_update_todo(1, &TodoPatch::status("Completed")).unwrap();
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(req.path, "http://localhost:8000/todo/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["status"], "Completed");
        assert!(body.get("message").is_none());
    }

    #[test]
    fn build_delete_todo_has_no_body() {
        let req = client().build_delete_todo(42);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/todo/42");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn parse_create_todo_accepts_any_2xx() {
        for status in [200, 201] {
            let response = HttpResponse::new(status, r#"{"id":3,"message":"Buy milk","status":"Pending"}"#);
            let item = client().parse_create_todo(response).unwrap();
            assert_eq!(item, TodoItem::new(3, "Buy milk", "Pending"));
        }
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_create_todo_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_update_todo_ignores_body_value() {
        let response = HttpResponse::new(200, r#"{"detail":"whatever the server says"}"#);
        assert!(client().parse_update_todo(response).is_ok());
    }

    #[test]
    fn parse_update_todo_requires_json_body() {
        let response = HttpResponse::new(200, "");
        let err = client().parse_update_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_delete_todo_ignores_body() {
        assert!(client().parse_delete_todo(HttpResponse::new(204, "")).is_ok());
        assert!(client().parse_delete_todo(HttpResponse::new(200, "ok")).is_ok());
    }

    #[test]
    fn parse_delete_todo_not_found_is_http_error() {
        let err = client().parse_delete_todo(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8000/");
        assert_eq!(client.build_delete_todo(1).path, "http://localhost:8000/todo/1");
        let req = client.build_create_todo(&TodoItem::new(1, "a", "Pending")).unwrap();
        assert_eq!(req.path, "http://localhost:8000/");
    }

    #[test]
    fn from_config_uses_base_url() {
        let config = ClientConfig {
            base_url: "http://api.example.test/".to_string(),
        };
        assert_eq!(TodoClient::from_config(&config).base_url(), "http://api.example.test");
    }
}
