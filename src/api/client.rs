use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{ApiError, DEFAULT_API_MESSAGE};
use crate::config;
use crate::domain::user::{login_payload, register_payload};
use crate::domain::{Complaint, ComplaintEdit, NewComplaint, RegisterForm, Role, StatusUpdate, User};

/// Thin wrapper over the complaint backend. Cheap to clone; provided to
/// views through Dioxus context. Every call is a fresh request: no
/// retries, no caching, no timeout.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

impl ApiClient {
    pub fn from_env() -> Self {
        Self::new(config::api_base())
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn login(&self, role: Role, id: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.dispatch(
            self.request(Method::POST, "/api/auth/login")
                .json(&login_payload(role, id, password)),
        )
        .await
    }

    pub async fn register(&self, role: Role, form: &RegisterForm) -> Result<(), ApiError> {
        // The success body is a message plus the created record; nothing in
        // it drives the client.
        let _: Value = self
            .dispatch(
                self.request(Method::POST, "/api/auth/register")
                    .json(&register_payload(role, form)),
            )
            .await?;
        Ok(())
    }

    pub async fn student_complaints(&self, student_id: &str) -> Result<Vec<Complaint>, ApiError> {
        self.dispatch(self.request(Method::GET, &format!("/api/complaints/student/{student_id}")))
            .await
    }

    pub async fn create_complaint(&self, new: &NewComplaint) -> Result<Complaint, ApiError> {
        self.dispatch(self.request(Method::POST, "/api/complaints").json(new))
            .await
    }

    pub async fn update_complaint(&self, id: &str, edit: &ComplaintEdit) -> Result<Complaint, ApiError> {
        self.dispatch(
            self.request(Method::PUT, &format!("/api/complaints/{id}"))
                .json(edit),
        )
        .await
    }

    pub async fn delete_complaint(&self, id: &str) -> Result<(), ApiError> {
        let _: Value = self
            .dispatch(self.request(Method::DELETE, &format!("/api/complaints/{id}")))
            .await?;
        Ok(())
    }

    pub async fn all_complaints(&self) -> Result<Vec<Complaint>, ApiError> {
        self.dispatch(self.request(Method::GET, "/api/complaints/all"))
            .await
    }

    pub async fn update_status(&self, id: &str, update: &StatusUpdate) -> Result<Complaint, ApiError> {
        self.dispatch(
            self.request(Method::PATCH, &format!("/api/complaints/{id}/status"))
                .json(update),
        )
        .await
    }

    /// Every request goes out with a JSON content type; `.json(body)`
    /// replaces rather than duplicates it.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json")
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "api response");
        decode_response(status, &body)
    }
}

/// Interpret one HTTP exchange. The body is parsed before the status is
/// consulted, so a non-JSON error page maps to `MalformedResponse` even on
/// a 500.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    let data: Value = serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse)?;
    if !status.is_success() {
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_API_MESSAGE)
            .to_string();
        return Err(ApiError::Api { status, message });
    }
    serde_json::from_value(data).map_err(|_| ApiError::MalformedResponse)
}
