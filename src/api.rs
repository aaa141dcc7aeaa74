//! Thin wrappers over the platform's REST API. Every call is a single request
//! with no retry; callers decide how a failure is shown.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::{Course, ErrorResponse, LoginRequest, LoginResponse, ProgressRecord, RecommendationsResponse};
use crate::session;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("You need to log in first")]
    Unauthenticated,
}

fn authorized(request: Request) -> Result<Request, ApiError> {
    let token = session::token().ok_or(ApiError::Unauthenticated)?;
    Ok(request.header("Authorization", &format!("Bearer {}", token)))
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.detail,
        Err(_) => format!("Server returned {}", status),
    };
    ApiError::Status { status, message }
}

async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = Request::post(&config::api_url("/login"))
        .json(&LoginRequest { email, password })
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    send_json(request).await
}

pub async fn fetch_courses(age_group: &str) -> Result<Vec<Course>, ApiError> {
    let url = format!(
        "{}?age_group={}",
        config::api_url("/courses"),
        urlencoding::encode(age_group)
    );
    send_json(Request::get(&url)).await
}

pub async fn fetch_progress(student_id: &str) -> Result<Vec<ProgressRecord>, ApiError> {
    let url = config::api_url(&format!("/progress/student/{}", urlencoding::encode(student_id)));
    send_json(authorized(Request::get(&url))?).await
}

/// Returned as-is; the dashboard only lays the fields out.
pub async fn fetch_dashboard_stats() -> Result<serde_json::Value, ApiError> {
    send_json(authorized(Request::get(&config::api_url("/dashboard/stats")))?).await
}

pub async fn fetch_recommendations() -> Result<RecommendationsResponse, ApiError> {
    let url = config::api_url("/ai-tutor/personalized-recommendations");
    send_json(authorized(Request::post(&url))?).await
}
