use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    AnimalSummary, ApiErrorBody, HealthStatus, MarkAllReadResponse, Notification,
    RecordTreatmentRequest, ScheduleRecord, TreatmentRecord, UpdateHealthStatusRequest,
};
use web_sys::AbortSignal;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// API root baked in at build time through `FARM_API_BASE_URL`
pub fn configured_base_url() -> String {
    option_env!("FARM_API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// API client for the livestock backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self {
            base_url: configured_base_url(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Schedules assigned to the current user. Aborting `signal` cancels the request.
    pub async fn get_assigned_schedules(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<ScheduleRecord>, ApiError> {
        let result = Request::get(&self.url("/treatments/schedules/assigned"))
            .abort_signal(signal)
            .send()
            .await;
        read_json(result, signal).await
    }

    /// One schedule with its animal populated
    pub async fn get_schedule(
        &self,
        schedule_id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<ScheduleRecord, ApiError> {
        let url = self.url(&format!("/treatments/schedules/{}", encode_segment(schedule_id)));
        let result = Request::get(&url).abort_signal(signal).send().await;
        read_json(result, signal).await
    }

    pub async fn record_treatment(
        &self,
        request: &RecordTreatmentRequest,
    ) -> Result<TreatmentRecord, ApiError> {
        let result = Request::post(&self.url("/treatments/record"))
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await;
        read_json(result, None).await
    }

    pub async fn update_health_status(
        &self,
        animal_id: &str,
        health_status: HealthStatus,
    ) -> Result<AnimalSummary, ApiError> {
        let url = self.url(&format!("/livestock/{}/health-status", encode_segment(animal_id)));
        let result = Request::put(&url)
            .json(&UpdateHealthStatusRequest { health_status })
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await;
        read_json(result, None).await
    }

    pub async fn get_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let result = Request::get(&self.url("/notifications")).send().await;
        read_json(result, None).await
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<Notification, ApiError> {
        let url = self.url(&format!("/notifications/{}/read", encode_segment(notification_id)));
        let result = Request::patch(&url).send().await;
        read_json(result, None).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<MarkAllReadResponse, ApiError> {
        let result = Request::patch(&self.url("/notifications/read-all")).send().await;
        read_json(result, None).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

fn is_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.map_or(false, |signal| signal.aborted())
}

/// Turn a non-2xx body into a message, preferring the API's `{ message }` shape
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(
    result: Result<Response, gloo::net::Error>,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let response = match result {
        Ok(response) => response,
        Err(_) if is_aborted(signal) => return Err(ApiError::Aborted),
        Err(e) => return Err(ApiError::Network(e.to_string())),
    };

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status,
            body: error_message(&body),
        });
    }

    match response.json::<T>().await {
        Ok(data) => Ok(data),
        Err(_) if is_aborted(signal) => Err(ApiError::Aborted),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
