use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use herd_schedule_mock_api::{create_api_router, initialize_backend};
use shared::{
    apply_filter, AnimalSummary, HealthStatus, MarkAllReadResponse, Notification, ScheduleFilter,
    ScheduleRecord, ScheduleStatus, TreatmentRecord,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

async fn app() -> Router {
    create_api_router(initialize_backend(today()).await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).expect("response body should match the shared types")
}

fn treatment_body(schedule_id: &str, animal_id: &str) -> Value {
    json!({
        "scheduleId": schedule_id,
        "animalId": animal_id,
        "treatmentGiven": "Albendazole",
        "healthStatus": "recovering",
        "dosage": "7.5 ml",
        "date": "2026-10-19",
        "cost": 4.25,
        "notes": "Given with feed"
    })
}

#[tokio::test]
async fn test_list_assigned_schedules() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/treatments/schedules/assigned", None).await;

    assert_eq!(status, StatusCode::OK);
    let schedules: Vec<ScheduleRecord> = parse(&body);
    assert_eq!(schedules.len(), 9);
    assert_eq!(apply_filter(&schedules, ScheduleFilter::Today, today()).len(), 2);
}

#[tokio::test]
async fn test_schedule_detail_has_populated_animal() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/treatments/schedules/sch-001", None).await;

    assert_eq!(status, StatusCode::OK);
    let schedule: ScheduleRecord = parse(&body);
    let animal = schedule.animal_id.summary().expect("populated animal");
    assert_eq!(animal.tag_number.as_deref(), Some("A-101"));
}

#[tokio::test]
async fn test_unknown_schedule_is_404() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/treatments/schedules/sch-999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = parse(&body);
    assert_eq!(error["message"], "Schedule sch-999 not found");
}

#[tokio::test]
async fn test_record_treatment_then_refetch_shows_treated() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/treatments/record",
        Some(treatment_body("sch-003", "goat-201")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let treatment: TreatmentRecord = parse(&body);
    assert_eq!(treatment.schedule_id, "sch-003");
    assert_eq!(treatment.health_status, HealthStatus::Recovering);

    let (_, body) = send(&app, Method::GET, "/api/treatments/schedules/assigned", None).await;
    let schedules: Vec<ScheduleRecord> = parse(&body);
    let treated = schedules.iter().find(|s| s.id == "sch-003").unwrap();
    assert_eq!(treated.status, ScheduleStatus::Treated);
    assert!(apply_filter(&schedules, ScheduleFilter::Missed, today())
        .iter()
        .all(|s| s.id != "sch-003"));

    // A second submission for the same schedule conflicts
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/treatments/record",
        Some(treatment_body("sch-003", "goat-201")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_record_treatment_validation() {
    let app = app().await;
    let mut body = treatment_body("sch-003", "goat-201");
    body["dosage"] = json!("  ");

    let (status, _) = send(&app, Method::POST, "/api/treatments/record", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_health_status() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/livestock/cow-102/health-status",
        Some(json!({ "healthStatus": "recovering" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let animal: AnimalSummary = parse(&body);
    assert_eq!(animal.health_status, Some(HealthStatus::Recovering));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/livestock/cow-999/health-status",
        Some(json!({ "healthStatus": "sick" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notification_read_state() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/notifications", None).await;
    assert_eq!(status, StatusCode::OK);
    let notifications: Vec<Notification> = parse(&body);
    assert_eq!(notifications.iter().filter(|n| !n.read).count(), 2);

    let (status, body) = send(&app, Method::PATCH, "/api/notifications/ntf-2/read", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(parse::<Notification>(&body).read);

    let (status, body) = send(&app, Method::PATCH, "/api/notifications/read-all", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<MarkAllReadResponse>(&body).updated, 1);
}

#[tokio::test]
async fn test_frontend_logs_are_accepted() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/logs",
        Some(json!({ "level": "warn", "message": "fetch aborted", "component": "schedules" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = parse(&body);
    assert_eq!(response["success"], true);
}
