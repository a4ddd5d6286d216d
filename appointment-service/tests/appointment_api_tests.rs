use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use appointment_service::{create_app, AppointmentService};
use patient_service::{models::CreatePatientRequest, PatientRepository};

/// An id large enough that no test database will have assigned it.
const MISSING_ID: i64 = 9_876_543_210;

struct TestContext {
    app: Router,
    patients: PatientRepository,
}

/// Build the application against the test database, or `None` when no
/// database is reachable (the suite then skips).
async fn test_context() -> Option<TestContext> {
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .ok()?;

    let patients = PatientRepository::new(pool.clone());
    patients
        .ensure_schema()
        .await
        .expect("Failed to create patients table");

    let service = AppointmentService::new_with_pool(pool)
        .await
        .expect("Failed to create test service");

    Some(TestContext {
        app: create_app(service),
        patients,
    })
}

/// A doctor id nobody else in the suite uses, to isolate list assertions.
fn unique_doctor_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as i64
        & 0x7fff_ffff_ffff
}

async fn seed_patient(patients: &PatientRepository) -> i64 {
    let request = CreatePatientRequest {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        gender: "female".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        contact_number: "555-0100".to_string(),
        email: "ann.lee@example.com".to_string(),
        address: "12 Main St".to_string(),
        medical_history: json!({}),
        prescriptions: json!({}),
        lab_results: json!({}),
    };
    patients
        .create(&request)
        .await
        .expect("Failed to seed patient")
        .patient_id
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .uri(uri)
            .method(method)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_defaults_status_to_booked() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let patient_id = seed_patient(&ctx.patients).await;
    let doctor_id = unique_doctor_id();

    let (status, created) = send(
        &ctx.app,
        Method::POST,
        "/appointments/",
        Some(json!({
            "patient_id": patient_id,
            "doctor_id": doctor_id,
            "appointment_time": "2024-01-01T10:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["data"]["status"], "booked");
    assert_eq!(created["data"]["patient_id"], patient_id);

    // Exactly one row for this doctor
    let (status, listed) = send(
        &ctx.app,
        Method::GET,
        &format!("/appointments/doctor/{}", doctor_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn create_with_missing_patient_persists_nothing() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let doctor_id = unique_doctor_id();

    let (status, body) = send(
        &ctx.app,
        Method::POST,
        "/appointments/",
        Some(json!({
            "patient_id": MISSING_ID,
            "doctor_id": doctor_id,
            "appointment_time": "2024-01-01T10:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "referenced_entity_not_found");

    // No row was written
    let (_, listed) = send(
        &ctx.app,
        Method::GET,
        &format!("/appointments/doctor/{}", doctor_id),
        None,
    )
    .await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_appointment_returns_not_found() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let (status, body) = send(
        &ctx.app,
        Method::GET,
        &format!("/appointments/{}", MISSING_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error_type"], "not_found");
}

#[tokio::test]
async fn update_status_stores_caller_string_verbatim() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let patient_id = seed_patient(&ctx.patients).await;
    let (_, created) = send(
        &ctx.app,
        Method::POST,
        "/appointments/",
        Some(json!({
            "patient_id": patient_id,
            "doctor_id": unique_doctor_id(),
            "appointment_time": "2024-03-05T09:30:00Z"
        })),
    )
    .await;
    let id = created["data"]["appointment_id"].as_i64().unwrap();
    let updated_at = created["data"]["updated_at"].as_str().unwrap().to_string();

    // No allowed-value list: any string is stored as-is
    let (status, updated) = send(
        &ctx.app,
        Method::PUT,
        &format!("/appointments/{}", id),
        Some(json!({"status": "rescheduled-by-phone"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["status"], "rescheduled-by-phone");
    assert_eq!(updated["data"]["created_at"], created["data"]["created_at"]);
    assert!(updated["data"]["updated_at"].as_str().unwrap() >= updated_at.as_str());
}

#[tokio::test]
async fn update_missing_appointment_returns_not_found() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let (status, _) = send(
        &ctx.app,
        Method::PUT,
        &format!("/appointments/{}", MISSING_ID),
        Some(json!({"status": "booked"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_forces_canceled_and_is_idempotent() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let patient_id = seed_patient(&ctx.patients).await;
    let (_, created) = send(
        &ctx.app,
        Method::POST,
        "/appointments/",
        Some(json!({
            "patient_id": patient_id,
            "doctor_id": unique_doctor_id(),
            "appointment_time": "2024-06-10T14:00:00Z",
            "status": "confirmed"
        })),
    )
    .await;
    let id = created["data"]["appointment_id"].as_i64().unwrap();
    let uri = format!("/appointments/{}", id);

    let (status, canceled) = send(&ctx.app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(canceled["data"]["status"], "canceled");

    // Canceling again succeeds and the status stays "canceled"
    let (status, canceled_again) = send(&ctx.app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(canceled_again["data"]["status"], "canceled");
}

#[tokio::test]
async fn list_for_unknown_doctor_returns_empty_list() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let (status, listed) = send(
        &ctx.app,
        Method::GET,
        &format!("/appointments/doctor/{}", unique_doctor_id()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn deleting_a_patient_leaves_appointments_behind() {
    let Some(ctx) = test_context().await else {
        eprintln!("skipping: test database not reachable");
        return;
    };

    let patient_id = seed_patient(&ctx.patients).await;
    let doctor_id = unique_doctor_id();
    let (_, created) = send(
        &ctx.app,
        Method::POST,
        "/appointments/",
        Some(json!({
            "patient_id": patient_id,
            "doctor_id": doctor_id,
            "appointment_time": "2024-09-01T08:00:00Z"
        })),
    )
    .await;
    let id = created["data"]["appointment_id"].as_i64().unwrap();

    // The referential check is point-in-time only: removing the patient
    // afterwards orphans the appointment but does not delete it.
    assert!(ctx.patients.delete(patient_id).await.unwrap());

    let (status, fetched) = send(
        &ctx.app,
        Method::GET,
        &format!("/appointments/{}", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["patient_id"], patient_id);
}
