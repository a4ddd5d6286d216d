use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handlers::{health, patients},
    openapi,
    server::PatientService,
};

/// Create health check routes
pub fn health_routes() -> Router<PatientService> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create patient record routes
pub fn patient_routes() -> Router<PatientService> {
    Router::new()
        .route("/patients/", post(patients::create_patient))
        .route("/patients/", get(patients::list_patients))
        .route("/patients/:patient_id", get(patients::get_patient))
        .route("/patients/:patient_id", put(patients::update_patient))
        .route("/patients/:patient_id", delete(patients::delete_patient))
}

/// Create all application routes
pub fn create_routes() -> Router<PatientService> {
    Router::new()
        // Health check routes
        .merge(health_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
        // Patient record routes
        .merge(patient_routes())
}
