use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    handlers::{appointments, health},
    openapi,
    server::AppointmentService,
};

/// Create health check routes
pub fn health_routes() -> Router<AppointmentService> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/version", get(health::version_info))
}

/// Create appointment lifecycle routes
pub fn appointment_routes() -> Router<AppointmentService> {
    Router::new()
        .route("/appointments/", post(appointments::create_appointment))
        .route(
            "/appointments/doctor/:doctor_id",
            get(appointments::list_appointments_by_doctor),
        )
        .route(
            "/appointments/:appointment_id",
            get(appointments::get_appointment),
        )
        .route(
            "/appointments/:appointment_id",
            put(appointments::update_appointment_status),
        )
        .route(
            "/appointments/:appointment_id",
            delete(appointments::cancel_appointment),
        )
}

/// Create all application routes
pub fn create_routes() -> Router<AppointmentService> {
    Router::new()
        // Health check routes
        .merge(health_routes())
        // API documentation routes
        .merge(openapi::create_docs_routes())
        // Appointment lifecycle routes
        .merge(appointment_routes())
}
