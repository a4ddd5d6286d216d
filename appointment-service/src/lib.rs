//! MediTrack Appointment Scheduling Service
//!
//! HTTP API for the appointment lifecycle. The service owns the
//! `appointments` table exclusively; patients are referenced by identifier
//! only, through the patient service's `PatientDirectory` interface, and are
//! never mutated from here.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use repository::AppointmentRepository;
pub use server::AppointmentService;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(service: AppointmentService) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(service)
}
