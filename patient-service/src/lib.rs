//! MediTrack Patient Record Service
//!
//! HTTP API for patient demographic and clinical-note records. The service
//! owns the `patients` table exclusively; other services reference patients
//! only through the [`repository::PatientDirectory`] query interface.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use repository::{PatientDirectory, PatientRepository};
pub use server::PatientService;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(service: PatientService) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(service)
}
