use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::PatientService;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,

        // Patient endpoints
        crate::handlers::patients::create_patient,
        crate::handlers::patients::list_patients,
        crate::handlers::patients::get_patient,
        crate::handlers::patients::update_patient,
        crate::handlers::patients::delete_patient,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::models::Patient,
            crate::models::CreatePatientRequest,
            crate::models::UpdatePatientRequest,
        )
    ),
    tags(
        (name = "health", description = "System health and status endpoints"),
        (name = "patients", description = "Patient demographic and clinical note records"),
    ),
    info(
        title = "MediTrack Patient Record Service",
        version = "0.1.0",
        description = "CRUD API for patient demographic and clinical-note records.",
    )
)]
pub struct ApiDoc;

/// Create API documentation routes
pub fn create_docs_routes() -> Router<PatientService> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
