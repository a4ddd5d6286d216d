use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::AppointmentService;

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::handlers::health::health_check,
        crate::handlers::health::version_info,

        // Appointment endpoints
        crate::handlers::appointments::create_appointment,
        crate::handlers::appointments::get_appointment,
        crate::handlers::appointments::list_appointments_by_doctor,
        crate::handlers::appointments::update_appointment_status,
        crate::handlers::appointments::cancel_appointment,
    ),
    components(
        schemas(
            crate::handlers::health::HealthResponse,
            crate::handlers::health::VersionResponse,
            crate::models::Appointment,
            crate::models::CreateAppointmentRequest,
            crate::models::UpdateAppointmentStatusRequest,
        )
    ),
    tags(
        (name = "health", description = "System health and status endpoints"),
        (name = "appointments", description = "Appointment scheduling and lifecycle"),
    ),
    info(
        title = "MediTrack Appointment Scheduling Service",
        version = "0.1.0",
        description = "CRUD API for appointments referencing patient and doctor identifiers.",
    )
)]
pub struct ApiDoc;

/// Create API documentation routes
pub fn create_docs_routes() -> Router<AppointmentService> {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
