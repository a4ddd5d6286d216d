use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use error_common::{api_success, ApiError, ApiResponse};

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};
use crate::server::PatientService;

/// Create a new patient record
#[utoipa::path(
    post,
    path = "/patients/",
    request_body = CreatePatientRequest,
    responses(
        (status = 201, description = "Patient created successfully", body = Patient),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error")
    ),
    tag = "patients"
)]
pub async fn create_patient(
    State(service): State<PatientService>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Patient>>), ApiError> {
    let patient = service.patients.create(&request).await?;
    Ok((StatusCode::CREATED, Json(api_success(patient))))
}

/// List all patients
#[utoipa::path(
    get,
    path = "/patients/",
    responses(
        (status = 200, description = "Patients retrieved successfully", body = Vec<Patient>),
        (status = 500, description = "Internal server error")
    ),
    tag = "patients"
)]
pub async fn list_patients(
    State(service): State<PatientService>,
) -> Result<Json<ApiResponse<Vec<Patient>>>, ApiError> {
    let patients = service.patients.list().await?;
    Ok(Json(api_success(patients)))
}

/// Get a patient by ID
#[utoipa::path(
    get,
    path = "/patients/{patient_id}",
    params(("patient_id" = i64, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient retrieved successfully", body = Patient),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "patients"
)]
pub async fn get_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<i64>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    match service.patients.get(patient_id).await? {
        Some(patient) => Ok(Json(api_success(patient))),
        None => Err(ApiError::not_found("patient")),
    }
}

/// Update a patient's mutable fields
#[utoipa::path(
    put,
    path = "/patients/{patient_id}",
    params(("patient_id" = i64, Path, description = "Patient ID")),
    request_body = UpdatePatientRequest,
    responses(
        (status = 200, description = "Patient updated successfully", body = Patient),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "patients"
)]
pub async fn update_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<i64>,
    Json(request): Json<UpdatePatientRequest>,
) -> Result<Json<ApiResponse<Patient>>, ApiError> {
    match service.patients.update(patient_id, &request).await? {
        Some(patient) => Ok(Json(api_success(patient))),
        None => Err(ApiError::not_found("patient")),
    }
}

/// Delete a patient record
#[utoipa::path(
    delete,
    path = "/patients/{patient_id}",
    params(("patient_id" = i64, Path, description = "Patient ID")),
    responses(
        (status = 204, description = "Patient deleted successfully"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "patients"
)]
pub async fn delete_patient(
    State(service): State<PatientService>,
    Path(patient_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if service.patients.delete(patient_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("patient"))
    }
}
