use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Status assigned to newly booked appointments when the caller omits one.
pub const DEFAULT_STATUS: &str = "booked";

/// Status assigned by the cancel operation, regardless of prior status.
pub const CANCELED_STATUS: &str = "canceled";

/// Appointment record structure
///
/// `patient_id` is a logical reference into the patient service; it is checked
/// once at creation time and never re-validated. `doctor_id` is an opaque
/// identifier with no corresponding entity in this system. `status` is a
/// free-form string.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Appointment {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create Appointment Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub appointment_time: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Update Appointment Status Request
///
/// The status string is stored verbatim; there is no allowed-value list.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatusRequest {
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_to_booked_when_omitted() {
        let body = json!({
            "patient_id": 1,
            "doctor_id": 7,
            "appointment_time": "2024-01-01T10:00:00Z"
        });
        let request: CreateAppointmentRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.status, "booked");
    }

    #[test]
    fn caller_supplied_status_is_kept_verbatim() {
        let body = json!({
            "patient_id": 1,
            "doctor_id": 7,
            "appointment_time": "2024-01-01T10:00:00Z",
            "status": "tentative"
        });
        let request: CreateAppointmentRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.status, "tentative");
    }

    #[test]
    fn create_request_rejects_missing_patient_id() {
        let body = json!({
            "doctor_id": 7,
            "appointment_time": "2024-01-01T10:00:00Z"
        });
        let result: Result<CreateAppointmentRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
