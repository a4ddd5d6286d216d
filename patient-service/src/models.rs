use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Patient record structure
///
/// `patient_id`, `created_at` and `updated_at` are server-assigned; every
/// other field is caller-supplied and mutable. The three clinical fields are
/// free-form JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Patient {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub medical_history: serde_json::Value,
    pub prescriptions: serde_json::Value,
    pub lab_results: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create Patient Request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub medical_history: serde_json::Value,
    pub prescriptions: serde_json::Value,
    pub lab_results: serde_json::Value,
}

/// Update Patient Request
///
/// Updates overwrite the full mutable field set; there is no partial patch.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub medical_history: serde_json::Value,
    pub prescriptions: serde_json::Value,
    pub lab_results: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_deserializes_full_payload() {
        let body = json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "gender": "female",
            "date_of_birth": "1990-04-12",
            "contact_number": "555-0100",
            "email": "ann.lee@example.com",
            "address": "12 Main St",
            "medical_history": {"allergies": ["penicillin"]},
            "prescriptions": {},
            "lab_results": {}
        });
        let request: CreatePatientRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.first_name, "Ann");
        assert_eq!(
            request.date_of_birth,
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
        );
        assert_eq!(request.medical_history["allergies"][0], "penicillin");
    }

    #[test]
    fn create_request_rejects_missing_fields() {
        let body = json!({ "first_name": "Ann" });
        let result: Result<CreatePatientRequest, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }
}
