use async_trait::async_trait;
use sqlx::PgPool;

use database_layer::DatabaseResult;

use crate::models::{CreatePatientRequest, Patient, UpdatePatientRequest};

/// Narrow query interface exposed to other services.
///
/// The appointment service needs exactly one fact about a patient: whether the
/// identifier currently resolves to a row. Exposing only this keeps the
/// service boundary intact; nobody outside this crate touches the `patients`
/// table.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn patient_exists(&self, patient_id: i64) -> DatabaseResult<bool>;
}

/// Repository for patient record operations
#[derive(Debug, Clone)]
pub struct PatientRepository {
    pool: PgPool,
}

impl PatientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `patients` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS patients (
                patient_id      BIGSERIAL PRIMARY KEY,
                first_name      TEXT NOT NULL,
                last_name       TEXT NOT NULL,
                gender          TEXT NOT NULL,
                date_of_birth   DATE NOT NULL,
                contact_number  TEXT NOT NULL,
                email           TEXT NOT NULL,
                address         TEXT NOT NULL,
                medical_history JSONB NOT NULL,
                prescriptions   JSONB NOT NULL,
                lab_results     JSONB NOT NULL,
                created_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at      TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new patient row with server-assigned id and timestamps.
    pub async fn create(&self, request: &CreatePatientRequest) -> DatabaseResult<Patient> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (
                first_name, last_name, gender, date_of_birth, contact_number,
                email, address, medical_history, prescriptions, lab_results
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.gender)
        .bind(request.date_of_birth)
        .bind(&request.contact_number)
        .bind(&request.email)
        .bind(&request.address)
        .bind(&request.medical_history)
        .bind(&request.prescriptions)
        .bind(&request.lab_results)
        .fetch_one(&self.pool)
        .await?;

        Ok(patient)
    }

    /// List all patients in storage order.
    pub async fn list(&self) -> DatabaseResult<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>("SELECT * FROM patients")
            .fetch_all(&self.pool)
            .await?;
        Ok(patients)
    }

    /// Fetch one patient, or `None` if the id does not resolve.
    pub async fn get(&self, patient_id: i64) -> DatabaseResult<Option<Patient>> {
        let patient = sqlx::query_as::<_, Patient>(
            "SELECT * FROM patients WHERE patient_id = $1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(patient)
    }

    /// Overwrite the mutable field set and refresh `updated_at`.
    pub async fn update(
        &self,
        patient_id: i64,
        request: &UpdatePatientRequest,
    ) -> DatabaseResult<Option<Patient>> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            UPDATE patients SET
                first_name = $1, last_name = $2, gender = $3, date_of_birth = $4,
                contact_number = $5, email = $6, address = $7,
                medical_history = $8, prescriptions = $9, lab_results = $10,
                updated_at = now()
            WHERE patient_id = $11
            RETURNING *
            "#,
        )
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.gender)
        .bind(request.date_of_birth)
        .bind(&request.contact_number)
        .bind(&request.email)
        .bind(&request.address)
        .bind(&request.medical_history)
        .bind(&request.prescriptions)
        .bind(&request.lab_results)
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(patient)
    }

    /// Physically delete a patient row. Returns false if the id was absent.
    pub async fn delete(&self, patient_id: i64) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM patients WHERE patient_id = $1")
            .bind(patient_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PatientDirectory for PatientRepository {
    async fn patient_exists(&self, patient_id: i64) -> DatabaseResult<bool> {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM patients WHERE patient_id = $1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }
}
