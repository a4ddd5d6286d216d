use sqlx::PgPool;

use database_layer::DatabaseResult;

use crate::models::{Appointment, CreateAppointmentRequest, CANCELED_STATUS};

/// Repository for appointment lifecycle operations
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `appointments` table if it does not exist yet.
    ///
    /// There is deliberately no foreign-key constraint on `patient_id`: the
    /// referential check happens once at creation time through the patient
    /// directory, and a patient deleted later leaves its appointments behind.
    pub async fn ensure_schema(&self) -> DatabaseResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS appointments (
                appointment_id   BIGSERIAL PRIMARY KEY,
                patient_id       BIGINT NOT NULL,
                doctor_id        BIGINT NOT NULL,
                appointment_time TIMESTAMPTZ NOT NULL,
                status           TEXT NOT NULL DEFAULT 'booked',
                created_at       TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at       TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert a new appointment row with server-assigned id and timestamps.
    pub async fn create(
        &self,
        request: &CreateAppointmentRequest,
    ) -> DatabaseResult<Appointment> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, appointment_time, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.patient_id)
        .bind(request.doctor_id)
        .bind(request.appointment_time)
        .bind(&request.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(appointment)
    }

    /// Fetch one appointment, or `None` if the id does not resolve.
    pub async fn get(&self, appointment_id: i64) -> DatabaseResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE appointment_id = $1",
        )
        .bind(appointment_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(appointment)
    }

    /// List all appointments for one doctor, in storage order.
    pub async fn list_by_doctor(&self, doctor_id: i64) -> DatabaseResult<Vec<Appointment>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE doctor_id = $1",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(appointments)
    }

    /// Overwrite the status verbatim and refresh `updated_at`.
    pub async fn update_status(
        &self,
        appointment_id: i64,
        status: &str,
    ) -> DatabaseResult<Option<Appointment>> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $1, updated_at = now()
            WHERE appointment_id = $2
            RETURNING *
            "#,
        )
        .bind(status)
        .bind(appointment_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(appointment)
    }

    /// Force the status to "canceled", ignoring whatever it was before.
    /// Idempotent: canceling twice succeeds both times.
    pub async fn cancel(&self, appointment_id: i64) -> DatabaseResult<Option<Appointment>> {
        self.update_status(appointment_id, CANCELED_STATUS).await
    }
}
