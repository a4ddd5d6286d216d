use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use database_layer::{connect_pool, DatabaseConfig};
use patient_service::{PatientDirectory, PatientRepository};

use crate::repository::AppointmentRepository;

/// Main appointment service state
#[derive(Clone)]
pub struct AppointmentService {
    /// Service configuration
    pub config: ServiceConfig,
    /// Database connection pool
    pub db_pool: PgPool,
    /// Appointment repository
    pub appointments: AppointmentRepository,
    /// Narrow read-only view into the patient service, used for the
    /// existence check at appointment creation.
    pub patients: Arc<dyn PatientDirectory>,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl AppointmentService {
    /// Create a new service instance from environment configuration.
    ///
    /// Fails (and the process must not serve traffic) when the connection
    /// parameters are missing or malformed.
    pub async fn new() -> Result<Self> {
        let db_config = DatabaseConfig::from_env()?;
        let db_pool = connect_pool(&db_config).await?;
        Self::new_with_pool(db_pool).await
    }

    /// Create a new service instance with a provided database pool.
    /// This is useful for testing.
    pub async fn new_with_pool(db_pool: PgPool) -> Result<Self> {
        let appointments = AppointmentRepository::new(db_pool.clone());
        appointments.ensure_schema().await?;

        // Both services point at the same database, so the patient directory
        // is backed by the patient repository over this pool. The patients
        // table itself stays owned by the patient service.
        let patients: Arc<dyn PatientDirectory> =
            Arc::new(PatientRepository::new(db_pool.clone()));

        Ok(Self {
            config: ServiceConfig::default(),
            db_pool,
            appointments,
            patients,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "MediTrack Appointment Scheduling Service".to_string(),
            request_timeout: 30,
        }
    }
}
