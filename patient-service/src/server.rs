use anyhow::Result;
use sqlx::PgPool;

use database_layer::{connect_pool, DatabaseConfig};

use crate::repository::PatientRepository;

/// Main patient service state
#[derive(Clone)]
pub struct PatientService {
    /// Service configuration
    pub config: ServiceConfig,
    /// Database connection pool
    pub db_pool: PgPool,
    /// Patient repository
    pub patients: PatientRepository,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl PatientService {
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
        let patients = PatientRepository::new(db_pool.clone());
        patients.ensure_schema().await?;

        Ok(Self {
            config: ServiceConfig::default(),
            db_pool,
            patients,
        })
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "MediTrack Patient Record Service".to_string(),
            request_timeout: 30,
        }
    }
}
