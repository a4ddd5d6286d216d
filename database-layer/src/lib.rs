//! Database layer for the MediTrack record-keeping services.
//!
//! Both services read the same connection parameters from the environment and
//! talk to the same PostgreSQL instance; each one owns exactly one table. This
//! crate holds the pieces they share: configuration loading, pool
//! construction, and the common error type.

pub mod config;
pub mod connection;
pub mod error;

pub use config::DatabaseConfig;
pub use connection::{connect_pool, ping};
pub use error::{DatabaseError, DatabaseResult};
