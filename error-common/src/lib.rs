//! Common error handling for the MediTrack services.
//!
//! Both record-keeping services expose the same JSON error surface: a
//! generated `error_id` for correlation, a stable `error_type` string, and a
//! human-readable message. Successful responses are wrapped in the
//! [`ApiResponse`] envelope.
//!
//! # Error categories
//!
//! - **Validation / BadRequest**: malformed request payloads
//! - **NotFound**: the requested identifier does not resolve to a row
//! - **ReferenceNotFound**: a cross-entity existence check failed
//! - **Database**: connection or query failures from the storage layer
//! - **Internal**: everything unexpected

pub mod response;
pub mod types;

pub use response::{api_success, ApiErrorResponse, ApiResponse};
pub use types::{ApiError, ApiResult};
