pub mod errors;
pub mod hotspots;
pub mod submission;

pub use errors::{ServiceError, ServiceResult};
