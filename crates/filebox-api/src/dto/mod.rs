//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::UploadRequest;
pub use response::{FileResponse, HealthResponse};
