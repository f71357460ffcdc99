//! Access to the remote student collection.
//!
//! `StudentApi` is the seam between the view and the network. The view only
//! sees success or an [`ApiError`]; each implementation decides which status
//! counts as success for each operation.

mod errors;
mod http;

pub use errors::ApiError;
pub use http::HttpStudentApi;

use crate::model::{Student, StudentId, StudentPayload};

/// The four operations of a REST collection resource.
///
/// Every call is attempted exactly once. Implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait StudentApi {
    /// `GET /`: the full collection.
    async fn list(&self) -> Result<Vec<Student>, ApiError>;

    /// `POST /`: succeeds only on `201 Created`.
    async fn create(&self, payload: &StudentPayload) -> Result<(), ApiError>;

    /// `PUT /{id}`: succeeds only on `200 OK`.
    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ApiError>;

    /// `DELETE /{id}`: succeeds only on `200 OK`.
    async fn delete(&self, id: &StudentId) -> Result<(), ApiError>;
}
