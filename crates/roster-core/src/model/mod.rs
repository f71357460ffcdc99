//! Student records and the shared add/edit form.

mod form;
mod student;

pub use form::{FormBuffer, FormError, FormField};
pub use student::{Student, StudentId, StudentPayload};
