//! roster-core: Core library for the student roster client
//!
//! This library holds everything the roster front ends share: the student
//! model, the REST client for the remote collection, the notification queue,
//! and the view state that ties them together.
//!
//! # Main Entry Points
//!
//! - [`view`] - `RosterView`, the list/create/update/delete orchestration
//! - [`api`] - `StudentApi` trait and its `reqwest` implementation
//! - [`notify`] - Self-expiring toast notifications
//! - [`state`] - Dialog, form, and selection state with snapshots for rendering

pub mod api;
pub mod errors;
pub mod logging;
pub mod model;
pub mod notify;
pub mod state;
pub mod view;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use api::{ApiError, HttpStudentApi, StudentApi};
pub use errors::RosterError;
pub use model::{FormBuffer, FormError, FormField, Student, StudentId, StudentPayload};
pub use notify::{NotificationQueue, Toast, ToastId, ToastKind};
pub use state::{ModalState, RosterSnapshot, RosterState};
pub use view::{Action, RosterView};

// Re-export config types from roster-config
pub use roster_config::{ConfigError, RosterConfig};

// Re-export logging initialization
pub use logging::init_logging;
