//! Transient toast notifications.
//!
//! Toasts are appended in arrival order and each one schedules its own
//! expiry. Dismissing a toast cancels that expiry.

mod queue;
mod types;

pub use queue::NotificationQueue;
pub use types::{Toast, ToastId, ToastKind};
