//! View state for the roster.
//!
//! `RosterState` owns everything the roster view mutates:
//! - the student list from the last successful fetch and the loading flag
//! - `ModalState`: which dialog is open (add, edit, delete-confirm)
//! - the shared `FormBuffer` and the selected student id
//! - the `NotificationQueue`
//!
//! Renderers never see `RosterState` directly; they get a `RosterSnapshot`.

mod modal;
mod roster_state;

pub use modal::ModalState;
pub use roster_state::{RosterSnapshot, RosterState};
