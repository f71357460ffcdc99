//! The roster view: data sync plus the user-facing transitions.
//!
//! `RosterView` pairs a `StudentApi` with a `RosterState`. Every operation
//! reports its outcome through the notification queue rather than a return
//! value, and no failure leaves the view unusable.

mod actions;
pub mod messages;
mod roster_view;

#[cfg(test)]
mod tests;

pub use actions::Action;
pub use roster_view::RosterView;
