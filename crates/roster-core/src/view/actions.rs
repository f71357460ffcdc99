use crate::model::{FormField, StudentId};
use crate::notify::ToastId;

/// Every user interaction the roster view understands.
///
/// Front ends translate their input (buttons, key presses, shell lines)
/// into actions and hand them to [`RosterView::dispatch`](super::RosterView::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the full list.
    Load,
    /// Open the add dialog with an empty form.
    OpenAdd,
    /// Open the edit dialog prefilled from a listed student.
    OpenEdit { id: StudentId },
    /// Ask for confirmation before deleting.
    OpenConfirm { id: StudentId },
    /// Replace one form field.
    SetField { field: FormField, value: String },
    /// Submit the open add/edit dialog.
    Submit,
    /// Cancel the add/edit dialog.
    CloseModals,
    /// Cancel the delete confirmation.
    CloseConfirm,
    /// Confirm the pending delete.
    ConfirmDelete,
    /// Remove a notification by hand.
    DismissToast { id: ToastId },
}
