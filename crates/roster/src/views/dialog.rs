use roster_core::{FormField, ModalState, RosterSnapshot};

use super::{display_width, pad};
use crate::color;

pub const ADD_TITLE: &str = "Add New Student";
pub const EDIT_TITLE: &str = "Edit Student Information";
pub const ADD_SUBMIT: &str = "Add Student";
pub const EDIT_SUBMIT: &str = "Update Student";
pub const CONFIRM_TEXT: &str =
    "Are you sure you want to delete this student? This action cannot be undone.";

/// Render whichever dialog is open, or nothing.
pub fn render_dialog(snapshot: &RosterSnapshot) -> String {
    match snapshot.modal {
        ModalState::Closed => String::new(),
        ModalState::AddOpen => render_form(snapshot, ADD_TITLE, ADD_SUBMIT),
        ModalState::EditOpen => render_form(snapshot, EDIT_TITLE, EDIT_SUBMIT),
        ModalState::ConfirmOpen => render_confirm(snapshot),
    }
}

fn render_form(snapshot: &RosterSnapshot, title: &str, submit: &str) -> String {
    let label_width = FormField::ALL
        .iter()
        .map(|f| display_width(f.label()))
        .max()
        .unwrap_or(0);

    let mut out = format!("\n{}\n", color::accent(title));
    for field in FormField::ALL {
        let value = snapshot.form.get(field);
        let shown = if value.is_empty() {
            color::muted(field.placeholder())
        } else {
            value.to_string()
        };
        out.push_str(&format!(
            "  {}  {}\n",
            pad(field.label(), label_width),
            shown
        ));
    }
    out.push_str(&format!(
        "  {}\n",
        color::muted(&format!("[submit] {submit}   [cancel] Cancel"))
    ));
    out
}

fn render_confirm(snapshot: &RosterSnapshot) -> String {
    let mut out = format!("\n{}\n", color::danger("Confirm Delete"));
    if let Some(id) = &snapshot.selected_id {
        out.push_str(&format!("  Student {}\n", color::accent(&format!("[{id}]"))));
    }
    out.push_str(&format!("  {CONFIRM_TEXT}\n"));
    out.push_str(&format!(
        "  {}\n",
        color::muted("[confirm] Delete   [cancel] Cancel")
    ));
    out
}
