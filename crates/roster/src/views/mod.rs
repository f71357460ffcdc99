//! Text rendering of a `RosterSnapshot`.
//!
//! Every function here is pure: it takes an immutable snapshot (or part of
//! one) and returns the lines to print.

mod dialog;
mod list;
mod toasts;

use unicode_width::UnicodeWidthStr;

use roster_core::RosterSnapshot;

pub use dialog::render_dialog;
pub use list::render_list;
pub use toasts::render_toasts;

pub const HEADING: &str = "Student Management System";

/// Heading, list, the open dialog (if any), then the toast area.
pub fn render(snapshot: &RosterSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&render_list(snapshot));
    out.push_str(&render_dialog(snapshot));
    out.push_str(&render_toasts(&snapshot.toasts));
    out
}

pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{
        FormBuffer, ModalState, Student, StudentId, Toast, ToastId, ToastKind,
    };

    fn snapshot() -> RosterSnapshot {
        RosterSnapshot {
            students: vec![Student {
                id: StudentId::from("1"),
                name: "Ann".to_string(),
                age: Some(20),
                email: "a@x.com".to_string(),
                city: "Lima".to_string(),
            }],
            loading: false,
            modal: ModalState::ConfirmOpen,
            form: FormBuffer::default(),
            selected_id: Some(StudentId::from("1")),
            toasts: vec![Toast {
                id: ToastId::new(1),
                message: "Student deleted successfully.".to_string(),
                kind: ToastKind::Success,
            }],
        }
    }

    #[test]
    fn test_render_orders_sections() {
        let out = render(&snapshot());

        let heading = out.find(HEADING).unwrap();
        let row = out.find("Ann (20 years old)").unwrap();
        let confirm = out.find("Are you sure").unwrap();
        let toast = out.find("Student deleted successfully.").unwrap();
        assert!(heading < row);
        assert!(row < confirm);
        assert!(confirm < toast);
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
        // Wide characters count double.
        assert_eq!(pad("名前", 6), "名前  ");
    }
}
