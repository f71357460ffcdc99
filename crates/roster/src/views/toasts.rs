use roster_core::Toast;

use crate::color;

/// One line per toast in arrival order: icon, message, and the id used by
/// `dismiss`.
pub fn render_toasts(toasts: &[Toast]) -> String {
    if toasts.is_empty() {
        return String::new();
    }

    let mut out = String::from("\n");
    for toast in toasts {
        out.push_str(&format!(
            "{} {}\n",
            color::toast(toast.kind, &format!("{} {}", toast.kind.icon(), toast.message)),
            color::muted(&format!("(#{})", toast.id))
        ));
    }
    out
}
