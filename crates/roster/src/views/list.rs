use roster_core::RosterSnapshot;

use super::{HEADING, display_width, pad};
use crate::color;

/// Heading followed by the loading line or one two-line entry per student.
pub fn render_list(snapshot: &RosterSnapshot) -> String {
    let mut out = format!("{}\n\n", color::bold(HEADING));

    if snapshot.loading {
        out.push_str("Loading...\n");
        return out;
    }

    if snapshot.students.is_empty() {
        out.push_str(&format!("{}\n", color::muted("No students loaded.")));
        return out;
    }

    let id_width = snapshot
        .students
        .iter()
        .map(|s| display_width(s.id.as_str()) + 2)
        .max()
        .unwrap_or(0);

    for student in &snapshot.students {
        let tag = pad(&format!("[{}]", student.id), id_width);
        let age = student
            .age
            .map_or_else(|| "?".to_string(), |age| age.to_string());
        out.push_str(&format!(
            "{} {}\n",
            color::accent(&tag),
            color::bold(&format!("{} ({} years old)", student.name, age))
        ));
        out.push_str(&format!(
            "{} {}\n",
            " ".repeat(id_width),
            color::muted(&format!("{} | {}", student.email, student.city))
        ));
    }
    out
}
