use clap::ArgMatches;
use tracing::info;

use roster_core::{FormField, RosterView, StudentApi, StudentId};

use super::CommandResult;
use super::helpers;

pub(crate) fn handle_edit_command(matches: &ArgMatches, api_url: Option<&str>) -> CommandResult {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Id argument is required")?;
    let id = StudentId::from(id.as_str());
    let fields = helpers::field_values(matches);

    info!(event = "cli.edit_started", id = %id, field_count = fields.len());

    let mut view = helpers::build_view(api_url)?;
    helpers::runtime()?.block_on(edit_student(&mut view, &id, fields));

    helpers::finish(&view, "edit")
}

/// Load the list, open the edit dialog for `id`, apply `fields` over the
/// prefilled values, and submit.
///
/// Stops early (with the toast already queued) if the list cannot be loaded
/// or `id` is not in it.
pub(crate) async fn edit_student<A: StudentApi>(
    view: &mut RosterView<A>,
    id: &StudentId,
    fields: Vec<(FormField, String)>,
) {
    view.list().await;
    if helpers::operation_failed(&view.snapshot()) {
        return;
    }

    view.open_edit(id);
    if !view.state().modal().is_edit() {
        return;
    }

    for (field, value) in fields {
        view.set_field(field, value);
    }
    view.submit().await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use roster_core::test_support::{Call, FakeStudentApi, Failure, Operation};
    use roster_core::{Student, StudentPayload};

    fn ann() -> Student {
        Student {
            id: StudentId::from("1"),
            name: "Ann".to_string(),
            age: Some(20),
            email: "a@x.com".to_string(),
            city: "Lima".to_string(),
        }
    }

    fn view() -> RosterView<FakeStudentApi> {
        RosterView::new(
            FakeStudentApi::with_students(vec![ann()]),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_edit_keeps_unspecified_fields() {
        let mut view = view();

        edit_student(
            &mut view,
            &StudentId::from("1"),
            vec![(FormField::City, "Cusco".to_string())],
        )
        .await;

        assert!(view.api().calls().contains(&Call::Update(
            StudentId::from("1"),
            StudentPayload {
                name: "Ann".to_string(),
                age: 20,
                email: "a@x.com".to_string(),
                city: "Cusco".to_string(),
            }
        )));
        assert!(!helpers::operation_failed(&view.snapshot()));
    }

    #[tokio::test]
    async fn test_edit_unknown_id_sends_no_write() {
        let mut view = view();

        edit_student(&mut view, &StudentId::from("42"), Vec::new()).await;

        assert!(view.api().write_calls().is_empty());
        let snapshot = view.snapshot();
        assert!(helpers::operation_failed(&snapshot));
        assert_eq!(snapshot.toasts[0].message, "Student not found.");
    }

    #[tokio::test]
    async fn test_edit_stops_when_list_fails() {
        let mut view = view();
        view.api().fail(Operation::List, Failure::Transport);

        edit_student(&mut view, &StudentId::from("1"), Vec::new()).await;

        let snapshot = view.snapshot();
        assert_eq!(snapshot.toasts.len(), 1);
        assert_eq!(snapshot.toasts[0].message, "Failed to load data");
        assert!(view.api().write_calls().is_empty());
    }
}
