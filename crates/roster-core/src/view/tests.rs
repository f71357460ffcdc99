use std::time::Duration;

use futures::FutureExt;

use super::*;
use crate::model::{FormField, Student, StudentId};
use crate::notify::ToastKind;
use crate::state::ModalState;
use crate::test_support::{Call, FakeStudentApi, Failure, Operation};

const TTL: Duration = Duration::from_millis(5000);

fn ann() -> Student {
    Student {
        id: StudentId::from("1"),
        name: "Ann".to_string(),
        age: Some(20),
        email: "a@x.com".to_string(),
        city: "Lima".to_string(),
    }
}

fn bo() -> Student {
    Student {
        id: StudentId::from("2"),
        name: "Bo".to_string(),
        age: Some(31),
        email: "b@x.com".to_string(),
        city: "Rio".to_string(),
    }
}

fn view_with(students: Vec<Student>) -> RosterView<FakeStudentApi> {
    RosterView::new(FakeStudentApi::with_students(students), TTL)
}

fn fill(view: &mut RosterView<FakeStudentApi>, name: &str, age: &str, email: &str, city: &str) {
    view.set_field(FormField::Name, name);
    view.set_field(FormField::Age, age);
    view.set_field(FormField::Email, email);
    view.set_field(FormField::City, city);
}

fn toast_messages(view: &RosterView<FakeStudentApi>) -> Vec<(ToastKind, String)> {
    view.snapshot()
        .toasts
        .into_iter()
        .map(|t| (t.kind, t.message))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_list_sets_loading_while_in_flight() {
    let mut view = view_with(vec![ann()]);
    view.api().stall(Operation::List);

    // The request goes out but is never answered.
    assert!(view.list().now_or_never().is_none());

    assert_eq!(view.api().calls(), vec![Call::List]);
    assert!(view.state().is_loading());
    let snapshot = view.snapshot();
    assert!(snapshot.loading);
    assert!(snapshot.students.is_empty());

    view.api().resume(Operation::List);
    view.list().await;

    assert!(!view.state().is_loading());
    assert_eq!(view.snapshot().students, vec![ann()]);
}

#[tokio::test(start_paused = true)]
async fn test_list_replaces_students() {
    let mut view = view_with(vec![ann()]);

    view.list().await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.students, vec![ann()]);
    assert!(!snapshot.loading);
    assert!(snapshot.toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_list_status_failure_keeps_previous_list() {
    let mut view = view_with(vec![ann()]);
    view.list().await;

    view.api().fail(Operation::List, Failure::Status(500));
    view.list().await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.students, vec![ann()]);
    assert!(!snapshot.loading);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Failed to load students.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_list_transport_failure_message() {
    let mut view = view_with(vec![ann()]);
    view.api().fail(Operation::List, Failure::Transport);

    view.list().await;

    assert!(view.snapshot().students.is_empty());
    assert!(!view.state().is_loading());
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Failed to load data".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_create_then_list_contains_record() {
    let mut view = view_with(vec![ann()]);
    view.open_add();
    fill(&mut view, "Cy", " 44 ", "c@x.com", "Oslo");

    view.submit().await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.modal, ModalState::Closed);
    let created = snapshot
        .students
        .iter()
        .find(|s| s.name == "Cy")
        .expect("created student should be listed");
    assert_eq!(created.age, Some(44));
    assert_eq!(created.email, "c@x.com");
    assert_eq!(created.city, "Oslo");
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Success, "Student added successfully!".to_string())]
    );
    assert_eq!(view.api().calls().last(), Some(&Call::List));
}

#[tokio::test(start_paused = true)]
async fn test_create_with_blank_name_sends_nothing() {
    let mut view = view_with(vec![]);
    view.open_add();
    fill(&mut view, "", "5", "b@x.com", "Rio");

    view.submit().await;

    assert!(view.api().calls().is_empty());
    assert_eq!(view.snapshot().modal, ModalState::AddOpen);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Warning, "Please fill in all fields.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_only_fields_send_nothing() {
    for field in FormField::ALL {
        let mut view = view_with(vec![ann()]);
        view.list().await;
        view.open_edit(&StudentId::from("1"));
        view.set_field(field, "   ");

        view.submit().await;

        assert!(view.api().write_calls().is_empty(), "{field}");
        let warnings: Vec<_> = toast_messages(&view)
            .into_iter()
            .filter(|(kind, _)| *kind == ToastKind::Warning)
            .collect();
        assert_eq!(warnings.len(), 1, "{field}");
        assert_eq!(view.snapshot().modal, ModalState::EditOpen);
    }
}

#[tokio::test(start_paused = true)]
async fn test_non_numeric_age_sends_nothing() {
    let mut view = view_with(vec![]);
    view.open_add();
    fill(&mut view, "Cy", "abc", "c@x.com", "Oslo");

    view.submit().await;

    assert!(view.api().calls().is_empty());
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Warning, "Please enter a valid age.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_create_status_failure_keeps_dialog_open() {
    let mut view = view_with(vec![]);
    view.api().fail(Operation::Create, Failure::Status(400));
    view.open_add();
    fill(&mut view, "Cy", "44", "c@x.com", "Oslo");

    view.submit().await;

    assert_eq!(view.snapshot().modal, ModalState::AddOpen);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Failed to add student.".to_string())]
    );
    // No refresh after a failed mutation.
    assert!(!view.api().calls().contains(&Call::List));
}

#[tokio::test(start_paused = true)]
async fn test_create_transport_failure_is_generic() {
    let mut view = view_with(vec![]);
    view.api().fail(Operation::Create, Failure::Transport);
    view.open_add();
    fill(&mut view, "Cy", "44", "c@x.com", "Oslo");

    view.submit().await;

    assert_eq!(view.snapshot().modal, ModalState::AddOpen);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Error occurred.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_update_replaces_only_target() {
    let mut view = view_with(vec![ann(), bo()]);
    view.list().await;
    view.open_edit(&StudentId::from("1"));
    view.set_field(FormField::City, "Cusco");
    view.set_field(FormField::Age, "21");

    view.submit().await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.modal, ModalState::Closed);
    let updated = snapshot
        .students
        .iter()
        .find(|s| s.id == StudentId::from("1"))
        .unwrap();
    assert_eq!(updated.city, "Cusco");
    assert_eq!(updated.age, Some(21));
    assert_eq!(updated.name, "Ann");
    assert!(snapshot.students.contains(&bo()));
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Success, "Student updated successfully!".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_update_status_failure() {
    let mut view = view_with(vec![ann()]);
    view.list().await;
    view.api().fail(Operation::Update, Failure::Status(500));
    view.open_edit(&StudentId::from("1"));

    view.submit().await;

    assert_eq!(view.snapshot().modal, ModalState::EditOpen);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Failed to update student.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_update_without_selection_sends_nothing() {
    let mut view = view_with(vec![ann()]);
    view.open_add();
    fill(&mut view, "Cy", "44", "c@x.com", "Oslo");

    view.update().await;

    assert!(view.api().calls().is_empty());
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "No student selected.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_delete_then_list_omits_record() {
    let mut view = view_with(vec![ann(), bo()]);
    view.list().await;

    view.dispatch(Action::OpenConfirm {
        id: StudentId::from("1"),
    })
    .await;
    view.dispatch(Action::ConfirmDelete).await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.modal, ModalState::Closed);
    assert!(snapshot.selected_id.is_none());
    assert_eq!(snapshot.students, vec![bo()]);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Success, "Student deleted successfully.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_delete_failure_keeps_confirm_open_and_list() {
    let mut view = view_with(vec![ann()]);
    view.list().await;
    view.api().fail(Operation::Delete, Failure::Status(500));

    view.open_confirm(StudentId::from("1"));
    view.delete().await;

    let snapshot = view.snapshot();
    assert_eq!(snapshot.modal, ModalState::ConfirmOpen);
    assert_eq!(snapshot.selected_id, Some(StudentId::from("1")));
    assert_eq!(snapshot.students, vec![ann()]);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Failed to delete student.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_delete_without_selection() {
    let mut view = view_with(vec![ann()]);

    view.delete().await;

    assert!(view.api().calls().is_empty());
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "No student selected.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_open_edit_unknown_id() {
    let mut view = view_with(vec![ann()]);
    view.list().await;

    view.dispatch(Action::OpenEdit {
        id: StudentId::from("99"),
    })
    .await;

    assert_eq!(view.snapshot().modal, ModalState::Closed);
    assert_eq!(
        toast_messages(&view),
        vec![(ToastKind::Error, "Student not found.".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn test_submit_without_form_dialog_is_noop() {
    let mut view = view_with(vec![ann()]);

    view.dispatch(Action::Submit).await;

    assert!(view.api().calls().is_empty());
    assert!(view.snapshot().toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_set_field_and_cancel() {
    let mut view = view_with(vec![]);
    view.dispatch(Action::OpenAdd).await;
    view.dispatch(Action::SetField {
        field: FormField::Email,
        value: "d@x.com".to_string(),
    })
    .await;
    assert_eq!(view.snapshot().form.email, "d@x.com");

    view.dispatch(Action::CloseModals).await;
    assert_eq!(view.snapshot().modal, ModalState::Closed);
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_then_expiry() {
    let mut view = view_with(vec![]);
    view.open_add();
    view.submit().await;
    let id = view.snapshot().toasts[0].id;

    view.dispatch(Action::DismissToast { id }).await;
    assert!(view.snapshot().toasts.is_empty());

    tokio::time::sleep(Duration::from_millis(5001)).await;
    assert!(view.reap_expired().is_empty());
    assert!(!view.dismiss_toast(id));
    assert!(view.snapshot().toasts.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_view_toasts_expire() {
    let mut view = view_with(vec![]);
    view.open_add();
    view.submit().await;
    let id = view.snapshot().toasts[0].id;

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(view.reap_expired().is_empty());
    assert_eq!(view.snapshot().toasts.len(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(view.reap_expired(), vec![id]);
    assert!(view.snapshot().toasts.is_empty());
}
