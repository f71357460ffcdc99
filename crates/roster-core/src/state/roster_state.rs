use std::time::Duration;

use tracing::debug;

use super::modal::ModalState;
use crate::model::{FormBuffer, FormField, Student, StudentId};
use crate::notify::{NotificationQueue, Toast};

/// Mutable state of the roster view.
///
/// All fields are private - access state through the facade methods below so
/// the dialog/selection transitions stay the only way in.
#[derive(Debug)]
pub struct RosterState {
    /// Students from the last successful fetch.
    students: Vec<Student>,
    /// True while a list fetch is in flight.
    loading: bool,
    modal: ModalState,
    /// Shared draft for the add and edit dialogs.
    form: FormBuffer,
    /// Target of the edit or delete-confirm flow.
    selected_id: Option<StudentId>,
    notifications: NotificationQueue,
}

/// Immutable copy of the view state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    pub students: Vec<Student>,
    pub loading: bool,
    pub modal: ModalState,
    pub form: FormBuffer,
    pub selected_id: Option<StudentId>,
    pub toasts: Vec<Toast>,
}

impl RosterState {
    /// Empty state whose toasts expire after `toast_ttl`.
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            students: Vec::new(),
            loading: false,
            modal: ModalState::Closed,
            form: FormBuffer::default(),
            selected_id: None,
            notifications: NotificationQueue::new(toast_ttl),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn find_student(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == id)
    }

    /// Replace the cached list wholesale.
    pub fn replace_students(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn form(&self) -> &FormBuffer {
        &self.form
    }

    pub fn selected_id(&self) -> Option<&StudentId> {
        self.selected_id.as_ref()
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    /// Clear the form and open the add dialog.
    pub fn open_add(&mut self) {
        debug!(event = "core.state.open_add");
        self.form = FormBuffer::default();
        self.modal = ModalState::AddOpen;
    }

    /// Prefill the form from `student`, select it, and open the edit dialog.
    pub fn open_edit(&mut self, student: &Student) {
        debug!(event = "core.state.open_edit", id = %student.id);
        self.form = FormBuffer::from_student(student);
        self.selected_id = Some(student.id.clone());
        self.modal = ModalState::EditOpen;
    }

    /// Select `id` and open the delete confirmation.
    pub fn open_confirm(&mut self, id: StudentId) {
        debug!(event = "core.state.open_confirm", id = %id);
        self.selected_id = Some(id);
        self.modal = ModalState::ConfirmOpen;
    }

    /// Close the add/edit dialog. The confirm dialog is left alone.
    pub fn close_modals(&mut self) {
        if self.modal.is_form() {
            debug!(event = "core.state.close_modals", modal = ?self.modal);
            self.modal = ModalState::Closed;
        }
    }

    /// Close the confirm dialog and drop the selection.
    pub fn close_confirm(&mut self) {
        if self.modal.is_confirm() {
            self.modal = ModalState::Closed;
        }
        self.selected_id = None;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            students: self.students.clone(),
            loading: self.loading,
            modal: self.modal,
            form: self.form.clone(),
            selected_id: self.selected_id.clone(),
            toasts: self.notifications.toasts().to_vec(),
        }
    }
}
