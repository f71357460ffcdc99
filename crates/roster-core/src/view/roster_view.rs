use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::actions::Action;
use super::messages;
use crate::api::{ApiError, StudentApi};
use crate::errors::RosterError;
use crate::model::{FormField, StudentId, StudentPayload};
use crate::notify::ToastId;
use crate::state::{ModalState, RosterSnapshot, RosterState};

/// Orchestrates list/create/update/delete against one collection.
///
/// Methods take `&mut self`, so operations on one view never interleave.
/// Each network operation is attempted once; its outcome lands in the
/// notification queue and the list is re-fetched after every successful
/// mutation.
pub struct RosterView<A> {
    api: A,
    state: RosterState,
}

impl<A: StudentApi> RosterView<A> {
    pub fn new(api: A, toast_ttl: Duration) -> Self {
        Self {
            api,
            state: RosterState::new(toast_ttl),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        self.state.snapshot()
    }

    /// Route a user action to the matching operation.
    pub async fn dispatch(&mut self, action: Action) {
        debug!(event = "core.view.dispatch_started", action = ?action);

        match action {
            Action::Load => self.list().await,
            Action::OpenAdd => self.state.open_add(),
            Action::OpenEdit { id } => self.open_edit(&id),
            Action::OpenConfirm { id } => self.state.open_confirm(id),
            Action::SetField { field, value } => self.set_field(field, value),
            Action::Submit => self.submit().await,
            Action::CloseModals => self.state.close_modals(),
            Action::CloseConfirm => self.state.close_confirm(),
            Action::ConfirmDelete => self.delete().await,
            Action::DismissToast { id } => {
                self.dismiss_toast(id);
            }
        }
    }

    /// Fetch the collection and replace the local list.
    ///
    /// On failure the previous list is kept. The loading flag is cleared on
    /// every path.
    pub async fn list(&mut self) {
        self.state.set_loading(true);

        match self.api.list().await {
            Ok(students) => {
                info!(event = "core.view.list_completed", count = students.len());
                self.state.replace_students(students);
            }
            Err(e) if e.is_transport() => {
                error!(
                    event = "core.view.list_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                self.state
                    .notifications_mut()
                    .error(messages::LOAD_TRANSPORT_FAILED);
            }
            Err(e) => {
                warn!(
                    event = "core.view.list_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                self.state.notifications_mut().error(messages::LOAD_FAILED);
            }
        }

        self.state.set_loading(false);
    }

    /// Validate the form and create a new student from it.
    pub async fn create(&mut self) {
        let Some(payload) = self.validated_payload() else {
            return;
        };

        match self.api.create(&payload).await {
            Ok(()) => {
                info!(event = "core.view.create_completed", name = %payload.name);
                self.state.close_modals();
                self.state.notifications_mut().success(messages::ADD_SUCCEEDED);
                self.list().await;
            }
            Err(e) => self.report_failure("create", &e, messages::ADD_FAILED),
        }
    }

    /// Validate the form and overwrite the selected student with it.
    pub async fn update(&mut self) {
        let Some(payload) = self.validated_payload() else {
            return;
        };
        let Some(id) = self.selection() else {
            return;
        };

        match self.api.update(&id, &payload).await {
            Ok(()) => {
                info!(event = "core.view.update_completed", id = %id);
                self.state.close_modals();
                self.state
                    .notifications_mut()
                    .success(messages::UPDATE_SUCCEEDED);
                self.list().await;
            }
            Err(e) => self.report_failure("update", &e, messages::UPDATE_FAILED),
        }
    }

    /// Delete the selected student.
    ///
    /// The confirm dialog stays open on failure so the user can retry.
    pub async fn delete(&mut self) {
        let Some(id) = self.selection() else {
            return;
        };

        match self.api.delete(&id).await {
            Ok(()) => {
                info!(event = "core.view.delete_completed", id = %id);
                self.state.close_confirm();
                self.state
                    .notifications_mut()
                    .success(messages::DELETE_SUCCEEDED);
                self.list().await;
            }
            Err(e) => self.report_failure("delete", &e, messages::DELETE_FAILED),
        }
    }

    /// Submit whichever form dialog is open.
    pub async fn submit(&mut self) {
        match self.state.modal() {
            ModalState::AddOpen => self.create().await,
            ModalState::EditOpen => self.update().await,
            other => debug!(event = "core.view.submit_ignored", modal = ?other),
        }
    }

    pub fn open_add(&mut self) {
        self.state.open_add();
    }

    /// Open the edit dialog for a student in the current list.
    pub fn open_edit(&mut self, id: &StudentId) {
        match self.state.find_student(id).cloned() {
            Some(student) => self.state.open_edit(&student),
            None => {
                warn!(event = "core.view.open_edit_not_found", id = %id);
                self.state.notifications_mut().error(messages::NOT_FOUND);
            }
        }
    }

    pub fn open_confirm(&mut self, id: StudentId) {
        self.state.open_confirm(id);
    }

    pub fn close_modals(&mut self) {
        self.state.close_modals();
    }

    pub fn close_confirm(&mut self) {
        self.state.close_confirm();
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.set_field(field, value);
    }

    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.state.notifications_mut().dismiss(id)
    }

    /// Wait for the next toast expiry and remove it.
    pub async fn next_expired(&mut self) -> ToastId {
        self.state.notifications_mut().next_expired().await
    }

    /// Remove every toast whose expiry has passed.
    pub fn reap_expired(&mut self) -> Vec<ToastId> {
        self.state.notifications_mut().reap_expired()
    }

    /// Convert the form to a payload, or enqueue one warning and return `None`.
    fn validated_payload(&mut self) -> Option<StudentPayload> {
        match self.state.form().to_payload() {
            Ok(payload) => Some(payload),
            Err(e) => {
                warn!(
                    event = "core.view.validation_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                self.state.notifications_mut().warning(e.to_string());
                None
            }
        }
    }

    fn selection(&mut self) -> Option<StudentId> {
        let selected = self.state.selected_id().cloned();
        if selected.is_none() {
            warn!(event = "core.view.no_selection");
            self.state.notifications_mut().error(messages::NO_SELECTION);
        }
        selected
    }

    fn report_failure(&mut self, operation: &'static str, e: &ApiError, status_message: &str) {
        let message = if e.is_transport() {
            error!(
                event = "core.view.request_failed",
                operation,
                error = %e,
                error_code = e.error_code()
            );
            messages::TRANSPORT_FAILED
        } else {
            warn!(
                event = "core.view.request_rejected",
                operation,
                error = %e,
                error_code = e.error_code()
            );
            status_message
        };
        self.state.notifications_mut().error(message);
    }
}
