/// Which dialog is open.
///
/// Only one dialog can be open at a time. The enum makes states like "add
/// and confirm both open" unrepresentable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    /// No dialog is open.
    #[default]
    Closed,
    /// Add student dialog is open.
    AddOpen,
    /// Edit student dialog is open.
    EditOpen,
    /// Delete confirmation dialog is open.
    ConfirmOpen,
}

impl ModalState {
    pub fn is_add(self) -> bool {
        self == ModalState::AddOpen
    }

    pub fn is_edit(self) -> bool {
        self == ModalState::EditOpen
    }

    pub fn is_confirm(self) -> bool {
        self == ModalState::ConfirmOpen
    }

    /// True when a dialog that uses the form buffer is open.
    pub fn is_form(self) -> bool {
        matches!(self, ModalState::AddOpen | ModalState::EditOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_state_mutual_exclusion() {
        let add = ModalState::AddOpen;
        assert!(add.is_add());
        assert!(!add.is_edit());
        assert!(!add.is_confirm());
        assert!(add.is_form());

        let edit = ModalState::EditOpen;
        assert!(!edit.is_add());
        assert!(edit.is_edit());
        assert!(edit.is_form());

        let confirm = ModalState::ConfirmOpen;
        assert!(confirm.is_confirm());
        assert!(!confirm.is_form());

        let closed = ModalState::default();
        assert_eq!(closed, ModalState::Closed);
        assert!(!closed.is_add() && !closed.is_edit() && !closed.is_confirm());
    }
}
