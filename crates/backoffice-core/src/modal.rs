// Modal state machine shared by the CRUD screens
//
// One modal is active per screen at a time. All transitions start from
// `Closed`; cancel and close return to `Closed` discarding transient state.
// A failed submit does NOT transition: the screen stays in `Editing` with
// the form retained so the operator can retry.

/// Modal state for a CRUD screen over entity `T` with form state `F`.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T, F> {
    /// No modal open.
    Closed,
    /// Add (no existing entity) or edit (form initialized from the entity).
    Editing { existing: Option<T>, form: F },
    /// Destructive-action confirmation before a delete is issued.
    ConfirmingDelete { entity: T },
    /// Read-only detail display.
    Viewing { entity: T },
}

impl<T, F> ModalState<T, F> {
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, ModalState::Editing { .. })
    }

    /// Form state, if an editor is open.
    pub fn form(&self) -> Option<&F> {
        match self {
            ModalState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Mutable form state, if an editor is open.
    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            ModalState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Entity pending deletion, if the confirm dialog is open.
    pub fn pending_delete(&self) -> Option<&T> {
        match self {
            ModalState::ConfirmingDelete { entity } => Some(entity),
            _ => None,
        }
    }
}

impl<T, F> Default for ModalState<T, F> {
    fn default() -> Self {
        ModalState::Closed
    }
}
