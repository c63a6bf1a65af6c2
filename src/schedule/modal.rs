use super::Visibility;
use crate::errors::ScheduleError;

/// What the event modal is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    View,
    Edit,
}

impl ModalMode {
    /// Form fields are writable while creating or editing, locked in view.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Create | Self::Edit)
    }

    /// View turns into Edit; starting anywhere else is a caller bug.
    pub fn begin_edit(self) -> Result<Self, ScheduleError> {
        match self {
            Self::View => Ok(Self::Edit),
            other => Err(ScheduleError::InvalidTransition {
                mode: other.as_str(),
                action: "edit",
            }),
        }
    }

    /// Cancelling an edit falls back to read-only view; the caller
    /// re-populates the form from the stored event.
    pub fn cancel_edit(self) -> Result<Self, ScheduleError> {
        match self {
            Self::Edit => Ok(Self::View),
            other => Err(ScheduleError::InvalidTransition {
                mode: other.as_str(),
                action: "cancel",
            }),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

/// A button in the modal footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalButton {
    Close,
    Cancel,
    Delete,
    Edit,
    Submit,
}

/// Whether this user may change the event: admins own the public calendar,
/// everyone else only their own private entries.
#[must_use]
pub const fn can_modify(is_admin: bool, is_owner: bool, visibility: Visibility) -> bool {
    match visibility {
        Visibility::Public => is_admin,
        Visibility::Private => !is_admin && is_owner,
    }
}

/// Footer buttons for the given mode, in draw order.
#[must_use]
pub fn modal_buttons(mode: ModalMode, can_modify: bool) -> Vec<ModalButton> {
    match mode {
        ModalMode::Create | ModalMode::Edit => vec![ModalButton::Cancel, ModalButton::Submit],
        ModalMode::View if can_modify => vec![
            ModalButton::Close,
            ModalButton::Delete,
            ModalButton::Edit,
        ],
        ModalMode::View => vec![ModalButton::Close],
    }
}
