use crate::{DraftForm, LoadState, Notice, RecordId};

/// Buttons the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Save,
    Delete,
    Send,
    RowUpdate,
    RowDelete,
}

/// Whether a control is connected to any behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    Wired,
    #[default]
    /// Rendered but deliberately inert; its message is a logged no-op.
    NotImplemented,
}

impl Control {
    pub fn availability(self) -> Availability {
        match self {
            Control::Save | Control::Delete => Availability::Wired,
            Control::Send | Control::RowUpdate | Control::RowDelete => {
                Availability::NotImplemented
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::Save => "Save",
            Control::Delete | Control::RowDelete => "Delete",
            Control::Send => "Send",
            Control::RowUpdate => "Update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub draft: DraftForm,
    pub rows: Vec<RecordRowView>,
    pub selected_count: usize,
    pub notice: Option<Notice>,
    pub load: LoadState,
    pub saving: bool,
    pub deleting: bool,
    pub send: Availability,
}

impl AppViewModel {
    /// False while a blocking notice is open.
    pub fn accepts_input(&self) -> bool {
        self.notice.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRowView {
    pub id: RecordId,
    pub id_label: String,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub hobbies: String,
    pub selected: bool,
    pub update: Availability,
    pub delete: Availability,
}
