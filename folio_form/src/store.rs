use folio_models::contact::{Draft, DraftField, FormStatus};

/// The draft and status of a single contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    draft: Draft,
    status: FormStatus,
}

impl FormStore {
    pub fn new(draft: Draft, status: FormStatus) -> Self {
        Self { draft, status }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Replace exactly one field of the draft. Never touches the status.
    pub fn update(&mut self, field: DraftField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
    }

    pub(crate) fn set_status(&mut self, status: FormStatus) {
        self.status = status;
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    pub fn into_parts(self) -> (Draft, FormStatus) {
        (self.draft, self.status)
    }
}
