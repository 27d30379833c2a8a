use serde_json::Value;

use crate::record::{Collection, JobRecord};
use crate::surface::{form_fields, review_fields, sidebar_fields, start_fields, Trigger};
use crate::view_model::SessionViewModel;

/// Workflow stage, derived from the session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Uninitialized,
    Form,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// User-visible message produced by the last applied action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

impl Notice {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    collection: Option<Collection>,
    pending: Option<JobRecord>,
    extra_field_count: usize,
    source_filename: String,
    notice: Option<Notice>,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match (&self.collection, &self.pending) {
            (None, _) => Stage::Uninitialized,
            (Some(_), Some(_)) => Stage::Review,
            (Some(_), None) => Stage::Form,
        }
    }

    pub fn collection(&self) -> Option<&[Value]> {
        self.collection.as_deref()
    }

    pub fn pending(&self) -> Option<&JobRecord> {
        self.pending.as_ref()
    }

    pub fn extra_field_count(&self) -> usize {
        self.extra_field_count
    }

    pub fn source_filename(&self) -> &str {
        &self.source_filename
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn has_records(&self) -> bool {
        self.collection.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Triggers that `update` will act on in the current state.
    pub fn available_triggers(&self) -> Vec<Trigger> {
        let mut triggers = match self.stage() {
            Stage::Uninitialized => vec![Trigger::Upload, Trigger::StartEmpty],
            Stage::Form => vec![Trigger::Upload, Trigger::SubmitForm],
            Stage::Review => vec![
                Trigger::Upload,
                Trigger::AddCustomField,
                Trigger::ConfirmCustomFields,
                Trigger::Commit,
                Trigger::BackToForm,
            ],
        };
        if self.has_records() {
            triggers.push(Trigger::Download);
        }
        if self.collection.is_some() {
            triggers.push(Trigger::ClearData);
        }
        triggers
    }

    pub fn view(&self) -> SessionViewModel {
        let stage = self.stage();
        let mut fields = match stage {
            Stage::Uninitialized => start_fields(),
            Stage::Form => form_fields(),
            Stage::Review => review_fields(self.extra_field_count),
        };
        if self.collection.is_some() {
            fields.extend(sidebar_fields(self.has_records()));
        }

        SessionViewModel {
            stage,
            record_count: self.collection.as_ref().map(Vec::len),
            source_filename: Some(self.source_filename.clone()).filter(|s| !s.is_empty()),
            pending_preview: self
                .pending
                .as_ref()
                .and_then(|p| crate::codec::to_pretty_json(p).ok()),
            extra_field_count: self.extra_field_count,
            can_export: self.has_records(),
            notice: self.notice.clone(),
            fields,
            triggers: self.available_triggers(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }

    /// Replaces the collection and restarts the workflow at the Form stage.
    pub(crate) fn replace_collection(&mut self, collection: Collection, source_filename: String) {
        self.collection = Some(collection);
        self.source_filename = source_filename;
        self.clear_pending();
    }

    pub(crate) fn set_pending(&mut self, record: JobRecord) {
        self.pending = Some(record);
        self.extra_field_count = 0;
    }

    pub(crate) fn pending_mut(&mut self) -> Option<&mut JobRecord> {
        self.pending.as_mut()
    }

    pub(crate) fn add_custom_field_slot(&mut self) {
        self.extra_field_count += 1;
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
        self.extra_field_count = 0;
    }

    /// Appends the pending record to the collection. Returns the new length.
    pub(crate) fn commit_pending(&mut self) -> Option<usize> {
        let collection = self.collection.as_mut()?;
        let record = self.pending.take()?;
        collection.push(Value::Object(record));
        self.extra_field_count = 0;
        Some(collection.len())
    }

    /// Back to the pre-Loader state. The notice survives so the host can still show it.
    pub(crate) fn clear_all(&mut self) {
        self.collection = None;
        self.source_filename.clear();
        self.clear_pending();
    }
}
