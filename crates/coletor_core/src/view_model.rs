use crate::{FieldDescriptor, Notice, Stage, Trigger};

/// Everything the host needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionViewModel {
    pub stage: Stage,
    /// `None` until a collection is loaded or started.
    pub record_count: Option<usize>,
    pub source_filename: Option<String>,
    /// Pending record as indented JSON, shown collapsed by default.
    pub pending_preview: Option<String>,
    pub extra_field_count: usize,
    pub can_export: bool,
    pub notice: Option<Notice>,
    pub fields: Vec<FieldDescriptor>,
    pub triggers: Vec<Trigger>,
    pub dirty: bool,
}
