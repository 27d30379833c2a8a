use crate::{CustomFieldInput, JobForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User chose to start from an empty collection.
    StartEmptyClicked,
    /// Host read an uploaded file; the core parses it.
    FileUploaded { filename: String, bytes: Vec<u8> },
    /// Host could not read the file the user pointed at.
    UploadFailed { filename: String, reason: String },
    /// User submitted the Form stage.
    FormSubmitted(JobForm),
    /// User asked for one more custom field pair.
    AddCustomFieldClicked,
    /// User confirmed the custom field inputs, indexed from 0.
    CustomFieldsConfirmed(Vec<CustomFieldInput>),
    /// User added the pending record to the collection.
    CommitClicked,
    /// User discarded the pending record.
    BackToFormClicked,
    /// User requested a download under `filename`.
    DownloadClicked { filename: String },
    /// Host finished writing the export.
    ExportFinished { path: String },
    /// Host failed to write the export.
    ExportFailed { reason: String },
    /// User reset the whole session.
    ClearDataClicked,
}
