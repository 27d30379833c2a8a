/// Work the host performs on behalf of the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Save the serialized collection under `filename`.
    WriteExport { filename: String, contents: String },
}
