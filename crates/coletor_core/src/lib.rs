//! Coletor core: pure session state machine and view-model helpers.
mod codec;
mod effect;
mod msg;
mod record;
mod split;
mod state;
mod surface;
mod update;
mod view_model;

pub use codec::{export_json, load_from_json, start_empty, ExportError, LoadError};
pub use effect::Effect;
pub use msg::Msg;
pub use record::{
    apply_custom_fields, record_has_identity, Collection, CustomFieldInput, FormError, JobForm,
    JobRecord, Seniority, WorkMode, BENEFICIOS, CIDADE_TRABALHO, EMPRESA, FORMA_TRABALHO,
    HTML_VAGA, REQUISITOS, RESPONSABILIDADES, SENIORIDADE, SENIORIDADE_OUTRO, TITULO, URL_VAGA,
};
pub use split::split_field;
pub use state::{Notice, SessionState, Severity, Stage};
pub use surface::{
    custom_name_key, custom_value_key, form_fields, review_fields, sidebar_fields, start_fields,
    FieldDescriptor, FieldKind, SelectDetail, Trigger, DOWNLOAD_FILENAME, UPLOAD_PATH,
};
pub use update::update;
pub use view_model::SessionViewModel;
