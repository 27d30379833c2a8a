use coletor_logging::{coletor_debug, coletor_info, coletor_warn};

use crate::codec::{export_json, load_from_json, start_empty, LoadError};
use crate::record::{apply_custom_fields, record_has_identity};
use crate::{Effect, Msg, Notice, SessionState, Severity, Stage};

const MISSING_IDENTITY: &str = "Preencha ao menos o título ou a empresa para adicionar a vaga.";

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages that do not apply to the current stage leave the state untouched,
/// including the dirty flag.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    if !applies(&state, &msg) {
        coletor_debug!("ignoring {} in stage {:?}", msg_name(&msg), state.stage());
        return (state, Vec::new());
    }

    state.set_notice(None);
    state.mark_dirty();

    let effects = match msg {
        Msg::StartEmptyClicked => {
            state.replace_collection(start_empty(), String::new());
            coletor_info!("started with an empty collection");
            Vec::new()
        }
        Msg::FileUploaded { filename, bytes } => {
            match load_from_json(&bytes) {
                Ok(collection) => {
                    coletor_info!(
                        "loaded {} record(s) from '{}' ({} bytes)",
                        collection.len(),
                        filename,
                        bytes.len()
                    );
                    state.set_notice(Some(Notice::new(
                        Severity::Success,
                        format!("Arquivo '{filename}' carregado!"),
                    )));
                    state.replace_collection(collection, filename);
                }
                Err(err) => {
                    coletor_warn!("rejected upload '{}': {}", filename, err);
                    let text = match err {
                        LoadError::Parse(_) => "Erro de leitura: Arquivo não é um JSON válido.",
                        LoadError::Format { .. } => "Formato JSON inválido.",
                    };
                    state.set_notice(Some(Notice::new(Severity::Error, text)));
                }
            }
            Vec::new()
        }
        Msg::UploadFailed { filename, reason } => {
            coletor_warn!("upload of '{}' failed: {}", filename, reason);
            state.set_notice(Some(Notice::new(
                Severity::Error,
                format!("Não foi possível ler '{filename}': {reason}"),
            )));
            Vec::new()
        }
        Msg::FormSubmitted(form) => {
            if form.has_identity() {
                coletor_debug!("form accepted, moving to review");
                state.set_pending(form.to_record());
            } else {
                coletor_warn!("form submitted without titulo or empresa");
                state.set_notice(Some(Notice::new(Severity::Warning, MISSING_IDENTITY)));
            }
            Vec::new()
        }
        Msg::AddCustomFieldClicked => {
            state.add_custom_field_slot();
            coletor_debug!("custom field slots: {}", state.extra_field_count());
            Vec::new()
        }
        Msg::CustomFieldsConfirmed(inputs) => {
            let count = state.extra_field_count();
            if let Some(pending) = state.pending_mut() {
                let applied = apply_custom_fields(pending, &inputs, count);
                coletor_debug!("applied {} of {} custom field slot(s)", applied, count);
                state.set_notice(Some(Notice::new(
                    Severity::Info,
                    format!("{applied} campo(s) personalizado(s) aplicado(s)."),
                )));
            }
            Vec::new()
        }
        Msg::CommitClicked => {
            let has_identity = state.pending().is_some_and(record_has_identity);
            if !has_identity {
                coletor_warn!("commit refused: pending record lost titulo and empresa");
                state.set_notice(Some(Notice::new(Severity::Warning, MISSING_IDENTITY)));
            } else if let Some(len) = state.commit_pending() {
                coletor_info!("record committed, collection now has {} record(s)", len);
                state.set_notice(Some(Notice::new(
                    Severity::Success,
                    "Vaga adicionada com sucesso ao arquivo!",
                )));
            }
            Vec::new()
        }
        Msg::BackToFormClicked => {
            coletor_debug!("pending record discarded");
            state.clear_pending();
            Vec::new()
        }
        Msg::DownloadClicked { filename } => {
            let exported = state.collection().map(export_json);
            match exported {
                Some(Ok(contents)) => {
                    coletor_info!("export of '{}' requested ({} bytes)", filename, contents.len());
                    vec![Effect::WriteExport { filename, contents }]
                }
                Some(Err(err)) => {
                    state.set_notice(Some(Notice::new(
                        Severity::Error,
                        format!("Falha ao gerar o JSON: {err}"),
                    )));
                    Vec::new()
                }
                None => Vec::new(),
            }
        }
        Msg::ExportFinished { path } => {
            state.set_notice(Some(Notice::new(
                Severity::Success,
                format!("Arquivo salvo em '{path}'."),
            )));
            Vec::new()
        }
        Msg::ExportFailed { reason } => {
            state.set_notice(Some(Notice::new(
                Severity::Error,
                format!("Falha ao salvar o arquivo: {reason}"),
            )));
            Vec::new()
        }
        Msg::ClearDataClicked => {
            coletor_info!("session data cleared");
            state.clear_all();
            Vec::new()
        }
    };

    (state, effects)
}

fn applies(state: &SessionState, msg: &Msg) -> bool {
    let stage = state.stage();
    match msg {
        Msg::StartEmptyClicked => stage == Stage::Uninitialized,
        Msg::FileUploaded { .. } | Msg::UploadFailed { .. } => true,
        Msg::FormSubmitted(_) => stage == Stage::Form,
        Msg::AddCustomFieldClicked
        | Msg::CustomFieldsConfirmed(_)
        | Msg::CommitClicked
        | Msg::BackToFormClicked => stage == Stage::Review,
        Msg::DownloadClicked { .. } => state.has_records(),
        Msg::ExportFinished { .. } | Msg::ExportFailed { .. } => true,
        Msg::ClearDataClicked => stage != Stage::Uninitialized,
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::StartEmptyClicked => "StartEmptyClicked",
        Msg::FileUploaded { .. } => "FileUploaded",
        Msg::UploadFailed { .. } => "UploadFailed",
        Msg::FormSubmitted(_) => "FormSubmitted",
        Msg::AddCustomFieldClicked => "AddCustomFieldClicked",
        Msg::CustomFieldsConfirmed(_) => "CustomFieldsConfirmed",
        Msg::CommitClicked => "CommitClicked",
        Msg::BackToFormClicked => "BackToFormClicked",
        Msg::DownloadClicked { .. } => "DownloadClicked",
        Msg::ExportFinished { .. } => "ExportFinished",
        Msg::ExportFailed { .. } => "ExportFailed",
        Msg::ClearDataClicked => "ClearDataClicked",
    }
}
