use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::split::split_field;
use crate::surface::{custom_name_key, custom_value_key};

/// A job listing: fixed fields are well-known keys, custom fields are arbitrary keys.
pub type JobRecord = Map<String, Value>;

/// Committed records in commit order. Loaded elements are kept verbatim.
pub type Collection = Vec<Value>;

pub const TITULO: &str = "titulo";
pub const EMPRESA: &str = "empresa";
pub const SENIORIDADE: &str = "senioridade";
/// Form-only companion of `senioridade`; never stored in a record.
pub const SENIORIDADE_OUTRO: &str = "senioridade_outro";
pub const CIDADE_TRABALHO: &str = "cidade_trabalho";
pub const FORMA_TRABALHO: &str = "forma_trabalho";
pub const URL_VAGA: &str = "url_vaga";
pub const REQUISITOS: &str = "requisitos";
pub const RESPONSABILIDADES: &str = "responsabilidades";
pub const BENEFICIOS: &str = "beneficios";
pub const HTML_VAGA: &str = "html_vaga";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("'{value}' is not an option of field {field}")]
    UnknownOption { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seniority {
    #[default]
    Estagio,
    Junior,
    Pleno,
    Senior,
    Arquiteto,
    /// Free-text seniority supplied in `senioridade_outro`.
    Other,
}

impl Seniority {
    pub const ALL: [Seniority; 6] = [
        Seniority::Estagio,
        Seniority::Junior,
        Seniority::Pleno,
        Seniority::Senior,
        Seniority::Arquiteto,
        Seniority::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Seniority::Estagio => "Estágio",
            Seniority::Junior => "Junior",
            Seniority::Pleno => "Pleno",
            Seniority::Senior => "Senior",
            Seniority::Arquiteto => "Arquiteto",
            Seniority::Other => "Outro/Não Informado",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.label()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkMode {
    #[default]
    Presencial,
    Hibrida,
    Remoto,
    NaoInformado,
}

impl WorkMode {
    pub const ALL: [WorkMode; 4] = [
        WorkMode::Presencial,
        WorkMode::Hibrida,
        WorkMode::Remoto,
        WorkMode::NaoInformado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkMode::Presencial => "Presencial",
            WorkMode::Hibrida => "Híbrida",
            WorkMode::Remoto => "Remoto",
            WorkMode::NaoInformado => "Não Informado",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.label()).collect()
    }
}

/// Raw values of the Form stage, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobForm {
    pub titulo: String,
    pub empresa: String,
    pub senioridade: Seniority,
    pub senioridade_outro: String,
    pub forma_trabalho: WorkMode,
    pub cidade_trabalho: String,
    pub url_vaga: String,
    pub requisitos: String,
    pub responsabilidades: String,
    pub beneficios: String,
    pub html_vaga: String,
}

impl JobForm {
    /// Builds a form from host-collected `field name -> text` values.
    ///
    /// Missing text fields are empty; missing selects take their first option.
    pub fn from_values(values: &HashMap<String, String>) -> Result<Self, FormError> {
        let text = |name: &str| values.get(name).cloned().unwrap_or_default();

        let senioridade = match values.get(SENIORIDADE) {
            None => Seniority::default(),
            Some(label) => {
                Seniority::from_label(label).ok_or_else(|| FormError::UnknownOption {
                    field: SENIORIDADE,
                    value: label.clone(),
                })?
            }
        };
        let forma_trabalho = match values.get(FORMA_TRABALHO) {
            None => WorkMode::default(),
            Some(label) => WorkMode::from_label(label).ok_or_else(|| FormError::UnknownOption {
                field: FORMA_TRABALHO,
                value: label.clone(),
            })?,
        };

        Ok(Self {
            titulo: text(TITULO),
            empresa: text(EMPRESA),
            senioridade,
            senioridade_outro: text(SENIORIDADE_OUTRO),
            forma_trabalho,
            cidade_trabalho: text(CIDADE_TRABALHO),
            url_vaga: text(URL_VAGA),
            requisitos: text(REQUISITOS),
            responsabilidades: text(RESPONSABILIDADES),
            beneficios: text(BENEFICIOS),
            html_vaga: text(HTML_VAGA),
        })
    }

    /// True when the presence check passes: `titulo` or `empresa` is non-empty.
    pub fn has_identity(&self) -> bool {
        !self.titulo.is_empty() || !self.empresa.is_empty()
    }

    pub fn effective_seniority(&self) -> &str {
        match self.senioridade {
            Seniority::Other => &self.senioridade_outro,
            other => other.label(),
        }
    }

    /// Builds the pending record, splitting the three list fields.
    pub fn to_record(&self) -> JobRecord {
        let list = |raw: &str| {
            Value::Array(
                split_field(Some(raw))
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            )
        };

        let mut record = JobRecord::new();
        record.insert(TITULO.into(), Value::String(self.titulo.clone()));
        record.insert(EMPRESA.into(), Value::String(self.empresa.clone()));
        record.insert(
            SENIORIDADE.into(),
            Value::String(self.effective_seniority().to_owned()),
        );
        record.insert(
            CIDADE_TRABALHO.into(),
            Value::String(self.cidade_trabalho.clone()),
        );
        record.insert(
            FORMA_TRABALHO.into(),
            Value::String(self.forma_trabalho.label().to_owned()),
        );
        record.insert(URL_VAGA.into(), Value::String(self.url_vaga.clone()));
        record.insert(REQUISITOS.into(), list(&self.requisitos));
        record.insert(RESPONSABILIDADES.into(), list(&self.responsabilidades));
        record.insert(BENEFICIOS.into(), list(&self.beneficios));
        record.insert(HTML_VAGA.into(), Value::String(self.html_vaga.clone()));
        record
    }
}

/// True when `titulo` or `empresa` holds something other than an empty string or null.
pub fn record_has_identity(record: &JobRecord) -> bool {
    let present = |key: &str| match record.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    present(TITULO) || present(EMPRESA)
}

/// One (name, value) pair of the Review stage. `None` means the input was never supplied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomFieldInput {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl CustomFieldInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    /// Collects the first `count` pairs from host values keyed by
    /// `campo_nome_{i}`/`campo_valor_{i}`.
    pub fn collect(values: &HashMap<String, String>, count: usize) -> Vec<Self> {
        (0..count)
            .map(|i| Self {
                name: values.get(&custom_name_key(i)).cloned(),
                value: values.get(&custom_value_key(i)).cloned(),
            })
            .collect()
    }
}

/// Applies the first `count` inputs to `record` and returns how many were written.
///
/// Entries with an empty or missing name, or a missing value, are skipped.
/// Existing keys, fixed ones included, are overwritten.
pub fn apply_custom_fields(
    record: &mut JobRecord,
    inputs: &[CustomFieldInput],
    count: usize,
) -> usize {
    let mut applied = 0;
    for input in inputs.iter().take(count) {
        let (Some(name), Some(value)) = (&input.name, &input.value) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        record.insert(name.clone(), Value::String(value.clone()));
        applied += 1;
    }
    applied
}
