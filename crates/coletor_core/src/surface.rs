//! Host-facing description of each stage: which inputs to show and which
//! triggers are available. The host renders these; the core never does.

use crate::record::{
    Seniority, WorkMode, BENEFICIOS, CIDADE_TRABALHO, EMPRESA, FORMA_TRABALHO, HTML_VAGA,
    REQUISITOS, RESPONSABILIDADES, SENIORIDADE, SENIORIDADE_OUTRO, TITULO, URL_VAGA,
};

/// Path of the JSON file to load (Uninitialized stage).
pub const UPLOAD_PATH: &str = "arquivo";
/// Download filename override (available while records exist).
pub const DOWNLOAD_FILENAME: &str = "nome_download";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Select,
    Button,
}

/// Free-text companion shown when a select takes a particular option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectDetail {
    pub when: &'static str,
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub options: Vec<&'static str>,
    pub default: Option<String>,
    pub detail: Option<SelectDetail>,
}

impl FieldDescriptor {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            default: None,
            detail: None,
        }
    }

    fn select(name: &str, label: &str, options: Vec<&'static str>) -> Self {
        let default = options.first().map(|o| o.to_string());
        Self {
            options,
            default,
            ..Self::new(name, label, FieldKind::Select)
        }
    }

    fn with_detail(mut self, detail: SelectDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn is_input(&self) -> bool {
        self.kind != FieldKind::Button
    }
}

/// User actions, named as the host exposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    StartEmpty,
    Upload,
    SubmitForm,
    AddCustomField,
    ConfirmCustomFields,
    Commit,
    BackToForm,
    Download,
    ClearData,
}

impl Trigger {
    pub fn name(self) -> &'static str {
        match self {
            Trigger::StartEmpty => "comecar",
            Trigger::Upload => "carregar",
            Trigger::SubmitForm => "confirmar_dados",
            Trigger::AddCustomField => "adicionar_campo",
            Trigger::ConfirmCustomFields => "confirmar_campos",
            Trigger::Commit => "adicionar_vaga",
            Trigger::BackToForm => "voltar",
            Trigger::Download => "baixar",
            Trigger::ClearData => "limpar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Trigger::StartEmpty => "Começar",
            Trigger::Upload => "Carregar Arquivo JSON",
            Trigger::SubmitForm => "Confirmar Dados",
            Trigger::AddCustomField => "Adicionar Mais um Campo",
            Trigger::ConfirmCustomFields => "Confirmar Campos Personalizados",
            Trigger::Commit => "Adicionar Vaga ao Arquivo Principal",
            Trigger::BackToForm => "Voltar ao Formulário",
            Trigger::Download => "Baixar Arquivo JSON Atualizado",
            Trigger::ClearData => "Limpar Dados (recomeçar)",
        }
    }

    fn button(self) -> FieldDescriptor {
        FieldDescriptor::new(self.name(), self.label(), FieldKind::Button)
    }
}

pub fn custom_name_key(index: usize) -> String {
    format!("campo_nome_{index}")
}

pub fn custom_value_key(index: usize) -> String {
    format!("campo_valor_{index}")
}

pub fn start_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(UPLOAD_PATH, "1. Carregar Arquivo JSON", FieldKind::Text),
        Trigger::Upload.button(),
        Trigger::StartEmpty.button(),
    ]
}

/// Form stage inputs in display order.
pub fn form_fields() -> Vec<FieldDescriptor> {
    use FieldKind::{Text, TextArea};

    vec![
        FieldDescriptor::new(TITULO, "Título da Vaga", Text),
        FieldDescriptor::new(EMPRESA, "Empresa", Text),
        FieldDescriptor::select(SENIORIDADE, "Senioridade", Seniority::labels()).with_detail(
            SelectDetail {
                when: Seniority::Other.label(),
                field: SENIORIDADE_OUTRO,
                label: "Especifique a Senioridade:",
            },
        ),
        FieldDescriptor::select(FORMA_TRABALHO, "Forma de Trabalho", WorkMode::labels()),
        FieldDescriptor::new(CIDADE_TRABALHO, "Cidade de Trabalho", Text),
        FieldDescriptor::new(URL_VAGA, "URL da Vaga", Text),
        FieldDescriptor::new(REQUISITOS, "Requisitos", TextArea),
        FieldDescriptor::new(RESPONSABILIDADES, "Responsabilidades", TextArea),
        FieldDescriptor::new(BENEFICIOS, "Benefícios", TextArea),
        FieldDescriptor::new(HTML_VAGA, "Cole o HTML completo da vaga aqui:", TextArea),
        Trigger::SubmitForm.button(),
    ]
}

/// Review stage inputs: `extra_count` name/value pairs, labelled from 1.
pub fn review_fields(extra_count: usize) -> Vec<FieldDescriptor> {
    let mut fields = vec![Trigger::AddCustomField.button()];
    for i in 0..extra_count {
        fields.push(FieldDescriptor::new(
            custom_name_key(i),
            format!("Nome do Campo {}", i + 1),
            FieldKind::Text,
        ));
        fields.push(FieldDescriptor::new(
            custom_value_key(i),
            format!("Valor do Campo {}", i + 1),
            FieldKind::Text,
        ));
    }
    fields.push(Trigger::ConfirmCustomFields.button());
    fields.push(Trigger::Commit.button());
    fields.push(Trigger::BackToForm.button());
    fields
}

/// Controls shown beside every stage once a collection exists.
pub fn sidebar_fields(has_records: bool) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    if has_records {
        fields.push(FieldDescriptor::new(
            DOWNLOAD_FILENAME,
            "Nome do arquivo para download:",
            FieldKind::Text,
        ));
        fields.push(Trigger::Download.button());
    }
    fields.push(Trigger::ClearData.button());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_inputs_cover_every_fixed_field() {
        let names: Vec<_> = form_fields()
            .into_iter()
            .filter(FieldDescriptor::is_input)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            names,
            vec![
                TITULO,
                EMPRESA,
                SENIORIDADE,
                FORMA_TRABALHO,
                CIDADE_TRABALHO,
                URL_VAGA,
                REQUISITOS,
                RESPONSABILIDADES,
                BENEFICIOS,
                HTML_VAGA
            ]
        );
    }

    #[test]
    fn seniority_select_has_free_text_detail() {
        let field = form_fields()
            .into_iter()
            .find(|f| f.name == SENIORIDADE)
            .unwrap();
        assert_eq!(field.default.as_deref(), Some("Estágio"));
        assert_eq!(field.options.len(), 6);
        let detail = field.detail.unwrap();
        assert_eq!(detail.when, "Outro/Não Informado");
        assert_eq!(detail.field, SENIORIDADE_OUTRO);
    }

    #[test]
    fn review_pairs_are_one_indexed() {
        let fields = review_fields(2);
        let labels: Vec<_> = fields
            .iter()
            .filter(|f| f.is_input())
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Nome do Campo 1",
                "Valor do Campo 1",
                "Nome do Campo 2",
                "Valor do Campo 2"
            ]
        );
        assert_eq!(fields[1].name, "campo_nome_0");
    }

    #[test]
    fn download_controls_need_records() {
        assert_eq!(sidebar_fields(false).len(), 1);
        assert_eq!(sidebar_fields(true).len(), 3);
    }
}
