use std::fmt::Write;

use coletor_core::{FieldKind, Notice, SessionViewModel, Severity, Stage};

use super::command::usage;
use super::constants::*;

/// Renders one full screen for the current view model.
///
/// `default_filename` is the download name suggested while records exist.
pub fn render(view: &SessionViewModel, default_filename: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {APP_TITLE} ==");
    render_status(&mut out, view, default_filename);

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "{}", format_notice(notice));
    }

    match view.stage {
        Stage::Uninitialized => {
            let _ = writeln!(
                out,
                "Para começar, carregue um arquivo JSON ou inicie com um arquivo vazio."
            );
        }
        Stage::Form => {
            let _ = writeln!(out, "-- 1. Preencha a Vaga --");
            let labels: Vec<_> = view
                .fields
                .iter()
                .filter(|f| f.is_input() && f.name != coletor_core::DOWNLOAD_FILENAME)
                .map(|f| f.label.as_str())
                .collect();
            let _ = writeln!(out, "Campos: {}", labels.join(", "));
        }
        Stage::Review => render_review(&mut out, view),
    }

    let commands: Vec<_> = view.triggers.iter().map(|t| usage(*t)).collect();
    let _ = writeln!(
        out,
        "Comandos: {}{}, {CMD_HELP}, {CMD_QUIT}",
        commands.join(", "),
        if view.stage == Stage::Review {
            format!(", {CMD_PREVIEW}")
        } else {
            String::new()
        }
    );
    out
}

fn render_status(out: &mut String, view: &SessionViewModel, default_filename: &str) {
    let Some(count) = view.record_count else {
        return;
    };
    match &view.source_filename {
        Some(name) => {
            let _ = writeln!(out, "Arquivo: {name} | Vagas atualmente no arquivo: {count}");
        }
        None => {
            let _ = writeln!(out, "Vagas atualmente no arquivo: {count}");
        }
    }
    if view.can_export {
        let _ = writeln!(out, "Nome do arquivo para download: {default_filename}");
    } else {
        let _ = writeln!(out, "Adicione vagas para habilitar o download.");
    }
}

fn render_review(out: &mut String, view: &SessionViewModel) {
    let _ = writeln!(out, "-- 2. Visualizar e Adicionar Campos --");
    let _ = writeln!(
        out,
        "Pré-visualização do JSON da Vaga: recolhida (use '{CMD_PREVIEW}')"
    );
    let _ = writeln!(
        out,
        "Campos personalizados: {}",
        view.extra_field_count
    );
    let pairs = view
        .fields
        .iter()
        .filter(|f| f.kind == FieldKind::Text && f.name.starts_with("campo_nome_"))
        .count();
    if pairs > 0 {
        let _ = writeln!(
            out,
            "Use '{CMD_CONFIRM_FIELDS}' para preencher Nome/Valor dos campos 1 a {pairs}."
        );
    }
}

/// Expanded pending record for the `ver` command.
pub fn render_preview(view: &SessionViewModel) -> String {
    match &view.pending_preview {
        Some(json) => format!("Pré-visualização do JSON da Vaga:\n{json}\n"),
        None => "Nenhuma vaga em revisão.\n".to_string(),
    }
}

pub fn format_notice(notice: &Notice) -> String {
    let tag = match notice.severity {
        Severity::Success => "OK",
        Severity::Info => "INFO",
        Severity::Warning => "AVISO",
        Severity::Error => "ERRO",
    };
    format!("[{tag}] {}", notice.text)
}

pub fn help_text() -> String {
    [
        "carregar <arquivo>  carrega um JSON (lista de vagas)",
        "novo                inicia com um arquivo vazio",
        "preencher           preenche o formulário da vaga",
        "campo               adiciona mais um campo personalizado",
        "confirmar           preenche e confirma os campos personalizados",
        "adicionar           adiciona a vaga ao arquivo principal",
        "voltar              descarta a vaga e volta ao formulário",
        "ver                 mostra o JSON da vaga em revisão",
        "baixar [nome]       salva o arquivo JSON atualizado",
        "limpar              limpa os dados e recomeça",
        "sair                encerra",
    ]
    .join("\n")
        + "\n"
}
