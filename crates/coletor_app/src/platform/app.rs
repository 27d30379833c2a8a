use std::collections::VecDeque;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use coletor_core::{
    update, CustomFieldInput, JobForm, Msg, SessionState, Stage, DOWNLOAD_FILENAME,
};
use coletor_engine::{default_export_filename, resolve_export_filename, UploadLimits};
use coletor_logging::{coletor_debug, next_action_seq};

use super::effects::{upload_msg, EffectRunner};
use super::ui::command::{parse_command, Command};
use super::ui::constants::PROMPT;
use super::ui::prompt::{collect_values, Prompter};
use super::ui::render;

/// Interactive host: owns the session between actions and drives `update`.
pub struct App<P: Prompter, W: Write> {
    state: SessionState,
    prompter: P,
    out: W,
    runner: EffectRunner,
    limits: UploadLimits,
    today: fn() -> NaiveDate,
}

impl<P: Prompter, W: Write> App<P, W> {
    pub fn new(
        prompter: P,
        out: W,
        runner: EffectRunner,
        limits: UploadLimits,
        today: fn() -> NaiveDate,
    ) -> Self {
        Self {
            state: SessionState::new(),
            prompter,
            out,
            runner,
            limits,
            today,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Loads a file as if the user had typed `carregar <path>`.
    pub fn load_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let msg = upload_msg(path, self.limits);
        self.dispatch(msg)
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.render()?;
        while let Some(line) = self.prompter.read_line(PROMPT)? {
            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            self.handle(command)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn handle(&mut self, command: Command) -> anyhow::Result<()> {
        if let Some(trigger) = command.trigger() {
            if !self.state.available_triggers().contains(&trigger) {
                writeln!(self.out, "Comando indisponível nesta etapa.")?;
                return Ok(());
            }
        }

        match command {
            Command::Load(path) => self.load_file(&path)?,
            Command::StartEmpty => self.dispatch(Msg::StartEmptyClicked)?,
            Command::Fill => {
                let fields: Vec<_> = self
                    .state
                    .view()
                    .fields
                    .into_iter()
                    .filter(|f| f.name != DOWNLOAD_FILENAME)
                    .collect();
                let Some(values) = collect_values(&mut self.prompter, &mut self.out, &fields)?
                else {
                    return Ok(());
                };
                match JobForm::from_values(&values) {
                    Ok(form) => self.dispatch(Msg::FormSubmitted(form))?,
                    Err(err) => writeln!(self.out, "{err}")?,
                }
            }
            Command::AddField => self.dispatch(Msg::AddCustomFieldClicked)?,
            Command::ConfirmFields => {
                let count = self.state.extra_field_count();
                let fields: Vec<_> = self
                    .state
                    .view()
                    .fields
                    .into_iter()
                    .filter(|f| f.name.starts_with("campo_"))
                    .collect();
                let Some(values) = collect_values(&mut self.prompter, &mut self.out, &fields)?
                else {
                    return Ok(());
                };
                let inputs = CustomFieldInput::collect(&values, count);
                self.dispatch(Msg::CustomFieldsConfirmed(inputs))?;
            }
            Command::Commit => self.dispatch(Msg::CommitClicked)?,
            Command::Back => self.dispatch(Msg::BackToFormClicked)?,
            Command::Preview => {
                let preview = render::render_preview(&self.state.view());
                write!(self.out, "{preview}")?;
            }
            Command::Download(name) => {
                let filename = resolve_export_filename(name.as_deref(), (self.today)());
                self.dispatch(Msg::DownloadClicked { filename })?;
            }
            Command::Clear => self.dispatch(Msg::ClearDataClicked)?,
            Command::Help => write!(self.out, "{}", render::help_text())?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// One user action: update, run effects until none remain, re-render if needed.
    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let seq = next_action_seq();
        coletor_debug!("dispatch action {}", seq);

        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }

        if self.state.consume_dirty() {
            self.render()?;
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let view = self.state.view();
        let default_name = if view.stage == Stage::Uninitialized {
            String::new()
        } else {
            default_export_filename((self.today)())
        };
        write!(self.out, "\n{}", render::render(&view, &default_name))?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::platform::ui::prompt::ScriptedPrompter;
    use coletor_core::load_from_json;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn app(temp: &TempDir, script: &[&str]) -> App<ScriptedPrompter, Vec<u8>> {
        App::new(
            ScriptedPrompter::new(script),
            Vec::new(),
            EffectRunner::new(temp.path().join("output")),
            UploadLimits::default(),
            fixed_day,
        )
    }

    const FORM_ANSWERS: [&str; 14] = [
        "preencher",
        "Engineer",
        "",
        "",
        "3",
        "",
        "",
        "Python; Go",
        ".",
        ".",
        ".",
        ".",
        "campo",
        "confirmar",
    ];

    #[test]
    fn scripted_session_commits_and_downloads() {
        let temp = TempDir::new().unwrap();
        let mut script = FORM_ANSWERS.to_vec();
        script.extend(["level", "senior", "adicionar", "baixar", "sair"]);
        let mut app = app(&temp, &script);

        app.run_after_start().unwrap();

        let exported = temp
            .path()
            .join("output")
            .join("infos_vagas_dados_20240307.json");
        let collection = load_from_json(&fs::read(exported).unwrap()).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0]["titulo"], json!("Engineer"));
        assert_eq!(collection[0]["forma_trabalho"], json!("Remoto"));
        assert_eq!(collection[0]["requisitos"], json!(["Python", "Go"]));
        assert_eq!(collection[0]["level"], json!("senior"));

        let screen = String::from_utf8(app.out.clone()).unwrap();
        assert!(screen.contains("[OK] Vaga adicionada com sucesso ao arquivo!"));
        assert!(screen.contains("[OK] Arquivo salvo em"));
    }

    #[test]
    fn loads_file_and_rejects_commands_of_other_stages() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("vagas.json");
        fs::write(&input, r#"[{"titulo": "A"}]"#).unwrap();
        let mut app = app(
            &temp,
            &["adicionar", "preencher", "", "", "", "", "", "", ".", ".", ".", "."],
        );

        app.load_file(&input).unwrap();
        app.run().unwrap();

        assert_eq!(app.state().stage(), Stage::Form);
        assert_eq!(app.state().collection().unwrap().len(), 1);
        assert_eq!(app.state().source_filename(), "vagas.json");
        let screen = String::from_utf8(app.out.clone()).unwrap();
        assert!(screen.contains("Comando indisponível nesta etapa."));
        assert!(screen.contains("[AVISO] Preencha ao menos o título ou a empresa"));
    }

    #[test]
    fn bad_upload_is_reported_and_session_survives() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("quebrado.json");
        fs::write(&input, "[{").unwrap();
        let load = format!("carregar {}", input.display());
        let mut app = app(&temp, &[load.as_str(), "publicar", "novo", "limpar"]);

        app.run().unwrap();

        let screen = String::from_utf8(app.out.clone()).unwrap();
        assert!(screen.contains("[ERRO] Erro de leitura: Arquivo não é um JSON válido."));
        assert!(screen.contains("comando desconhecido: 'publicar'"));
        assert_eq!(app.state().stage(), Stage::Uninitialized);
    }

    impl<W: Write> App<ScriptedPrompter, W> {
        fn run_after_start(&mut self) -> anyhow::Result<()> {
            self.dispatch(Msg::StartEmptyClicked)?;
            self.run()
        }
    }
}
