use std::path::PathBuf;

use coletor_core::Trigger;

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(PathBuf),
    StartEmpty,
    Fill,
    AddField,
    ConfirmFields,
    Commit,
    Back,
    Preview,
    Download(Option<String>),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("comando desconhecido: '{0}' (digite 'ajuda')")]
    Unknown(String),
    #[error("uso: carregar <arquivo.json>")]
    MissingPath,
}

impl Command {
    /// The core trigger this command fires, if any.
    pub fn trigger(&self) -> Option<Trigger> {
        match self {
            Command::Load(_) => Some(Trigger::Upload),
            Command::StartEmpty => Some(Trigger::StartEmpty),
            Command::Fill => Some(Trigger::SubmitForm),
            Command::AddField => Some(Trigger::AddCustomField),
            Command::ConfirmFields => Some(Trigger::ConfirmCustomFields),
            Command::Commit => Some(Trigger::Commit),
            Command::Back => Some(Trigger::BackToForm),
            Command::Download(_) => Some(Trigger::Download),
            Command::Clear => Some(Trigger::ClearData),
            Command::Preview | Command::Help | Command::Quit => None,
        }
    }
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        CMD_LOAD if rest.is_empty() => return Err(CommandError::MissingPath),
        CMD_LOAD => Command::Load(PathBuf::from(rest)),
        CMD_START_EMPTY => Command::StartEmpty,
        CMD_FILL => Command::Fill,
        CMD_ADD_FIELD => Command::AddField,
        CMD_CONFIRM_FIELDS => Command::ConfirmFields,
        CMD_COMMIT => Command::Commit,
        CMD_BACK => Command::Back,
        CMD_PREVIEW => Command::Preview,
        CMD_DOWNLOAD => Command::Download(Some(rest.to_string()).filter(|s| !s.is_empty())),
        CMD_CLEAR => Command::Clear,
        CMD_HELP | "?" => Command::Help,
        CMD_QUIT | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

/// Usage line for a trigger, as listed under "Comandos".
pub fn usage(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::Upload => "carregar <arquivo>",
        Trigger::StartEmpty => CMD_START_EMPTY,
        Trigger::SubmitForm => CMD_FILL,
        Trigger::AddCustomField => CMD_ADD_FIELD,
        Trigger::ConfirmCustomFields => CMD_CONFIRM_FIELDS,
        Trigger::Commit => CMD_COMMIT,
        Trigger::BackToForm => CMD_BACK,
        Trigger::Download => "baixar [nome]",
        Trigger::ClearData => CMD_CLEAR,
    }
}
