use std::collections::HashMap;
use std::io::Write;

use coletor_core::{FieldDescriptor, FieldKind};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::constants::{CONTINUATION_PROMPT, TEXTAREA_END, TEXTAREA_LITERAL_DOT};

/// Source of user input lines. `Ok(None)` means the user closed the input.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

pub struct RustylinePrompter {
    editor: DefaultEditor,
}

impl RustylinePrompter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for RustylinePrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Prompts every input field in `fields`, in order.
///
/// Returns `None` when input ends before the last field.
pub fn collect_values<P: Prompter, W: Write>(
    prompter: &mut P,
    out: &mut W,
    fields: &[FieldDescriptor],
) -> anyhow::Result<Option<HashMap<String, String>>> {
    let mut values = HashMap::new();
    for field in fields.iter().filter(|f| f.is_input()) {
        let value = match field.kind {
            FieldKind::Text => prompter.read_line(&format!("{}: ", field.label))?,
            FieldKind::TextArea => read_text_area(prompter, out, &field.label)?,
            FieldKind::Select => read_select(prompter, out, field)?,
            FieldKind::Button => continue,
        };
        let Some(value) = value else {
            return Ok(None);
        };

        if let Some(detail) = &field.detail {
            if value == detail.when {
                let Some(extra) = prompter.read_line(&format!("{} ", detail.label))? else {
                    return Ok(None);
                };
                values.insert(detail.field.to_string(), extra);
            }
        }
        values.insert(field.name.clone(), value);
    }
    Ok(Some(values))
}

fn read_text_area<P: Prompter, W: Write>(
    prompter: &mut P,
    out: &mut W,
    label: &str,
) -> anyhow::Result<Option<String>> {
    writeln!(
        out,
        "{label} (separe os itens por linha ou use `;`; termine com uma linha contendo só \
         '{TEXTAREA_END}'; para um item '.' digite '{TEXTAREA_LITERAL_DOT}')"
    )?;
    let mut lines = Vec::new();
    loop {
        match prompter.read_line(CONTINUATION_PROMPT)? {
            None if lines.is_empty() => return Ok(None),
            None => break,
            Some(line) if line.trim() == TEXTAREA_END => break,
            Some(line) if line.trim() == TEXTAREA_LITERAL_DOT => {
                lines.push(TEXTAREA_END.to_string());
            }
            Some(line) => lines.push(line),
        }
    }
    Ok(Some(lines.join("\n")))
}

fn read_select<P: Prompter, W: Write>(
    prompter: &mut P,
    out: &mut W,
    field: &FieldDescriptor,
) -> anyhow::Result<Option<String>> {
    writeln!(out, "{}:", field.label)?;
    for (i, option) in field.options.iter().enumerate() {
        let marker = if field.default.as_deref() == Some(*option) {
            " (padrão)"
        } else {
            ""
        };
        writeln!(out, "  {}) {}{}", i + 1, option, marker)?;
    }
    loop {
        let Some(answer) = prompter.read_line("Escolha: ")? else {
            return Ok(None);
        };
        if let Some(choice) = pick_option(field, answer.trim()) {
            return Ok(Some(choice));
        }
        writeln!(out, "Opção inválida, escolha de 1 a {}.", field.options.len())?;
    }
}

/// Blank picks the default; otherwise a 1-based number or an exact label.
fn pick_option(field: &FieldDescriptor, answer: &str) -> Option<String> {
    if answer.is_empty() {
        return field.default.clone();
    }
    if let Ok(n) = answer.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| field.options.get(i))
            .map(|o| o.to_string());
    }
    field
        .options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(answer))
        .map(|o| o.to_string())
}

/// Replays a fixed list of answers; used to drive the host in tests.
#[cfg(test)]
pub struct ScriptedPrompter {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
