pub const APP_TITLE: &str = "Projeto: Coletor de Vagas de Dados";
pub const PROMPT: &str = "coletor> ";
pub const CONTINUATION_PROMPT: &str = "... ";
/// A line holding only this ends a multi-line answer.
pub const TEXTAREA_END: &str = ".";
/// Entered as a literal `.` line instead of ending the answer.
pub const TEXTAREA_LITERAL_DOT: &str = "\\.";

pub const CMD_LOAD: &str = "carregar";
pub const CMD_START_EMPTY: &str = "novo";
pub const CMD_FILL: &str = "preencher";
pub const CMD_ADD_FIELD: &str = "campo";
pub const CMD_CONFIRM_FIELDS: &str = "confirmar";
pub const CMD_COMMIT: &str = "adicionar";
pub const CMD_BACK: &str = "voltar";
pub const CMD_PREVIEW: &str = "ver";
pub const CMD_DOWNLOAD: &str = "baixar";
pub const CMD_CLEAR: &str = "limpar";
pub const CMD_HELP: &str = "ajuda";
pub const CMD_QUIT: &str = "sair";
