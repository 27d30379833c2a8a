pub mod command;
pub mod constants;
pub mod prompt;
pub mod render;
