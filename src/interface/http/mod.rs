pub mod commands_handler;
pub mod problem;
