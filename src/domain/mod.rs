pub mod command;
pub mod errors;
