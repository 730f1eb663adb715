pub mod command_service;
pub mod dto;
pub mod patch;
