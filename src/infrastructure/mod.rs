use async_trait::async_trait;

use crate::domain::{
    command::{Command, NewCommand},
    errors::DomainError,
};

pub mod in_memory_command_repository;
pub mod postgres_command_repository;

/// Storage port for Command rows. Every call is its own committed statement;
/// there is no deferred unit-of-work, so `update` and `delete` report whether
/// a row actually matched instead of relying on ambient change tracking.
#[async_trait]
pub trait CommandRepository: Send + Sync {
    async fn create(&self, command: NewCommand) -> Result<Command, DomainError>;
    async fn get_all(&self) -> Result<Vec<Command>, DomainError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, DomainError>;
    /// Full-row overwrite keyed by `command.id`; false when no row matched.
    async fn update(&self, command: &Command) -> Result<bool, DomainError>;
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
