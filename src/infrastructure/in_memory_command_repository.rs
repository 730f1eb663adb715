use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        command::{Command, NewCommand},
        errors::DomainError,
    },
    infrastructure::CommandRepository,
};

/// Map-backed adapter used by the contract tests and local runs without a
/// database. Ids are assigned serially, matching the Postgres adapter's
/// BIGSERIAL behavior.
pub struct InMemoryCommandRepository {
    commands_by_id: RwLock<BTreeMap<i64, Command>>,
    next_id: AtomicI64,
}

impl Default for InMemoryCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCommandRepository {
    pub fn new() -> Self {
        Self {
            commands_by_id: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CommandRepository for InMemoryCommandRepository {
    async fn create(&self, command: NewCommand) -> Result<Command, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let created = Command {
            id,
            how_to: command.how_to,
            platform: command.platform,
            command_line: command.command_line,
        };

        self.commands_by_id
            .write()
            .await
            .insert(created.id, created.clone());

        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<Command>, DomainError> {
        Ok(self
            .commands_by_id
            .read()
            .await
            .values()
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, DomainError> {
        Ok(self.commands_by_id.read().await.get(&id).cloned())
    }

    async fn update(&self, command: &Command) -> Result<bool, DomainError> {
        let mut commands_by_id = self.commands_by_id.write().await;
        let Some(existing) = commands_by_id.get_mut(&command.id) else {
            return Ok(false);
        };

        existing.how_to = command.how_to.clone();
        existing.platform = command.platform.clone();
        existing.command_line = command.command_line.clone();
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.commands_by_id.write().await.remove(&id).is_some())
    }
}
