use std::sync::Arc;

use crate::{
    application::{
        dto::{CommandResponse, CreateCommandRequest, UpdateCommandRequest},
        patch::{self, PatchOperation},
    },
    domain::{
        command::{Command, NewCommand},
        errors::DomainError,
    },
    infrastructure::CommandRepository,
};

#[derive(Clone)]
pub struct CommandService {
    repository: Arc<dyn CommandRepository>,
}

impl CommandService {
    pub fn new(repository: Arc<dyn CommandRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_commands(&self) -> Result<Vec<CommandResponse>, DomainError> {
        let commands = self.repository.get_all().await?;
        Ok(commands.into_iter().map(CommandResponse::from).collect())
    }

    pub async fn get_command(&self, id: i64) -> Result<CommandResponse, DomainError> {
        let Some(command) = self.repository.get_by_id(id).await? else {
            return Err(DomainError::not_found("command not found"));
        };
        Ok(CommandResponse::from(command))
    }

    pub async fn create_command(
        &self,
        request: CreateCommandRequest,
    ) -> Result<CommandResponse, DomainError> {
        request.validate()?;

        let created = self
            .repository
            .create(NewCommand {
                how_to: request.how_to,
                platform: request.platform,
                command_line: request.command_line,
            })
            .await?;

        Ok(CommandResponse::from(created))
    }

    /// Full replace: every mutable field is overwritten unconditionally.
    pub async fn replace_command(
        &self,
        id: i64,
        request: UpdateCommandRequest,
    ) -> Result<(), DomainError> {
        request.validate()?;

        let Some(mut command) = self.repository.get_by_id(id).await? else {
            return Err(DomainError::not_found("command not found"));
        };

        request.apply_to(&mut command);
        self.persist_update(&command).await
    }

    /// Merge-patch: project, apply operations in order, re-validate with the
    /// create-time rules, then write back. A failed operation or a failed
    /// re-validation leaves the stored record untouched.
    pub async fn patch_command(
        &self,
        id: i64,
        operations: Vec<PatchOperation>,
    ) -> Result<(), DomainError> {
        let Some(mut command) = self.repository.get_by_id(id).await? else {
            return Err(DomainError::not_found("command not found"));
        };

        let mut projection = UpdateCommandRequest::from_command(&command);
        patch::apply_patch(&mut projection, &operations)?;
        projection.validate()?;

        projection.apply_to(&mut command);
        self.persist_update(&command).await
    }

    pub async fn delete_command(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("command not found"));
        }
        Ok(())
    }

    async fn persist_update(&self, command: &Command) -> Result<(), DomainError> {
        // The row can vanish between the load and the write; that still reads
        // as not-found to the caller.
        let matched = self.repository.update(command).await?;
        if !matched {
            return Err(DomainError::not_found("command not found"));
        }
        Ok(())
    }
}
