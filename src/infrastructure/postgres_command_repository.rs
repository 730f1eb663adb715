use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    domain::{
        command::{Command, NewCommand},
        errors::DomainError,
    },
    infrastructure::CommandRepository,
};

#[derive(Clone)]
pub struct PostgresCommandRepository {
    pool: PgPool,
}

impl PostgresCommandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommandRepository for PostgresCommandRepository {
    async fn create(&self, command: NewCommand) -> Result<Command, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO commands (how_to, platform, command_line)
            VALUES ($1, $2, $3)
            RETURNING id, how_to, platform, command_line
            "#,
        )
        .bind(command.how_to)
        .bind(command.platform)
        .bind(command.command_line)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row_to_command(&row))
    }

    async fn get_all(&self) -> Result<Vec<Command>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, how_to, platform, command_line
            FROM commands
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(row_to_command).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Command>, DomainError> {
        let maybe_row = sqlx::query(
            r#"
            SELECT id, how_to, platform, command_line
            FROM commands
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(maybe_row.as_ref().map(row_to_command))
    }

    async fn update(&self, command: &Command) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE commands
            SET how_to = $1, platform = $2, command_line = $3
            WHERE id = $4
            "#,
        )
        .bind(&command.how_to)
        .bind(&command.platform)
        .bind(&command.command_line)
        .bind(command.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM commands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}

fn row_to_command(row: &sqlx::postgres::PgRow) -> Command {
    Command {
        id: row.get::<i64, _>("id"),
        how_to: row.get::<String, _>("how_to"),
        platform: row.get::<String, _>("platform"),
        command_line: row.get::<String, _>("command_line"),
    }
}

fn map_sqlx_error(error: sqlx::Error) -> DomainError {
    DomainError::Storage(error.to_string())
}
