use serde::{Deserialize, Serialize};

use crate::domain::{
    command::Command,
    errors::{DomainError, FieldViolation},
};

pub const HOW_TO_MAX_CHARS: usize = 20;
pub const PLATFORM_MAX_CHARS: usize = 15;

#[derive(Debug, Deserialize)]
pub struct CreateCommandRequest {
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

impl CreateCommandRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.how_to, &self.platform, &self.command_line)
    }
}

/// Used for full replace (PUT) and as the merge base for PATCH.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCommandRequest {
    pub how_to: String,
    pub platform: String,
    pub command_line: String,
}

impl UpdateCommandRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.how_to, &self.platform, &self.command_line)
    }

    /// Projects the stored record into the update shape, the starting point
    /// for patch application.
    pub fn from_command(command: &Command) -> Self {
        Self {
            how_to: command.how_to.clone(),
            platform: command.platform.clone(),
            command_line: command.command_line.clone(),
        }
    }

    /// Overwrites every mutable field of the record; the id stays untouched.
    pub fn apply_to(self, command: &mut Command) {
        command.how_to = self.how_to;
        command.platform = self.platform;
        command.command_line = self.command_line;
    }
}

/// Read projection. `platform` is deliberately absent: the read surface never
/// exposes it.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub id: i64,
    pub how_to: String,
    pub command_line: String,
}

impl From<Command> for CommandResponse {
    fn from(value: Command) -> Self {
        Self {
            id: value.id,
            how_to: value.how_to,
            command_line: value.command_line,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Create, replace, and post-patch re-validation all share these rules.
/// Violations are collected so the problem body can report every bad field.
fn validate_fields(
    how_to: &str,
    platform: &str,
    command_line: &str,
) -> Result<(), DomainError> {
    let mut violations = Vec::new();

    if how_to.is_empty() {
        violations.push(FieldViolation::new("how_to", "how_to must not be empty"));
    } else if how_to.chars().count() > HOW_TO_MAX_CHARS {
        violations.push(FieldViolation::new(
            "how_to",
            format!("how_to must be at most {HOW_TO_MAX_CHARS} characters"),
        ));
    }

    if platform.is_empty() {
        violations.push(FieldViolation::new(
            "platform",
            "platform must not be empty",
        ));
    } else if platform.chars().count() > PLATFORM_MAX_CHARS {
        violations.push(FieldViolation::new(
            "platform",
            format!("platform must be at most {PLATFORM_MAX_CHARS} characters"),
        ));
    }

    if command_line.is_empty() {
        violations.push(FieldViolation::new(
            "command_line",
            "command_line must not be empty",
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(violations))
    }
}
