use serde::Deserialize;
use serde_json::Value;

use crate::{application::dto::UpdateCommandRequest, domain::errors::DomainError};

/// One JSON-patch instruction. Only `replace` is supported; the path space is
/// the closed set of mutable Command fields rather than arbitrary pointers.
#[derive(Debug, Deserialize)]
pub struct PatchOperation {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Value,
}

/// Applies operations strictly in the order given; a later operation may
/// overwrite an earlier one's effect. Any unsupported op, unknown path, or
/// non-string value fails the whole document.
pub fn apply_patch(
    target: &mut UpdateCommandRequest,
    operations: &[PatchOperation],
) -> Result<(), DomainError> {
    for operation in operations {
        apply_operation(target, operation)?;
    }
    Ok(())
}

fn apply_operation(
    target: &mut UpdateCommandRequest,
    operation: &PatchOperation,
) -> Result<(), DomainError> {
    if operation.op != "replace" {
        return Err(DomainError::validation(
            "op",
            format!("unsupported patch op '{}'; only 'replace' is allowed", operation.op),
        ));
    }

    let Value::String(value) = &operation.value else {
        return Err(DomainError::validation(
            "value",
            format!("patch value for '{}' must be a string", operation.path),
        ));
    };

    match resolve_path(&operation.path) {
        Some(CommandField::HowTo) => target.how_to = value.clone(),
        Some(CommandField::Platform) => target.platform = value.clone(),
        Some(CommandField::CommandLine) => target.command_line = value.clone(),
        None => {
            return Err(DomainError::validation(
                "path",
                format!("unknown patch path '{}'", operation.path),
            ));
        }
    }

    Ok(())
}

enum CommandField {
    HowTo,
    Platform,
    CommandLine,
}

/// Case-insensitive and underscore-insensitive, so `/howto` and `/how_to`
/// name the same field.
fn resolve_path(path: &str) -> Option<CommandField> {
    let normalized = path
        .strip_prefix('/')?
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.as_str() {
        "howto" => Some(CommandField::HowTo),
        "platform" => Some(CommandField::Platform),
        "commandline" => Some(CommandField::CommandLine),
        _ => None,
    }
}
