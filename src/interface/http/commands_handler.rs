use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
};

use crate::{
    application::{
        dto::{CommandResponse, CreateCommandRequest, HealthResponse, UpdateCommandRequest},
        patch::PatchOperation,
    },
    interface::http::problem::{ApiProblem, ApiResult},
    state::AppState,
};

pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_commands(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CommandResponse>>> {
    let commands = state
        .command_service
        .list_commands()
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(commands))
}

pub async fn get_command(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<CommandResponse>> {
    let command = state
        .command_service
        .get_command(id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(Json(command))
}

pub async fn create_command(
    State(state): State<AppState>,
    Json(request): Json<CreateCommandRequest>,
) -> ApiResult<(StatusCode, HeaderMap, Json<CommandResponse>)> {
    let created = state
        .command_service
        .create_command(request)
        .await
        .map_err(ApiProblem::from_domain)?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/commands/{}", created.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(created)))
}

pub async fn replace_command(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCommandRequest>,
) -> ApiResult<StatusCode> {
    state
        .command_service
        .replace_command(id, request)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_command(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(operations): Json<Vec<PatchOperation>>,
) -> ApiResult<StatusCode> {
    state
        .command_service
        .patch_command(id, operations)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_command(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state
        .command_service
        .delete_command(id)
        .await
        .map_err(ApiProblem::from_domain)?;
    Ok(StatusCode::NO_CONTENT)
}
