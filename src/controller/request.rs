use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::ListParams,
    data::request::RequestRepository,
    error::AppError,
    extract::AppJson,
    model::{
        api::{DeleteResultDto, ErrorDto},
        request::{CreateRequestDto, RequestDto, UpdateRequestDto},
    },
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Create a new request.
#[utoipa::path(
    post,
    path = "/requests",
    tag = REQUEST_TAG,
    request_body = CreateRequestDto,
    responses(
        (status = 200, description = "Successfully created request", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = RequestRepository::new(&state.db);

    let request = repo
        .create(payload.request_name)
        .await
        .map_err(|err| AppError::write_failure(err, "saving failed"))?;

    Ok((StatusCode::OK, Json(RequestDto::from(request))))
}

/// Get a specific request by ID.
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved request", body = RequestDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = RequestRepository::new(&state.db);

    let request = repo.get_by_id(id).await?;

    match request {
        Some(request) => Ok((StatusCode::OK, Json(RequestDto::from(request)))),
        None => Err(AppError::NotFound(format!(
            "request with id {} not found",
            id
        ))),
    }
}

/// List requests.
#[utoipa::path(
    get,
    path = "/requests",
    tag = REQUEST_TAG,
    params(
        ("limit" = Option<String>, Query, description = "Page size (default: 10)"),
        ("offset" = Option<String>, Query, description = "Rows to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<RequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = params.resolve();

    let repo = RequestRepository::new(&state.db);

    let requests = repo.list(limit, offset).await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(RequestDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update a request.
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    request_body = UpdateRequestDto,
    responses(
        (status = 200, description = "Successfully updated request", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    tracing::debug!("updating request {}", id);

    let repo = RequestRepository::new(&state.db);

    let request = repo
        .update(id, payload.request_name)
        .await
        .map_err(|err| AppError::write_failure(err, "update failed"))?;

    match request {
        Some(request) => Ok((StatusCode::OK, Json(RequestDto::from(request)))),
        None => Err(AppError::BadRequest("update failed".to_string())),
    }
}

/// Delete a request.
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted request", body = DeleteResultDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = RequestRepository::new(&state.db);

    let deleted = repo.delete(id).await?;

    if deleted {
        Ok((
            StatusCode::OK,
            Json(DeleteResultDto {
                result: format!("ok deleted {}", id),
            }),
        ))
    } else {
        Err(AppError::NotFound(format!(
            "request with id {} not found",
            id
        )))
    }
}
