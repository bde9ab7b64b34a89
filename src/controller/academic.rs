use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::ListParams,
    data::academic::AcademicRepository,
    error::AppError,
    extract::AppJson,
    model::{
        academic::{AcademicDto, CreateAcademicDto, UpdateAcademicDto},
        api::{DeleteResultDto, ErrorDto},
    },
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping academic endpoints in OpenAPI documentation
pub static ACADEMIC_TAG: &str = "academic";

/// Create a new academic.
///
/// Persists a new academic record with the provided name and returns the
/// stored entity, including its storage-assigned ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Academic creation data
///
/// # Returns
/// - `200 OK` - Successfully created academic
/// - `400 Bad Request` - Body failed to bind or the write was rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/academics",
    tag = ACADEMIC_TAG,
    request_body = CreateAcademicDto,
    responses(
        (status = 200, description = "Successfully created academic", body = AcademicDto),
        (status = 400, description = "Invalid academic data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_academic(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateAcademicDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = AcademicRepository::new(&state.db);

    let academic = repo
        .create(payload.academic_name)
        .await
        .map_err(|err| AppError::write_failure(err, "saving failed"))?;

    Ok((StatusCode::OK, Json(AcademicDto::from(academic))))
}

/// Get a specific academic by ID.
///
/// The ID path segment is parsed as a decimal integer; a segment that does
/// not parse is a client error carrying the parse message.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw ID path segment
///
/// # Returns
/// - `200 OK` - Academic details
/// - `400 Bad Request` - ID is not a decimal integer
/// - `404 Not Found` - No academic with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/academics/{id}",
    tag = ACADEMIC_TAG,
    params(
        ("id" = i32, Path, description = "Academic ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved academic", body = AcademicDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Academic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_academic_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = AcademicRepository::new(&state.db);

    let academic = repo.get_by_id(id).await?;

    match academic {
        Some(academic) => Ok((StatusCode::OK, Json(AcademicDto::from(academic)))),
        None => Err(AppError::NotFound(format!(
            "academic with id {} not found",
            id
        ))),
    }
}

/// List academics.
///
/// Returns a window of the academic collection in primary-key order. The
/// `limit` and `offset` query parameters default to 10 and 0; malformed
/// values silently fall back to the defaults rather than failing the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Raw pagination parameters
///
/// # Returns
/// - `200 OK` - Sequence of academics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/academics",
    tag = ACADEMIC_TAG,
    params(
        ("limit" = Option<String>, Query, description = "Page size (default: 10)"),
        ("offset" = Option<String>, Query, description = "Rows to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved academics", body = Vec<AcademicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_academics(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = params.resolve();

    let repo = AcademicRepository::new(&state.db);

    let academics = repo.list(limit, offset).await?;

    Ok((
        StatusCode::OK,
        Json(
            academics
                .into_iter()
                .map(AcademicDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update an academic.
///
/// Overwrites the academic's name with the payload value. The path ID always
/// wins; the update payload carries no ID and any stray `id` key in the body
/// is ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw ID path segment
/// - `payload` - Updated academic data
///
/// # Returns
/// - `200 OK` - Successfully updated academic
/// - `400 Bad Request` - ID or body failed to parse, or the write was rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/academics/{id}",
    tag = ACADEMIC_TAG,
    params(
        ("id" = i32, Path, description = "Academic ID")
    ),
    request_body = UpdateAcademicDto,
    responses(
        (status = 200, description = "Successfully updated academic", body = AcademicDto),
        (status = 400, description = "Invalid academic data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_academic(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateAcademicDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    tracing::debug!("updating academic {}", id);

    let repo = AcademicRepository::new(&state.db);

    let academic = repo
        .update(id, payload.academic_name)
        .await
        .map_err(|err| AppError::write_failure(err, "update failed"))?;

    match academic {
        Some(academic) => Ok((StatusCode::OK, Json(AcademicDto::from(academic)))),
        None => Err(AppError::BadRequest("update failed".to_string())),
    }
}

/// Delete an academic.
///
/// Hard-deletes the record. Deleting an ID that does not exist is a
/// not-found error, never a silent success.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Raw ID path segment
///
/// # Returns
/// - `200 OK` - Confirmation payload naming the deleted ID
/// - `400 Bad Request` - ID is not a decimal integer
/// - `404 Not Found` - No academic with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/academics/{id}",
    tag = ACADEMIC_TAG,
    params(
        ("id" = i32, Path, description = "Academic ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted academic", body = DeleteResultDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Academic not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_academic(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = AcademicRepository::new(&state.db);

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
            "academic with id {} not found",
            id
        )))
    }
}
