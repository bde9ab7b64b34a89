use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::ListParams,
    data::petition::PetitionRepository,
    error::AppError,
    extract::AppJson,
    model::{
        api::{DeleteResultDto, ErrorDto},
        petition::{CreatePetitionDto, PetitionDto, UpdatePetitionDto},
    },
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping petition endpoints in OpenAPI documentation
pub static PETITION_TAG: &str = "petition";

/// Create a new petition.
///
/// Petition names are unique; a duplicate name is rejected as a client error.
///
/// # Returns
/// - `200 OK` - Successfully created petition
/// - `400 Bad Request` - Body failed to bind or the name is already taken
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/petitions",
    tag = PETITION_TAG,
    request_body = CreatePetitionDto,
    responses(
        (status = 200, description = "Successfully created petition", body = PetitionDto),
        (status = 400, description = "Invalid petition data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_petition(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePetitionDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = PetitionRepository::new(&state.db);

    let petition = repo
        .create(payload.petition_name)
        .await
        .map_err(|err| AppError::write_failure(err, "saving failed"))?;

    Ok((StatusCode::OK, Json(PetitionDto::from(petition))))
}

/// Get a specific petition by ID.
///
/// # Returns
/// - `200 OK` - Petition details
/// - `400 Bad Request` - ID is not a decimal integer
/// - `404 Not Found` - No petition with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/petitions/{id}",
    tag = PETITION_TAG,
    params(
        ("id" = i32, Path, description = "Petition ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved petition", body = PetitionDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Petition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_petition_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = PetitionRepository::new(&state.db);

    let petition = repo.get_by_id(id).await?;

    match petition {
        Some(petition) => Ok((StatusCode::OK, Json(PetitionDto::from(petition)))),
        None => Err(AppError::NotFound(format!(
            "petition with id {} not found",
            id
        ))),
    }
}

/// List petitions.
///
/// Returns a window of the petition collection in primary-key order;
/// malformed `limit`/`offset` values fall back to the defaults (10/0).
///
/// # Returns
/// - `200 OK` - Sequence of petitions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/petitions",
    tag = PETITION_TAG,
    params(
        ("limit" = Option<String>, Query, description = "Page size (default: 10)"),
        ("offset" = Option<String>, Query, description = "Rows to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved petitions", body = Vec<PetitionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_petitions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = params.resolve();

    let repo = PetitionRepository::new(&state.db);

    let petitions = repo.list(limit, offset).await?;

    Ok((
        StatusCode::OK,
        Json(
            petitions
                .into_iter()
                .map(PetitionDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update a petition.
///
/// The path ID always wins; any stray `id` key in the body is ignored.
///
/// # Returns
/// - `200 OK` - Successfully updated petition
/// - `400 Bad Request` - ID or body failed to parse, or the write was rejected
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/petitions/{id}",
    tag = PETITION_TAG,
    params(
        ("id" = i32, Path, description = "Petition ID")
    ),
    request_body = UpdatePetitionDto,
    responses(
        (status = 200, description = "Successfully updated petition", body = PetitionDto),
        (status = 400, description = "Invalid petition data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_petition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdatePetitionDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    tracing::debug!("updating petition {}", id);

    let repo = PetitionRepository::new(&state.db);

    let petition = repo
        .update(id, payload.petition_name)
        .await
        .map_err(|err| AppError::write_failure(err, "update failed"))?;

    match petition {
        Some(petition) => Ok((StatusCode::OK, Json(PetitionDto::from(petition)))),
        None => Err(AppError::BadRequest("update failed".to_string())),
    }
}

/// Delete a petition.
///
/// # Returns
/// - `200 OK` - Confirmation payload naming the deleted ID
/// - `400 Bad Request` - ID is not a decimal integer
/// - `404 Not Found` - No petition with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/petitions/{id}",
    tag = PETITION_TAG,
    params(
        ("id" = i32, Path, description = "Petition ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted petition", body = DeleteResultDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Petition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_petition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = PetitionRepository::new(&state.db);

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
            "petition with id {} not found",
            id
        )))
    }
}
