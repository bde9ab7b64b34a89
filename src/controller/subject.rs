use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::ListParams,
    data::subject::SubjectRepository,
    error::AppError,
    extract::AppJson,
    model::{
        api::{DeleteResultDto, ErrorDto},
        subject::{CreateSubjectDto, SubjectDto, UpdateSubjectDto},
    },
    state::AppState,
    util::parse::parse_id,
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subject";

/// Create a new subject.
///
/// Subject names are unique; a duplicate name is rejected as a client error.
#[utoipa::path(
    post,
    path = "/subjects",
    tag = SUBJECT_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 200, description = "Successfully created subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = SubjectRepository::new(&state.db);

    let subject = repo
        .create(payload.subject_name)
        .await
        .map_err(|err| AppError::write_failure(err, "saving failed"))?;

    Ok((StatusCode::OK, Json(SubjectDto::from(subject))))
}

/// Get a specific subject by ID.
#[utoipa::path(
    get,
    path = "/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subject", body = SubjectDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subject_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = SubjectRepository::new(&state.db);

    let subject = repo.get_by_id(id).await?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(SubjectDto::from(subject)))),
        None => Err(AppError::NotFound(format!(
            "subject with id {} not found",
            id
        ))),
    }
}

/// List subjects.
#[utoipa::path(
    get,
    path = "/subjects",
    tag = SUBJECT_TAG,
    params(
        ("limit" = Option<String>, Query, description = "Page size (default: 10)"),
        ("offset" = Option<String>, Query, description = "Rows to skip (default: 0)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved subjects", body = Vec<SubjectDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (limit, offset) = params.resolve();

    let repo = SubjectRepository::new(&state.db);

    let subjects = repo.list(limit, offset).await?;

    Ok((
        StatusCode::OK,
        Json(
            subjects
                .into_iter()
                .map(SubjectDto::from)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Update a subject.
#[utoipa::path(
    put,
    path = "/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    request_body = UpdateSubjectDto,
    responses(
        (status = 200, description = "Successfully updated subject", body = SubjectDto),
        (status = 400, description = "Invalid subject data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    tracing::debug!("updating subject {}", id);

    let repo = SubjectRepository::new(&state.db);

    let subject = repo
        .update(id, payload.subject_name)
        .await
        .map_err(|err| AppError::write_failure(err, "update failed"))?;

    match subject {
        Some(subject) => Ok((StatusCode::OK, Json(SubjectDto::from(subject)))),
        None => Err(AppError::BadRequest("update failed".to_string())),
    }
}

/// Delete a subject.
#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted subject", body = DeleteResultDto),
        (status = 400, description = "Invalid ID", body = ErrorDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;

    let repo = SubjectRepository::new(&state.db);

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
            "subject with id {} not found",
            id
        )))
    }
}
