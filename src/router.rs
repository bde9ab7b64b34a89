use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{academic, petition, request, subject},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        academic::create_academic,
        academic::get_academic_by_id,
        academic::get_academics,
        academic::update_academic,
        academic::delete_academic,
        petition::create_petition,
        petition::get_petition_by_id,
        petition::get_petitions,
        petition::update_petition,
        petition::delete_petition,
        request::create_request,
        request::get_request_by_id,
        request::get_requests,
        request::update_request,
        request::delete_request,
        subject::create_subject,
        subject::get_subject_by_id,
        subject::get_subjects,
        subject::update_subject,
        subject::delete_subject,
    ),
    tags(
        (name = academic::ACADEMIC_TAG, description = "Academic management endpoints"),
        (name = petition::PETITION_TAG, description = "Petition management endpoints"),
        (name = request::REQUEST_TAG, description = "Request management endpoints"),
        (name = subject::SUBJECT_TAG, description = "Subject management endpoints"),
    )
)]
struct ApiDoc;

/// Mounts the five CRUD routes for one resource.
///
/// Every entity exposes the same surface: `collection` handles the list and
/// create verbs on `prefix`, `item` handles the get, update, and delete verbs
/// on `prefix/{id}`.
fn crud_resource(
    prefix: &str,
    collection: MethodRouter<AppState>,
    item: MethodRouter<AppState>,
) -> Router<AppState> {
    Router::new()
        .route(prefix, collection)
        .route(&format!("{}/{{id}}", prefix), item)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(crud_resource(
            "/academics",
            post(academic::create_academic).get(academic::get_academics),
            get(academic::get_academic_by_id)
                .put(academic::update_academic)
                .delete(academic::delete_academic),
        ))
        .merge(crud_resource(
            "/petitions",
            post(petition::create_petition).get(petition::get_petitions),
            get(petition::get_petition_by_id)
                .put(petition::update_petition)
                .delete(petition::delete_petition),
        ))
        .merge(crud_resource(
            "/requests",
            post(request::create_request).get(request::get_requests),
            get(request::get_request_by_id)
                .put(request::update_request)
                .delete(request::delete_request),
        ))
        .merge(crud_resource(
            "/subjects",
            post(subject::create_subject).get(subject::get_subjects),
            get(subject::get_subject_by_id)
                .put(subject::update_subject)
                .delete(subject::delete_subject),
        ))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
