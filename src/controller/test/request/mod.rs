use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use test_utils::factory;

use super::{response_json, test_state};
use crate::{
    controller::{
        request::{
            create_request, delete_request, get_request_by_id, get_requests, update_request,
        },
        ListParams,
    },
    error::AppError,
    extract::AppJson,
    model::request::{CreateRequestDto, UpdateRequestDto},
};
