use super::*;

/// Tests updating an academic through the handler.
///
/// Verifies that the handler overwrites the name and answers with the
/// updated record under the path ID.
///
/// Expected: 200 with the updated academic
#[tokio::test]
async fn updates_academic() -> Result<(), AppError> {
    let state = test_state().await;
    let academic = factory::academic::create_academic_with_name(&state.db, "Math").await?;

    let response = update_academic(
        State(state),
        Path(academic.id.to_string()),
        AppJson(UpdateAcademicDto {
            academic_name: "Physics".to_string(),
        }),
    )
    .await?
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!({ "id": academic.id, "AcademicName": "Physics" }));

    Ok(())
}

/// Tests updating an academic that does not exist.
///
/// Verifies that the handler reports the failed write as a client error
/// rather than creating the record.
///
/// Expected: BadRequest error
#[tokio::test]
async fn returns_bad_request_for_missing_academic() {
    let state = test_state().await;

    let result = update_academic(
        State(state),
        Path("999".to_string()),
        AppJson(UpdateAcademicDto {
            academic_name: "Ghost".to_string(),
        }),
    )
    .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "update failed"),
        Err(other) => panic!("Expected BadRequest, got: {:?}", other),
        Ok(_) => panic!("Expected BadRequest, got success"),
    }
}

/// Tests a path segment that is not a decimal integer.
///
/// Expected: BadRequest error
#[tokio::test]
async fn rejects_non_numeric_id() {
    let state = test_state().await;

    let result = update_academic(
        State(state),
        Path("abc".to_string()),
        AppJson(UpdateAcademicDto {
            academic_name: "Physics".to_string(),
        }),
    )
    .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert!(msg.contains("invalid digit")),
        Err(other) => panic!("Expected BadRequest, got: {:?}", other),
        Ok(_) => panic!("Expected BadRequest, got success"),
    }
}
