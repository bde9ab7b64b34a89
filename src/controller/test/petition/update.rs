use super::*;

/// Tests updating a petition through the handler.
///
/// Expected: 200 with the updated petition
#[tokio::test]
async fn updates_petition() -> Result<(), AppError> {
    let state = test_state().await;
    let petition = factory::petition::create_petition_with_name(&state.db, "Old title").await?;

    let response = update_petition(
        State(state),
        Path(petition.id.to_string()),
        AppJson(UpdatePetitionDto {
            petition_name: "New title".to_string(),
        }),
    )
    .await?
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!({ "id": petition.id, "PetitionName": "New title" }));

    Ok(())
}

/// Tests renaming a petition to a name another petition already holds.
///
/// Verifies that the unique constraint violation surfaces as a client
/// error with the update failure message.
///
/// Expected: BadRequest error
#[tokio::test]
async fn returns_bad_request_for_duplicate_name() -> Result<(), AppError> {
    let state = test_state().await;
    factory::petition::create_petition_with_name(&state.db, "Taken").await?;
    let petition = factory::petition::create_petition_with_name(&state.db, "Free").await?;

    let result = update_petition(
        State(state),
        Path(petition.id.to_string()),
        AppJson(UpdatePetitionDto {
            petition_name: "Taken".to_string(),
        }),
    )
    .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "update failed"),
        Err(other) => panic!("Expected BadRequest, got: {:?}", other),
        Ok(_) => panic!("Expected BadRequest, got success"),
    }

    Ok(())
}

/// Tests updating a petition that does not exist.
///
/// Expected: BadRequest error
#[tokio::test]
async fn returns_bad_request_for_missing_petition() {
    let state = test_state().await;

    let result = update_petition(
        State(state),
        Path("999".to_string()),
        AppJson(UpdatePetitionDto {
            petition_name: "Ghost".to_string(),
        }),
    )
    .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "update failed"),
        Err(other) => panic!("Expected BadRequest, got: {:?}", other),
        Ok(_) => panic!("Expected BadRequest, got success"),
    }
}
