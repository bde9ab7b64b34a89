use super::*;

/// Tests listing academics through the handler.
///
/// Expected: 200 with all academics in ID order
#[tokio::test]
async fn lists_academics() -> Result<(), AppError> {
    let state = test_state().await;
    factory::academic::create_academic_with_name(&state.db, "Math").await?;
    factory::academic::create_academic_with_name(&state.db, "Physics").await?;

    let response = get_academics(
        State(state),
        Query(ListParams {
            limit: None,
            offset: None,
        }),
    )
    .await?
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let academics = body.as_array().unwrap();
    assert_eq!(academics.len(), 2);
    assert_eq!(academics[0]["AcademicName"], "Math");
    assert_eq!(academics[1]["AcademicName"], "Physics");

    Ok(())
}

/// Tests malformed pagination parameters fall back to the defaults.
///
/// Verifies that a request with `limit=abc&offset=xyz` behaves exactly like
/// a request without parameters, returning the default window of ten rows.
///
/// Expected: 200 with ten academics
#[tokio::test]
async fn falls_back_to_defaults_for_malformed_params() -> Result<(), AppError> {
    let state = test_state().await;
    factory::academic::create_academics(&state.db, 12).await?;

    let response = get_academics(
        State(state),
        Query(ListParams {
            limit: Some("abc".to_string()),
            offset: Some("xyz".to_string()),
        }),
    )
    .await?
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    Ok(())
}

/// Tests the limit and offset window through the handler.
///
/// Expected: 200 with the addressed window
#[tokio::test]
async fn applies_limit_and_offset() -> Result<(), AppError> {
    let state = test_state().await;
    let created = factory::academic::create_academics(&state.db, 5).await?;

    let response = get_academics(
        State(state),
        Query(ListParams {
            limit: Some("2".to_string()),
            offset: Some("2".to_string()),
        }),
    )
    .await?
    .into_response();

    let body = response_json(response).await;
    let academics = body.as_array().unwrap();
    assert_eq!(academics.len(), 2);
    assert_eq!(academics[0]["id"], created[2].id);
    assert_eq!(academics[1]["id"], created[3].id);

    Ok(())
}

/// Tests listing an empty collection.
///
/// Expected: 200 with an empty array
#[tokio::test]
async fn returns_empty_list_when_no_academics_exist() -> Result<(), AppError> {
    let state = test_state().await;

    let response = get_academics(
        State(state),
        Query(ListParams {
            limit: None,
            offset: None,
        }),
    )
    .await?
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!([]));

    Ok(())
}
