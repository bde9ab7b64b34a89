use super::*;

/// Tests updating a request's name.
///
/// Expected: Ok(Some) with updated request
#[tokio::test]
async fn updates_request_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::request::create_request_with_name(db, "Draft").await?;

    let repo = RequestRepository::new(db);
    let updated = repo.update(request.id, "Final".to_string()).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Final");

    Ok(())
}

/// Tests updating a request that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let updated = repo.update(999, "Ghost".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}
