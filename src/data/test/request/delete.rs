use super::*;

/// Tests deleting a request.
///
/// Expected: Ok(true) with request removed
#[tokio::test]
async fn deletes_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let request = factory::request::create_request(db).await?;

    let repo = RequestRepository::new(db);
    let deleted = repo.delete(request.id).await?;

    assert!(deleted);

    let db_request = Request::find_by_id(request.id).one(db).await?;
    assert!(db_request.is_none());

    Ok(())
}

/// Tests deleting a request that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RequestRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
