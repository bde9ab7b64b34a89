use super::*;

/// Tests listing requests in primary-key order.
///
/// Expected: Ok with requests ordered by ID
#[tokio::test]
async fn lists_requests_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::request::create_requests(db, 4).await?;

    let repo = RequestRepository::new(db);
    let requests = repo.list(10, 0).await?;

    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].id, created[0].id);
    assert_eq!(requests[3].id, created[3].id);

    Ok(())
}

/// Tests an offset past the end of the collection.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_offset_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Request)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::request::create_requests(db, 2).await?;

    let repo = RequestRepository::new(db);
    let requests = repo.list(10, 10).await?;

    assert!(requests.is_empty());

    Ok(())
}
