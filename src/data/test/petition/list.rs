use super::*;

/// Tests listing petitions in primary-key order.
///
/// Expected: Ok with petitions ordered by ID
#[tokio::test]
async fn lists_petitions_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::petition::create_petitions(db, 3).await?;

    let repo = PetitionRepository::new(db);
    let petitions = repo.list(10, 0).await?;

    assert_eq!(petitions.len(), 3);
    assert_eq!(petitions[0].id, created[0].id);
    assert_eq!(petitions[2].id, created[2].id);

    Ok(())
}

/// Tests paginating petitions across several windows.
///
/// Verifies that windows of two rows cover five petitions without overlap.
///
/// Expected: Ok with correct window of petitions
#[tokio::test]
async fn paginates_petitions_correctly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::petition::create_petitions(db, 5).await?;

    let repo = PetitionRepository::new(db);

    let page1 = repo.list(2, 0).await?;
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].id, created[0].id);

    let page2 = repo.list(2, 2).await?;
    assert_eq!(page2.len(), 2);
    assert_eq!(page2[0].id, created[2].id);

    let page3 = repo.list(2, 4).await?;
    assert_eq!(page3.len(), 1);
    assert_eq!(page3[0].id, created[4].id);

    Ok(())
}
