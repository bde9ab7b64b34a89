use super::*;

/// Tests deleting a petition.
///
/// Expected: Ok(true) with petition removed
#[tokio::test]
async fn deletes_petition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let petition = factory::petition::create_petition(db).await?;

    let repo = PetitionRepository::new(db);
    let deleted = repo.delete(petition.id).await?;

    assert!(deleted);

    let db_petition = Petition::find_by_id(petition.id).one(db).await?;
    assert!(db_petition.is_none());

    Ok(())
}

/// Tests deleting a petition that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_petition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetitionRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}
