use super::*;

/// Tests creating a new petition.
///
/// Verifies that the repository persists a new petition record with the
/// provided name and assigns a storage ID.
///
/// Expected: Ok with petition created
#[tokio::test]
async fn creates_petition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetitionRepository::new(db);
    let result = repo.create("Extend library hours".to_string()).await;

    assert!(result.is_ok());
    let petition = result.unwrap();
    assert!(petition.id > 0);
    assert_eq!(petition.name, "Extend library hours");

    // Verify petition exists in database
    let db_petition = Petition::find_by_id(petition.id).one(db).await?;
    assert!(db_petition.is_some());

    Ok(())
}

/// Tests creating a petition with a name that is already taken.
///
/// Verifies that the unique constraint on the name column rejects the
/// second insert with a constraint violation.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Petition)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetitionRepository::new(db);
    repo.create("Reform grading".to_string()).await?;

    let result = repo.create("Reform grading".to_string()).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {}
        other => panic!("Expected unique constraint violation, got: {:?}", other),
    }

    Ok(())
}
