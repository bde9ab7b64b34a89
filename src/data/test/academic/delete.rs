use super::*;

/// Tests deleting an academic.
///
/// Verifies that the repository removes the row and reports that a
/// deletion took place.
///
/// Expected: Ok(true) with academic removed
#[tokio::test]
async fn deletes_academic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Academic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let academic = factory::academic::create_academic(db).await?;

    let repo = AcademicRepository::new(db);
    let deleted = repo.delete(academic.id).await?;

    assert!(deleted);

    // Verify academic no longer exists in database
    let db_academic = Academic::find_by_id(academic.id).one(db).await?;
    assert!(db_academic.is_none());

    Ok(())
}

/// Tests deleting an academic that does not exist.
///
/// Verifies that the repository reports that no row was removed.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_academic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Academic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicRepository::new(db);
    let deleted = repo.delete(999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests deleting one academic leaves others untouched.
///
/// Verifies that the deletion is scoped to the addressed row.
///
/// Expected: Ok(true) with only the addressed academic removed
#[tokio::test]
async fn deletes_only_the_addressed_academic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Academic)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::academic::create_academic(db).await?;
    let second = factory::academic::create_academic(db).await?;

    let repo = AcademicRepository::new(db);
    let deleted = repo.delete(first.id).await?;

    assert!(deleted);

    let remaining = Academic::find_by_id(second.id).one(db).await?;
    assert!(remaining.is_some());

    Ok(())
}
