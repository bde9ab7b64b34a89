use super::*;

/// Tests updating a subject's name.
///
/// Expected: Ok(Some) with updated subject
#[tokio::test]
async fn updates_subject_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let subject = factory::subject::create_subject_with_name(db, "Algebra I").await?;

    let repo = SubjectRepository::new(db);
    let updated = repo.update(subject.id, "Algebra II".to_string()).await?;

    assert!(updated.is_some());
    assert_eq!(updated.unwrap().name, "Algebra II");

    Ok(())
}

/// Tests updating a subject that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubjectRepository::new(db);
    let updated = repo.update(999, "Ghost".to_string()).await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests renaming a subject to a name another subject already holds.
///
/// Expected: Err with unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Subject)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::subject::create_subject_with_name(db, "Taken").await?;
    let subject = factory::subject::create_subject_with_name(db, "Free").await?;

    let repo = SubjectRepository::new(db);
    let result = repo.update(subject.id, "Taken".to_string()).await;

    assert!(result.is_err());
    let error = result.unwrap_err();
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {}
        other => panic!("Expected unique constraint violation, got: {:?}", other),
    }

    Ok(())
}
