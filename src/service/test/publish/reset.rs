use super::*;

/// Tests resetting and republishing a draw.
///
/// Expected: Ok with the old draw removed and a new one accepted
#[tokio::test]
async fn allows_publishing_again_after_reset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "round_robin", 4).await?;

    let service = PublishService::new(db);
    service
        .publish(tournament.id, PublishOptions::default())
        .await
        .unwrap();

    assert_eq!(service.reset(tournament.id).await.unwrap(), 1);

    let second = service
        .publish(tournament.id, PublishOptions::default())
        .await
        .unwrap();
    assert_eq!(second.group_ids.len(), 1);
    assert_eq!(entity::prelude::FixtureGroup::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests resetting an unknown tournament.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PublishService::new(db).reset(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
