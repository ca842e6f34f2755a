use super::*;

/// Tests resetting a published group playoff draw.
///
/// The playoff holds rank placeholders and advancement pointers into the same draw, so
/// this covers every cross-reference between fixture rows.
///
/// Expected: Ok with all three groups deleted and the teams kept
#[tokio::test]
async fn deletes_entire_draw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 8).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let repo = DrawRepository::new(db);
    repo.publish(
        tournament.id,
        &draw(TournamentFormat::GroupPlayoff, 8, Some(2)),
        &team_ids,
    )
    .await?;

    let deleted = repo.delete_for_tournament(tournament.id).await?;

    assert_eq!(deleted, 3);
    assert!(!repo.exists_for_tournament(tournament.id).await?);
    assert!(entity::prelude::FixtureRound::find().all(db).await?.is_empty());
    assert!(entity::prelude::FixtureMatch::find().all(db).await?.is_empty());
    assert_eq!(entity::prelude::Team::find().all(db).await?.len(), 8);

    Ok(())
}

/// Tests deleting when nothing was published.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_draw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "knockout").await?;

    let repo = DrawRepository::new(db);
    assert_eq!(repo.delete_for_tournament(tournament.id).await?, 0);

    Ok(())
}

/// Tests that a reset draw can be published again.
///
/// Expected: Ok on the second publish
#[tokio::test]
async fn allows_republishing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 5).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
    let bracket = draw(TournamentFormat::Knockout, 5, None);

    let repo = DrawRepository::new(db);
    repo.publish(tournament.id, &bracket, &team_ids).await?;
    repo.delete_for_tournament(tournament.id).await?;
    let groups = repo.publish(tournament.id, &bracket, &team_ids).await?;

    assert_eq!(groups.len(), 1);

    Ok(())
}
