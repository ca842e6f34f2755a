use super::*;

/// Tests draw detection before and after publishing.
///
/// Expected: false before, true after, and unaffected for other tournaments
#[tokio::test]
async fn detects_published_draw() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 4).await?;
    let other = factory::create_tournament(db, "knockout").await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let repo = DrawRepository::new(db);
    assert!(!repo.exists_for_tournament(tournament.id).await?);

    repo.publish(
        tournament.id,
        &draw(TournamentFormat::Knockout, 4, None),
        &team_ids,
    )
    .await?;

    assert!(repo.exists_for_tournament(tournament.id).await?);
    assert!(!repo.exists_for_tournament(other.id).await?);

    Ok(())
}
