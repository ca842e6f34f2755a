use super::*;

/// Tests registering a team with an image.
///
/// Expected: Ok with team created under the tournament
#[tokio::test]
async fn creates_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "round_robin").await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            tournament_id: tournament.id,
            name: "Lions".to_string(),
            image: Some("lions.png".to_string()),
        })
        .await?;

    assert_eq!(team.tournament_id, tournament.id);
    assert_eq!(team.name, "Lions");
    assert_eq!(team.image, Some("lions.png".to_string()));

    Ok(())
}

/// Tests registering a team for a tournament that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .create(CreateTeamParams {
            tournament_id: 999,
            name: "Lions".to_string(),
            image: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
