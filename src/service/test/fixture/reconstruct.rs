use super::*;

/// Tests a tournament without a published draw.
///
/// Expected: Ok with the `new` status, not an error
#[tokio::test]
async fn reports_new_before_publish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 4).await?;

    let service = FixtureService::new(db);
    let view = service.reconstruct(tournament.id).await.unwrap();

    assert_eq!(view, FixtureView::New);
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        serde_json::json!({ "status": "new" })
    );

    Ok(())
}

/// Tests reconstructing an unknown tournament.
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

    let service = FixtureService::new(db);
    let result = service.reconstruct(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an unknown stored format is rejected instead of returning nothing.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_unknown_format() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "swiss").await?;

    let service = FixtureService::new(db);
    let result = service.reconstruct(tournament.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a published round-robin with two groups.
///
/// Expected: Ok with both groups as siblings and no playoff
#[tokio::test]
async fn reconstructs_round_robin_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "round_robin", 6).await?;
    PublishService::new(db)
        .publish(
            tournament.id,
            PublishOptions {
                group_count: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let tree = generated(FixtureService::new(db).reconstruct(tournament.id).await.unwrap());

    assert!(tree.playoff.is_none());
    let titles: Vec<&str> = tree.groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Group A", "Group B"]);

    // Three teams per group: three matchdays with one match each.
    let group_a = &tree.groups[0];
    assert_eq!(group_a.rounds.len(), 3);
    assert!(group_a.rounds.iter().all(|r| r.matches.len() == 1));
    assert!(matches!(
        &group_a.rounds[0].matches[0].team1,
        Opponent::Team { id, .. } if teams.iter().any(|t| t.id == *id)
    ));

    Ok(())
}

/// Tests a published knockout bracket.
///
/// Expected: Ok with the bracket as the playoff, final first
#[tokio::test]
async fn reconstructs_knockout_final_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 6).await?;
    PublishService::new(db)
        .publish(tournament.id, PublishOptions::default())
        .await
        .unwrap();

    let tree = generated(FixtureService::new(db).reconstruct(tournament.id).await.unwrap());

    assert!(tree.groups.is_empty());
    let playoff = tree.playoff.unwrap();
    let titles: Vec<&str> = playoff.rounds.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Final", "Semi-finals", "Quarter-finals"]);

    let opening = &playoff.rounds[2].matches[0];
    assert_eq!(
        opening.team1,
        Opponent::Team {
            id: teams[0].id,
            name: teams[0].name.clone(),
            image: None
        }
    );
    assert_eq!(opening.team2, Opponent::Pending);
    assert_eq!(opening.next_match_id, Some(playoff.rounds[1].matches[0].id));

    Ok(())
}

/// Tests a published group playoff.
///
/// Verifies the two phases are presented side by side and the playoff leaves show
/// placeholders named after their source groups.
///
/// Expected: Ok with groups, and a reversed playoff of "Winner N of Group X" entries
#[tokio::test]
async fn reconstructs_group_playoff_placeholders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 8).await?;
    PublishService::new(db)
        .publish(
            tournament.id,
            PublishOptions {
                group_count: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let view = FixtureService::new(db).reconstruct(tournament.id).await.unwrap();
    let json = serde_json::to_value(&view).unwrap();
    let tree = generated(view);

    assert_eq!(tree.groups.len(), 2);
    assert!(tree.groups.iter().all(|g| !g.is_final));

    let playoff = tree.playoff.unwrap();
    assert_eq!(playoff.title, "Playoff");
    assert_eq!(playoff.rounds[0].title, "Final");

    assert_eq!(json["status"], "generated");
    assert_eq!(json["format"], "group_playoff");
    let leaf = &json["playoff"]["rounds"][1]["matches"][0];
    assert_eq!(
        leaf["team1"],
        serde_json::json!({ "user1": null, "user2": null, "name": "Winner 1 of Group A" })
    );
    assert_eq!(leaf["team2"]["name"], "Winner 2 of Group B");
    assert_eq!(json["playoff"]["rounds"][0]["matches"][0]["team1"], serde_json::Value::Null);

    Ok(())
}

/// Tests that reconstruction has no side effects.
///
/// Expected: identical output from two consecutive calls
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 9).await?;
    PublishService::new(db)
        .publish(
            tournament.id,
            PublishOptions {
                group_count: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let service = FixtureService::new(db);
    let first = service.reconstruct(tournament.id).await.unwrap();
    let second = service.reconstruct(tournament.id).await.unwrap();

    assert_eq!(first, second);

    Ok(())
}

/// Tests a placeholder that references a group outside the draw.
///
/// Expected: Err(FixtureErr::MissingSourceGroup)
#[tokio::test]
async fn fails_on_dangling_placeholder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "group_playoff").await?;
    let other = factory::create_tournament(db, "group_playoff").await?;
    let foreign = factory::create_group(db, other.id, "Group Z").await?;

    let (home, away) = (
        factory::create_team(db, tournament.id).await?,
        factory::create_team(db, tournament.id).await?,
    );
    let group = factory::create_group(db, tournament.id, "Group A").await?;
    let round = factory::create_round(db, group.id, 0).await?;
    factory::create_match(db, round.id, 0, home.id, away.id).await?;

    let playoff = FixtureGroupFactory::new(db, tournament.id)
        .title("Playoff")
        .position(1)
        .is_final(true)
        .build()
        .await?;
    let final_round = factory::create_round(db, playoff.id, 0).await?;
    let dangling = FixtureMatchFactory::new(db, final_round.id)
        .team1_placeholder(1, group.id)
        .team2_placeholder(1, foreign.id)
        .build()
        .await?;

    let result = FixtureService::new(db).reconstruct(tournament.id).await;

    match result {
        Err(AppError::FixtureErr(FixtureError::MissingSourceGroup { match_id, group_id })) => {
            assert_eq!(match_id, dangling.id);
            assert_eq!(group_id, foreign.id);
        }
        other => panic!("expected a missing source group, got {:?}", other),
    }

    Ok(())
}

/// Tests a group playoff draw missing its final group.
///
/// Expected: Err(FixtureErr::UnexpectedGroupCount)
#[tokio::test]
async fn fails_without_final_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "group_playoff").await?;
    let (home, away) = (
        factory::create_team(db, tournament.id).await?,
        factory::create_team(db, tournament.id).await?,
    );
    let group = factory::create_group(db, tournament.id, "Group A").await?;
    let round = factory::create_round(db, group.id, 0).await?;
    factory::create_match(db, round.id, 0, home.id, away.id).await?;

    let result = FixtureService::new(db).reconstruct(tournament.id).await;

    assert!(matches!(
        result,
        Err(AppError::FixtureErr(FixtureError::UnexpectedGroupCount { found: 0, .. }))
    ));

    Ok(())
}

/// Tests a round persisted without matches.
///
/// Expected: Err(FixtureErr::EmptyRound) rather than a silently shortened tree
#[tokio::test]
async fn fails_on_empty_round() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tournament = factory::create_tournament(db, "round_robin").await?;
    let group = factory::create_group(db, tournament.id, "Group A").await?;
    let round = factory::create_round(db, group.id, 0).await?;

    let result = FixtureService::new(db).reconstruct(tournament.id).await;

    match result {
        Err(AppError::FixtureErr(FixtureError::EmptyRound { group_id, round_id })) => {
            assert_eq!(group_id, group.id);
            assert_eq!(round_id, round.id);
        }
        other => panic!("expected an empty round, got {:?}", other),
    }

    Ok(())
}
