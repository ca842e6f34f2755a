use super::*;

/// Tests publishing a knockout draw over the tournament's teams.
///
/// Expected: Ok with one group and the draw generated for all teams
#[tokio::test]
async fn publishes_knockout_for_all_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 7).await?;

    let service = PublishService::new(db);
    let published = service
        .publish(tournament.id, PublishOptions::default())
        .await
        .unwrap();

    assert_eq!(published.tournament_id, tournament.id);
    assert_eq!(published.group_ids.len(), 1);
    assert_eq!(published.draw.format(), TournamentFormat::Knockout);
    assert_eq!(published.draw.participant_count(), 7);
    assert!(
        DrawRepository::new(db)
            .exists_for_tournament(tournament.id)
            .await?
    );

    Ok(())
}

/// Tests the proceeders override and rounds option.
///
/// Expected: Ok with a playoff of one slot per group and doubled matchdays
#[tokio::test]
async fn applies_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 8).await?;

    let published = PublishService::new(db)
        .publish(
            tournament.id,
            PublishOptions {
                group_count: Some(4),
                rounds: Some(2),
                proceeders: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let Draw::GroupPlayoff {
        schedules, playoff, ..
    } = published.draw
    else {
        panic!("expected a group playoff draw");
    };
    assert_eq!(playoff.slots.len(), 4);
    assert!(schedules.iter().all(|s| s.schedule.rows() == 2));
    assert_eq!(published.group_ids.len(), 5);

    Ok(())
}

/// Tests that a draw cannot be published twice.
///
/// Expected: Err(BadRequest) and the first draw left untouched
#[tokio::test]
async fn rejects_second_publish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 4).await?;

    let service = PublishService::new(db);
    service
        .publish(tournament.id, PublishOptions::default())
        .await
        .unwrap();
    let groups_before = entity::prelude::FixtureGroup::find().all(db).await?.len();

    let result = service
        .publish(tournament.id, PublishOptions::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        entity::prelude::FixtureGroup::find().all(db).await?.len(),
        groups_before
    );

    Ok(())
}

/// Tests a tournament with a single team.
///
/// Expected: Err(ScheduleErr::TooFewParticipants) and nothing written
#[tokio::test]
async fn rejects_too_few_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "round_robin", 1).await?;

    let result = PublishService::new(db)
        .publish(tournament.id, PublishOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScheduleErr(ScheduleError::TooFewParticipants(1)))
    ));
    assert!(entity::prelude::FixtureGroup::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests a group playoff without a group count.
///
/// Expected: Err(ScheduleErr::MissingGroupCount)
#[tokio::test]
async fn requires_group_count_for_group_playoff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 8).await?;

    let result = PublishService::new(db)
        .publish(tournament.id, PublishOptions::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ScheduleErr(ScheduleError::MissingGroupCount(
            TournamentFormat::GroupPlayoff
        )))
    ));

    Ok(())
}

/// Tests publishing for a tournament that does not exist.
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

    let result = PublishService::new(db)
        .publish(999, PublishOptions::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a configured default proceeder count larger than the smallest group.
///
/// Expected: Ok with the default applied to the large group and capped for the small one
#[tokio::test]
async fn caps_default_proceeders_to_group_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, _teams) =
        factory::helpers::create_tournament_with_teams(db, "group_playoff", 5).await?;

    let published = PublishService::new(db)
        .publish(
            tournament.id,
            PublishOptions {
                group_count: Some(2),
                rounds: Some(1),
                default_proceeders: Some(3),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let Draw::GroupPlayoff { groups, playoff, .. } = published.draw else {
        panic!("expected a group playoff draw");
    };
    assert_eq!(groups[0].number_of_proceeders, 3);
    assert_eq!(groups[1].number_of_proceeders, 2);
    assert_eq!(playoff.slots.len(), 5);
    assert_eq!(published.group_ids.len(), 3);

    Ok(())
}

/// Tests which options each format leaves unused.
///
/// Expected: knockout ignores everything, round-robin only proceeders
#[test]
fn reports_options_unused_by_format() {
    let options = PublishOptions {
        group_count: Some(2),
        rounds: Some(1),
        proceeders: Some(1),
        default_proceeders: Some(2),
    };

    assert_eq!(
        options.unused_by(TournamentFormat::Knockout),
        vec!["group_count", "rounds", "proceeders"]
    );
    assert_eq!(
        options.unused_by(TournamentFormat::RoundRobin),
        vec!["proceeders"]
    );
    assert!(options.unused_by(TournamentFormat::GroupPlayoff).is_empty());
    assert!(PublishOptions::default()
        .unused_by(TournamentFormat::Knockout)
        .is_empty());
}
