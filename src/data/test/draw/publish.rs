use super::*;
use std::collections::HashSet;

/// Tests publishing a single round-robin group.
///
/// Verifies one round per matchday, no persisted byes, and every pair of teams meeting
/// exactly once.
///
/// Expected: Ok with 5 rounds of 2 matches for 5 teams
#[tokio::test]
async fn publishes_round_robin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "round_robin", 5).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let repo = DrawRepository::new(db);
    let groups = repo
        .publish(
            tournament.id,
            &draw(TournamentFormat::RoundRobin, 5, None),
            &team_ids,
        )
        .await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].title, "Group A");
    assert!(!groups[0].is_final);

    let rounds = rounds_of(db, groups[0].id).await?;
    assert_eq!(rounds.len(), 5);
    assert_eq!(rounds[0].title, "Round 1");

    let mut pairs = HashSet::new();
    for round in &rounds {
        let matches = matches_of(db, round.id).await?;
        assert_eq!(matches.len(), 2);
        for m in matches {
            let (a, b) = (m.team1_id.unwrap(), m.team2_id.unwrap());
            assert!(pairs.insert((a.min(b), a.max(b))));
            assert_eq!(m.next_match_id, None);
        }
    }
    assert_eq!(pairs.len(), 10);

    Ok(())
}

/// Tests publishing a knockout bracket with byes.
///
/// With 6 teams the top two seeds get byes: their first-round matches have an open
/// second side and they are already bound in the semi-finals. Every match except the
/// final points at the match its winner advances to.
///
/// Expected: Ok with a chained 3-round bracket
#[tokio::test]
async fn publishes_knockout_with_byes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 6).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let repo = DrawRepository::new(db);
    let groups = repo
        .publish(
            tournament.id,
            &draw(TournamentFormat::Knockout, 6, None),
            &team_ids,
        )
        .await?;

    assert_eq!(groups.len(), 1);
    assert!(groups[0].is_final);

    let rounds = rounds_of(db, groups[0].id).await?;
    let titles: Vec<&str> = rounds.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Quarter-finals", "Semi-finals", "Final"]);

    let first = matches_of(db, rounds[0].id).await?;
    let second = matches_of(db, rounds[1].id).await?;
    let last = matches_of(db, rounds[2].id).await?;
    assert_eq!((first.len(), second.len(), last.len()), (4, 2, 1));

    // Seed 1 and seed 2 have byes.
    assert_eq!(first[0].team1_id, Some(team_ids[0]));
    assert_eq!(first[0].team2_id, None);
    assert_eq!(first[2].team1_id, Some(team_ids[1]));
    assert_eq!(first[2].team2_id, None);
    assert_eq!(first[1].team1_id, Some(team_ids[2]));
    assert_eq!(first[1].team2_id, Some(team_ids[5]));

    assert_eq!(second[0].team1_id, Some(team_ids[0]));
    assert_eq!(second[1].team1_id, Some(team_ids[1]));
    assert_eq!(second[0].team2_id, None);

    assert_eq!(first[0].next_match_id, Some(second[0].id));
    assert_eq!(first[1].next_match_id, Some(second[0].id));
    assert_eq!(first[2].next_match_id, Some(second[1].id));
    assert_eq!(first[3].next_match_id, Some(second[1].id));
    assert!(second.iter().all(|m| m.next_match_id == Some(last[0].id)));
    assert_eq!(last[0].next_match_id, None);

    Ok(())
}

/// Tests publishing groups feeding a playoff.
///
/// Verifies that playoff leaves store rank placeholders pointing at the stored IDs of
/// the group-phase groups rather than at teams.
///
/// Expected: Ok with two groups plus a final group of placeholders
#[tokio::test]
async fn publishes_group_playoff_placeholders() -> Result<(), DbErr> {
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
    let groups = repo
        .publish(
            tournament.id,
            &draw(TournamentFormat::GroupPlayoff, 8, Some(2)),
            &team_ids,
        )
        .await?;

    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Group A", "Group B", "Playoff"]);
    assert_eq!(groups[0].number_of_proceeders, 2);
    let (group_a, group_b, playoff) = (&groups[0], &groups[1], &groups[2]);
    assert!(playoff.is_final);

    // Group A holds participants 1, 3, 5, 7.
    let expected: HashSet<i32> = [0, 2, 4, 6].iter().map(|&i| team_ids[i]).collect();
    for round in rounds_of(db, group_a.id).await? {
        for m in matches_of(db, round.id).await? {
            assert!(expected.contains(&m.team1_id.unwrap()));
            assert!(expected.contains(&m.team2_id.unwrap()));
        }
    }

    let rounds = rounds_of(db, playoff.id).await?;
    assert_eq!(rounds.len(), 2);

    let leaves = matches_of(db, rounds[0].id).await?;
    assert_eq!(leaves.len(), 2);
    assert_eq!(
        (leaves[0].team1_rank, leaves[0].team1_source_group_id),
        (Some(1), Some(group_a.id))
    );
    assert_eq!(
        (leaves[0].team2_rank, leaves[0].team2_source_group_id),
        (Some(2), Some(group_b.id))
    );
    assert_eq!(
        (leaves[1].team1_rank, leaves[1].team1_source_group_id),
        (Some(1), Some(group_b.id))
    );
    assert_eq!(
        (leaves[1].team2_rank, leaves[1].team2_source_group_id),
        (Some(2), Some(group_a.id))
    );
    assert!(leaves.iter().all(|m| m.team1_id.is_none() && m.team2_id.is_none()));

    let last = matches_of(db, rounds[1].id).await?;
    assert_eq!(last[0].team1_rank, None);
    assert!(leaves.iter().all(|m| m.next_match_id == Some(last[0].id)));

    Ok(())
}

/// Tests that a failure halfway through publishing leaves nothing behind.
///
/// The third matchday references a participant without a team, so the group and the
/// first two rounds are written before the publish fails.
///
/// Expected: Err, and no group, round or match persisted
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "round_robin", 4).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let mut broken = draw(TournamentFormat::RoundRobin, 4, None);
    if let Draw::RoundRobin { schedules, .. } = &mut broken {
        schedules[0].schedule.table2[2][0] = 5;
    }

    let repo = DrawRepository::new(db);
    let result = repo.publish(tournament.id, &broken, &team_ids).await;

    assert!(result.is_err());
    assert!(!repo.exists_for_tournament(tournament.id).await?);
    assert!(entity::prelude::FixtureRound::find().all(db).await?.is_empty());
    assert!(entity::prelude::FixtureMatch::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests that the team list must match the draw.
///
/// Expected: Err without touching the database
#[tokio::test]
async fn rejects_team_count_mismatch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fixture_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (tournament, teams) =
        factory::helpers::create_tournament_with_teams(db, "knockout", 3).await?;
    let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();

    let repo = DrawRepository::new(db);
    let result = repo
        .publish(
            tournament.id,
            &draw(TournamentFormat::Knockout, 4, None),
            &team_ids,
        )
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));
    assert!(!repo.exists_for_tournament(tournament.id).await?);

    Ok(())
}
