use super::*;

/// Tests creating a tournament.
///
/// Verifies that the repository stores the format in its string representation and
/// returns the created tournament.
///
/// Expected: Ok with tournament created
#[tokio::test]
async fn creates_tournament() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TournamentRepository::new(db);
    let tournament = repo
        .create(CreateTournamentParams {
            name: "Spring Cup".to_string(),
            format: TournamentFormat::GroupPlayoff,
        })
        .await?;

    assert_eq!(tournament.name, "Spring Cup");
    assert_eq!(tournament.format, "group_playoff");
    assert_eq!(tournament.format(), Ok(TournamentFormat::GroupPlayoff));

    Ok(())
}
