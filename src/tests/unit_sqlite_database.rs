use crate::database::sqlite::SqliteRepository;
use crate::database::{RosterRepository, SeriesRepository, StoreError, SubstitutionRepository};
use crate::domain::{GameNumber, Gender, Marks, NewLocation, NewMatch, ScoreRecord, Substitution};
use crate::tests::support::{date, games, seed_league, setup_test_db};
use sqlx::sqlite::SqlitePoolOptions;

// test the database's ability to save a series and hand it back with its match context
#[tokio::test]
async fn test_sqlite_series_save_and_retrieve() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let record = ScoreRecord::new(league.alice, league.home_match, games(150, 0, 300));
    let series_id = repo.insert_series(&record).await.expect("Should save series");

    let retrieved = repo
        .get_series(series_id)
        .await
        .expect("Should query")
        .expect("Should find series");

    assert_eq!(retrieved.series_id, Some(series_id));
    assert_eq!(retrieved.game_scores.games(), [150, 0, 300]);
    assert_eq!(retrieved.total(), 450);
    // filled in from the match
    assert_eq!(retrieved.location_id, Some(league.home_lanes));
    assert_eq!(retrieved.match_date, Some(date("2025-11-01")));
    // nothing recorded
    assert_eq!(retrieved.marks, Marks::default());
}

#[tokio::test]
async fn test_sqlite_series_keeps_strikes_and_spares() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let marks = Marks::new(Some(11), Some(0)).unwrap();
    let record = ScoreRecord::new(league.bob, league.away_match, games(245, 199, 211)).with_marks(marks);
    let series_id = repo.insert_series(&record).await.unwrap();

    let retrieved = repo.get_series(series_id).await.unwrap().unwrap();
    assert_eq!(retrieved.marks.strikes, Some(11));
    // zero is a real count, not "unrecorded"
    assert_eq!(retrieved.marks.spares, Some(0));
}

#[tokio::test]
async fn test_sqlite_series_for_player_only_returns_that_player() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    repo.insert_series(&ScoreRecord::new(league.alice, league.home_match, games(180, 180, 180)))
        .await
        .unwrap();
    repo.insert_series(&ScoreRecord::new(league.bob, league.home_match, games(120, 130, 140)))
        .await
        .unwrap();
    repo.insert_series(&ScoreRecord::new(league.alice, league.away_match, games(190, 190, 190)))
        .await
        .unwrap();

    let alice_series = repo.series_for_player(league.alice).await.unwrap();

    assert_eq!(alice_series.len(), 2);
    assert!(alice_series.iter().all(|s| s.player_id == league.alice));
    // insertion order
    assert_eq!(alice_series[0].location_id, Some(league.home_lanes));
    assert_eq!(alice_series[1].location_id, Some(league.away_lanes));

    assert!(repo.series_for_player(9999).await.unwrap().is_empty());
    assert!(repo.get_series(9999).await.unwrap().is_none());
}

// series must point at a real player and match
#[tokio::test]
async fn test_sqlite_series_rejects_dangling_references() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let result = repo
        .insert_series(&ScoreRecord::new(league.alice, 9999, games(100, 100, 100)))
        .await;

    assert!(
        matches!(result, Err(StoreError::Constraint(_))),
        "Should fail due to foreign key constraint"
    );
}

#[tokio::test]
async fn test_sqlite_substitutions() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let series_id = repo
        .insert_series(&ScoreRecord::new(league.alice, league.home_match, games(150, 160, 170)))
        .await
        .unwrap();

    let game_two = GameNumber::try_from(2).unwrap();
    let sub = Substitution::new(series_id, league.carol, game_two);
    let id = repo.insert_substitution(&sub).await.expect("Should save substitution");

    let subs = repo.substitutions_for_series(series_id).await.unwrap();
    assert_eq!(subs.len(), 1);
    assert_eq!(subs[0].substitution_id, Some(id));
    assert_eq!(subs[0].sub_player_id, league.carol);
    assert_eq!(subs[0].game_number, game_two);

    // same game twice violates UNIQUE(series_id, game_number)
    let again = repo.insert_substitution(&sub).await;
    assert!(matches!(again, Err(StoreError::Constraint(_))));

    // unknown series
    let dangling = Substitution::new(9999, league.carol, GameNumber::try_from(1).unwrap());
    let result = repo.insert_substitution(&dangling).await;
    assert!(matches!(result, Err(StoreError::Constraint(_))));
}

#[tokio::test]
async fn test_sqlite_roster_queries() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let teams = repo.list_teams().await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].team_id, league.boys_team);
    assert_eq!(teams[1].gender, Gender::Female);

    // carol is on the girls' team but inactive
    let girls = repo.active_players_by_gender(Gender::Female).await.unwrap();
    assert_eq!(girls.len(), 1);
    assert_eq!(girls[0].player_id, league.alice);
    assert_eq!(girls[0].team_id, league.girls_team);

    let boys = repo.active_players_by_gender(Gender::Male).await.unwrap();
    assert_eq!(boys.len(), 1);
    assert_eq!(boys[0].first_name, "Bob");

    let carol = repo.get_player(league.carol).await.unwrap().expect("Should find carol");
    assert!(!carol.is_active);
    assert_eq!(carol.graduation_year, Some(2026));
    assert_eq!(repo.list_players(None).await.unwrap().len(), 3);

    let locations = repo.list_locations().await.unwrap();
    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Away Bowl", "Home Lanes"]);
}

#[tokio::test]
async fn test_sqlite_matches_newest_first_with_season_filter() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    repo.insert_match(&NewMatch {
        season_id: Some(2),
        location_id: league.home_lanes,
        match_date: date("2026-01-10"),
        opponent_name: None,
    })
    .await
    .unwrap();

    let all = repo.list_matches(None).await.unwrap();
    let dates: Vec<String> = all.iter().map(|m| m.match_date.to_string()).collect();
    assert_eq!(dates, vec!["2026-01-10", "2025-11-08", "2025-11-01"]);

    let season_one = repo.list_matches(Some(1)).await.unwrap();
    assert_eq!(season_one.len(), 2);
    assert_eq!(season_one[0].match_id, league.away_match);
}

#[tokio::test]
async fn test_sqlite_players_filtered_by_name() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    let found = repo.list_players(Some("ALI")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].player_id, league.alice);

    // matches across first and last name
    let found = repo.list_players(Some("bob baker")).await.unwrap();
    assert_eq!(found[0].player_id, league.bob);

    // "Carol Cole" is the only name containing "ol"
    let found = repo.list_players(Some("ol")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].player_id, league.carol);

    // wildcards are plain characters
    assert!(repo.list_players(Some("%")).await.unwrap().is_empty());
    assert!(repo.list_players(Some("zed")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sqlite_deletes_and_their_conflicts() {
    let repo = setup_test_db().await;
    let league = seed_league(&repo).await;

    repo.insert_series(&ScoreRecord::new(league.alice, league.home_match, games(100, 110, 120)))
        .await
        .unwrap();

    // still referenced: alice has a series, the match holds it, its location holds the match
    assert!(matches!(repo.delete_player(league.alice).await, Err(StoreError::Constraint(_))));
    assert!(matches!(repo.delete_match(league.home_match).await, Err(StoreError::Constraint(_))));
    assert!(matches!(
        repo.delete_location(league.home_lanes).await,
        Err(StoreError::Constraint(_))
    ));
    assert!(matches!(repo.delete_team(league.girls_team).await, Err(StoreError::Constraint(_))));
    assert!(repo.get_player(league.alice).await.unwrap().is_some());

    // unreferenced rows go away
    assert!(repo.delete_player(league.carol).await.unwrap());
    assert!(repo.get_player(league.carol).await.unwrap().is_none());
    assert!(repo.delete_match(league.away_match).await.unwrap());

    let spare = repo
        .insert_location(&NewLocation { name: "Spare Lanes".into(), address: None })
        .await
        .unwrap();
    assert!(repo.delete_location(spare.location_id).await.unwrap());

    // a second delete finds nothing
    assert!(!repo.delete_player(league.carol).await.unwrap());
    assert!(!repo.delete_team(9999).await.unwrap());
}

// the same flow against a real file on disk, reopened with a fresh pool
#[tokio::test]
async fn test_sqlite_on_disk_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("bowling.db").display());

    let pool = SqlitePoolOptions::new().max_connections(2).connect(&url).await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let repo = SqliteRepository::new(pool.clone());
    let league = seed_league(&repo).await;
    let series_id = repo
        .insert_series(&ScoreRecord::new(league.bob, league.away_match, games(245, 199, 211)))
        .await
        .unwrap();
    pool.close().await;

    let reopened = SqlitePoolOptions::new().max_connections(1).connect(&url).await.unwrap();
    let repo = SqliteRepository::new(reopened);

    let series = repo.get_series(series_id).await.unwrap().expect("Should survive reopen");
    assert_eq!(series.total(), 655);
    assert_eq!(series.match_date, Some(date("2025-11-08")));
}
