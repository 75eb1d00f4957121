//! Persistence and leaderboard integration tests.
//!
//! These run completed sessions through the gateways and read them back
//! the way a leaderboard screen would.

use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use memory_match::content::{Catalog, Category, Pair};
use memory_match::core::{Difficulty, EngineConfig};
use memory_match::persistence::{
    format_duration, rank_records, GameRecord, JsonFileGateway, JsonFileProfileStore,
    LeaderboardQuery, Medal, MemoryGateway, MemoryProfileStore, PersistenceGateway, ProfileStore,
    RelativeAge,
};
use memory_match::session::{GameController, Lifecycle};

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for key in ["birds", "trees"] {
        catalog
            .add_category(
                Category::new(key, key).with_pairs(
                    (0..3).map(|i| Pair::new(format!("{}-{}", key, i), format!("{}+{}", key, i))),
                ),
            )
            .unwrap();
    }
    catalog
        .add_difficulty(Difficulty::new("small", "Small", 2, 30, 1.0))
        .unwrap();
    catalog
        .add_difficulty(Difficulty::new("full", "Full", 3, 30, 2.0))
        .unwrap();
    catalog
}

/// Play a whole session, matching pairs in board order.
fn play<G, P>(game: &mut GameController<G, P>, name: &str, category: &str, difficulty: &str)
where
    G: PersistenceGateway,
    P: ProfileStore,
{
    game.start_session(name, category, difficulty).unwrap();
    while game.lifecycle() == Lifecycle::Active {
        let session = game.session().unwrap();
        let first = session.cards().iter().find(|c| !c.is_matched()).unwrap();
        let second = session
            .cards()
            .iter()
            .find(|c| c.id != first.id && c.match_key == first.match_key)
            .unwrap();
        let (a, b) = (first.id, second.id);
        game.reveal(a).unwrap();
        game.reveal(b).unwrap();
        game.advance(1000);
    }
}

fn record(name: &str, score: u32, time_seconds: u32) -> GameRecord {
    GameRecord {
        id: Uuid::new_v4(),
        player_name: name.into(),
        score,
        time_seconds,
        moves: 10,
        difficulty: "small".into(),
        category: "birds".into(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
    }
}

/// Test that a completed session reads back unchanged through a filtered query.
#[test]
fn test_round_trip() {
    let mut game = GameController::with_seed(
        EngineConfig::default(),
        catalog(),
        MemoryGateway::new(),
        MemoryProfileStore::new(),
        3,
    );
    play(&mut game, "Mina", "birds", "small");
    let snapshot = game.snapshot().unwrap();

    let rows = game
        .gateway()
        .query(&LeaderboardQuery::new().category("birds").difficulty("small"))
        .unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.score, snapshot.score);
    assert_eq!(row.time_seconds, snapshot.elapsed_seconds);
    assert_eq!(row.moves, snapshot.move_count);
    assert_eq!(row.difficulty, "small");
    assert_eq!(row.category, "birds");

    let other = game
        .gateway()
        .query(&LeaderboardQuery::new().category("trees"))
        .unwrap();
    assert!(other.is_empty());
}

/// Test the ranked leaderboard through the controller.
#[test]
fn test_controller_leaderboard() {
    let mut game = GameController::with_seed(
        EngineConfig::default(),
        catalog(),
        MemoryGateway::new(),
        MemoryProfileStore::new(),
        4,
    );
    play(&mut game, "Mina", "birds", "small");
    play(&mut game, "Joon", "birds", "full");
    play(&mut game, "Ari", "trees", "full");

    let all = game.leaderboard(&LeaderboardQuery::new()).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].rank, 1);
    assert_eq!(all[0].medal, Some(Medal::Gold));
    assert!(all.windows(2).all(|w| w[0].record.score >= w[1].record.score));

    // The default query follows the last selection
    let query = game.leaderboard_query();
    let trees = game.leaderboard(&query).unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].record.player_name, "Ari");
}

/// Test a full session against the JSON file stores.
#[test]
fn test_json_file_stores() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("leaderboard.json");
    let profile = dir.path().join("profile.json");

    {
        let mut game = GameController::with_seed(
            EngineConfig::default(),
            catalog(),
            JsonFileGateway::new(&records),
            JsonFileProfileStore::new(&profile),
            5,
        );
        assert_eq!(game.begin(), None);
        play(&mut game, "  Mina  ", "trees", "full");
        assert!(game.last_record().is_some());
    }

    let mut game = GameController::with_seed(
        EngineConfig::default(),
        catalog(),
        JsonFileGateway::new(&records),
        JsonFileProfileStore::new(&profile),
        6,
    );
    assert_eq!(game.begin().as_deref(), Some("Mina"));

    let rows = game.leaderboard(&LeaderboardQuery::new()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.player_name, "Mina");
    assert_eq!(rows[0].record.category, "trees");
}

/// Test ordering ties by time and the row limit.
#[test]
fn test_ordering_and_limit() {
    let mut gateway = MemoryGateway::new();
    gateway.append(record("slow", 800, 95)).unwrap();
    gateway.append(record("fast", 800, 41)).unwrap();
    gateway.append(record("top", 950, 120)).unwrap();
    for i in 0..25 {
        gateway.append(record("filler", 100 + i, 60)).unwrap();
    }

    let rows = gateway.query(&LeaderboardQuery::new()).unwrap();
    assert_eq!(rows.len(), 20);
    let names: Vec<_> = rows.iter().take(3).map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, vec!["top", "fast", "slow"]);
}

/// Test the presentation helpers on ranked rows.
#[test]
fn test_presentation() {
    let entries = rank_records(vec![
        record("a", 3, 61),
        record("b", 2, 9),
        record("c", 1, 600),
        record("d", 0, 0),
    ]);

    assert_eq!(entries[2].medal, Some(Medal::Bronze));
    assert_eq!(entries[3].medal, None);
    assert_eq!(entries[0].time_label(), "1:01");
    assert_eq!(entries[1].time_label(), "0:09");
    assert_eq!(format_duration(600), "10:00");

    let created = entries[0].record.created_at;
    assert_eq!(entries[0].age(created + Duration::minutes(10)).to_string(), "just now");
    assert_eq!(entries[0].age(created + Duration::hours(3)).to_string(), "3 hours ago");
    assert_eq!(entries[0].age(created + Duration::days(2)).to_string(), "2 days ago");
    assert_eq!(entries[0].age(created + Duration::days(30)).to_string(), "2026-03-14");
    assert!(matches!(entries[0].age(created + Duration::days(7)), RelativeAge::On(_)));
}

/// Test that invalid records are rejected by every gateway.
#[test]
fn test_validation() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = JsonFileGateway::new(dir.path().join("records.json"));
    let mut memory = MemoryGateway::new();

    let mut bad = record("x", 1, 1);
    bad.category.clear();

    assert!(memory.append(bad.clone()).is_err());
    assert!(file.append(bad).is_err());
    assert!(!file.path().exists());
}
