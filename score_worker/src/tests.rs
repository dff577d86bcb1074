use crate::board::{base36, Scoreboard};
use api::{ScoreEntry, SubmitScore, LEADERBOARD_LIMIT};

fn entry(id: &str, date: &str, score: u32, twitter: &str) -> ScoreEntry {
    ScoreEntry {
        id: id.into(),
        date: date.into(),
        score,
        twitter: twitter.into(),
        wallet: String::new(),
        created_at: format!("{date}T12:00:00.000Z"),
    }
}

#[test]
fn test_submit_appends() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 10, "one"));
    board.submit(entry("b", "2024-06-01", 20, "two"));
    assert_eq!(board.scores.len(), 2);
    assert_eq!(board.scores[0].id, "a", "Append-only, insertion order kept");
}

#[test]
fn test_daily_sorts_descending_and_filters_date() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 10, "low"));
    board.submit(entry("b", "2024-06-01", 99, "high"));
    board.submit(entry("c", "2024-06-02", 50, "other_day"));

    let daily = board.daily("2024-06-01");
    assert_eq!(daily.len(), 2);
    assert_eq!(daily[0].twitter, "high");
    assert_eq!(daily[1].twitter, "low");
}

#[test]
fn test_daily_caps_at_limit() {
    let mut board = Scoreboard::default();
    for i in 0..(LEADERBOARD_LIMIT + 10) {
        board.submit(entry(&format!("id{i}"), "2024-06-01", i as u32, "x"));
    }
    assert_eq!(board.daily("2024-06-01").len(), LEADERBOARD_LIMIT);
}

#[test]
fn test_daily_ties_keep_submission_order() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 50, "first"));
    board.submit(entry("b", "2024-06-01", 50, "second"));

    let daily = board.daily("2024-06-01");
    assert_eq!(daily[0].twitter, "first");
    assert_eq!(daily[1].twitter, "second");
}

#[test]
fn test_compute_winners_skips_today() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 10, "closed_day"));
    board.submit(entry("b", "2024-06-02", 99, "today"));

    let changed = board.compute_winners("2024-06-02");

    assert!(changed);
    assert_eq!(board.winners.len(), 1);
    assert_eq!(board.winners["2024-06-01"].twitter, "closed_day");
    assert!(
        !board.winners.contains_key("2024-06-02"),
        "The open day never gets a winner"
    );
}

#[test]
fn test_compute_winners_picks_top_score() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 10, "low"));
    board.submit(entry("b", "2024-06-01", 80, "high"));
    board.submit(entry("c", "2024-06-01", 40, "mid"));

    board.compute_winners("2024-06-05");

    assert_eq!(board.winners["2024-06-01"].twitter, "high");
}

#[test]
fn test_compute_winners_is_idempotent_and_caches() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 10, "early_winner"));
    assert!(board.compute_winners("2024-06-05"));
    assert!(!board.compute_winners("2024-06-05"), "Second pass is a no-op");

    // A later, higher score on an already-closed day does not dethrone the
    // cached winner
    board.submit(entry("b", "2024-06-01", 999, "latecomer"));
    assert!(!board.compute_winners("2024-06-05"));
    assert_eq!(board.winners["2024-06-01"].twitter, "early_winner");
}

#[test]
fn test_compute_winners_tie_keeps_earliest() {
    let mut board = Scoreboard::default();
    board.submit(entry("a", "2024-06-01", 50, "first"));
    board.submit(entry("b", "2024-06-01", 50, "second"));

    board.compute_winners("2024-06-05");

    assert_eq!(board.winners["2024-06-01"].twitter, "first");
}

#[test]
fn test_base36_round_values() {
    assert_eq!(base36(0), "0");
    assert_eq!(base36(35), "z");
    assert_eq!(base36(36), "10");
    assert_eq!(base36(1_717_243_200_000), "lww29hc0");
}

#[test]
fn test_sanitize_flows_into_entry_fields() {
    let submission = SubmitScore {
        twitter: "t".repeat(100),
        wallet: "w".repeat(300),
        score: 41.9,
    };
    let (score, twitter, wallet) = submission.sanitize().unwrap();
    assert_eq!(score, 41);
    assert_eq!(twitter.len(), api::MAX_TWITTER_LEN);
    assert_eq!(wallet.len(), api::MAX_WALLET_LEN);
}
