//! Wire types for the score service
//!
//! JSON over HTTP: the browser client and the worker share these shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Handles longer than this are truncated, not rejected
pub const MAX_TWITTER_LEN: usize = 40;
/// Wallet addresses longer than this are truncated, not rejected
pub const MAX_WALLET_LEN: usize = 100;
/// A daily leaderboard returns at most this many rows
pub const LEADERBOARD_LIMIT: usize = 50;

/// One submitted score, as persisted and as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: String,
    /// UTC day key, `YYYY-MM-DD`
    pub date: String,
    pub score: u32,
    pub twitter: String,
    pub wallet: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `POST /api/score` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScore {
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub wallet: String,
    pub score: f64,
}

impl SubmitScore {
    /// Validate and normalize a submission. Scores must be finite and
    /// non-negative; handle and wallet are truncated to bounded lengths
    /// rather than erroring.
    pub fn sanitize(&self) -> Result<(u32, String, String), SubmitError> {
        if !self.score.is_finite() || self.score < 0.0 {
            return Err(SubmitError::InvalidScore);
        }
        let twitter: String = self.twitter.chars().take(MAX_TWITTER_LEN).collect();
        let wallet: String = self.wallet.chars().take(MAX_WALLET_LEN).collect();
        Ok((self.score as u32, twitter, wallet))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    InvalidScore,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InvalidScore => write!(f, "Invalid score"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// `POST /api/score` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResult {
    pub ok: bool,
    pub entry: ScoreEntry,
}

/// `GET /api/leaderboard/daily` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLeaderboard {
    pub date: String,
    pub leaderboard: Vec<ScoreEntry>,
}

/// `GET /api/winners` response body: UTC day -> top entry for that day.
/// BTreeMap keeps dates ordered on the wire.
pub type Winners = BTreeMap<String, ScoreEntry>;

/// `GET /health` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}
