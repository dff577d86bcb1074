//! Pure leaderboard rules, kept free of Workers types so they test natively.

use api::{ScoreEntry, Winners, LEADERBOARD_LIMIT};

/// Append-only score log plus the cached per-day winners map.
/// The Durable Object loads this from storage, mutates it, and persists it
/// back; nothing here does I/O.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub scores: Vec<ScoreEntry>,
    pub winners: Winners,
}

impl Scoreboard {
    pub fn new(scores: Vec<ScoreEntry>, winners: Winners) -> Self {
        Self { scores, winners }
    }

    /// Append a validated entry
    pub fn submit(&mut self, entry: ScoreEntry) -> ScoreEntry {
        self.scores.push(entry.clone());
        entry
    }

    /// Entries for one UTC day, highest score first, capped at the
    /// leaderboard limit. Stable sort keeps earlier submissions ahead on
    /// ties.
    pub fn daily(&self, date: &str) -> Vec<ScoreEntry> {
        let mut rows: Vec<ScoreEntry> = self
            .scores
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(LEADERBOARD_LIMIT);
        rows
    }

    /// Lazily compute winners for every closed day that has scores but no
    /// cached winner. The current UTC day is never computed: its leaderboard
    /// is still open. Returns whether anything changed, so callers know to
    /// persist. Idempotent.
    pub fn compute_winners(&mut self, today: &str) -> bool {
        let mut changed = false;
        for entry in &self.scores {
            if entry.date == today || self.winners.contains_key(&entry.date) {
                continue;
            }
            let top = self
                .scores
                .iter()
                .filter(|s| s.date == entry.date)
                .fold(None::<&ScoreEntry>, |best, s| match best {
                    // Strict > keeps the earliest submission on ties
                    Some(b) if s.score > b.score => Some(s),
                    Some(b) => Some(b),
                    None => Some(s),
                });
            if let Some(top) = top {
                self.winners.insert(entry.date.clone(), top.clone());
                changed = true;
            }
        }
        changed
    }
}

/// Entry ids are epoch milliseconds rendered in base36, short and roughly
/// sortable by creation time.
pub fn base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
