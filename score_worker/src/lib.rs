use api::{DailyLeaderboard, Health, ScoreEntry, SubmitResult, SubmitScore, Winners};
use board::{base36, Scoreboard};
use worker::*;

pub mod board;

#[cfg(test)]
mod tests;

const SCORES_KEY: &str = "scores";
const WINNERS_KEY: &str = "winners";

/// All score state lives in one named Durable Object so reads and writes
/// are serialized without extra locking.
#[event(fetch)]
pub async fn main(req: Request, env: Env, _ctx: worker::Context) -> Result<Response> {
    let router = Router::new();

    router
        .get_async("/health", handle_health)
        .post_async("/api/score", forward_to_board)
        .get_async("/api/leaderboard/daily", forward_to_board)
        .get_async("/api/winners", forward_to_board)
        .post_async("/api/winners/compute", forward_to_board)
        .run(req, env)
        .await
}

async fn handle_health(_req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::from_json(&Health { ok: true })
}

async fn forward_to_board(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let namespace = ctx.env.durable_object("SCOREBOARD")?;
    let stub = namespace.get_by_name("global")?;
    stub.fetch_with_request(req).await
}

#[durable_object]
pub struct ScoreboardDO {
    state: State,
    #[allow(dead_code)]
    env: Env,
}

impl DurableObject for ScoreboardDO {
    fn new(state: State, env: Env) -> Self {
        Self { state, env }
    }

    async fn fetch(&self, mut req: Request) -> Result<Response> {
        let url = req.url()?;
        let path = url.path().to_string();

        match (req.method(), path.as_str()) {
            (Method::Post, "/api/score") => {
                let submission: SubmitScore = match req.json().await {
                    Ok(body) => body,
                    Err(err) => {
                        console_error!("Scoreboard: bad submit body: {err:?}");
                        return Response::error("Invalid body", 400);
                    }
                };
                self.handle_submit(submission).await
            }
            (Method::Get, "/api/leaderboard/daily") => {
                let date = url
                    .query_pairs()
                    .find(|(k, _v)| k == "date")
                    .map(|(_k, v)| v.into_owned())
                    .unwrap_or_else(today_key);
                self.handle_daily(date).await
            }
            (Method::Get, "/api/winners") => {
                let board = self.load_board().await;
                let winners = self.refresh_winners(board).await?;
                Response::from_json(&winners)
            }
            (Method::Post, "/api/winners/compute") => {
                let board = self.load_board().await;
                let winners = self.refresh_winners(board).await?;
                Response::from_json(&serde_json::json!({ "ok": true, "winners": winners }))
            }
            _ => Response::error("Not found", 404),
        }
    }
}

impl ScoreboardDO {
    async fn load_board(&self) -> Scoreboard {
        let storage = self.state.storage();
        let scores: Vec<ScoreEntry> = match storage.get(SCORES_KEY).await {
            Ok(scores) => scores,
            Err(err) => {
                log_unless_missing(SCORES_KEY, &err);
                Vec::new()
            }
        };
        let winners: Winners = match storage.get(WINNERS_KEY).await {
            Ok(winners) => winners,
            Err(err) => {
                log_unless_missing(WINNERS_KEY, &err);
                Winners::new()
            }
        };
        Scoreboard::new(scores, winners)
    }

    async fn handle_submit(&self, submission: SubmitScore) -> Result<Response> {
        let (score, twitter, wallet) = match submission.sanitize() {
            Ok(fields) => fields,
            Err(err) => {
                console_log!("Scoreboard: rejected submission: {err}");
                return Response::error("Invalid score", 400);
            }
        };

        let now = js_sys::Date::new_0();
        let entry = ScoreEntry {
            id: base36(js_sys::Date::now() as u64),
            date: today_key(),
            score,
            twitter,
            wallet,
            created_at: String::from(now.to_iso_string()),
        };

        let mut board = self.load_board().await;
        let entry = board.submit(entry);
        let mut storage = self.state.storage();
        storage.put(SCORES_KEY, &board.scores).await?;

        console_log!(
            "Scoreboard: stored score {} for {} on {}",
            entry.score,
            if entry.twitter.is_empty() { "-" } else { &entry.twitter },
            entry.date
        );
        Response::from_json(&SubmitResult { ok: true, entry })
    }

    async fn handle_daily(&self, date: String) -> Result<Response> {
        let board = self.load_board().await;
        let leaderboard = board.daily(&date);
        Response::from_json(&DailyLeaderboard { date, leaderboard })
    }

    /// Compute winners for closed days and persist the cache if it changed
    async fn refresh_winners(&self, mut board: Scoreboard) -> Result<Winners> {
        if board.compute_winners(&today_key()) {
            let mut storage = self.state.storage();
            storage.put(WINNERS_KEY, &board.winners).await?;
        }
        Ok(board.winners)
    }
}

/// A missing key is the normal first-run case. Anything else means a stored
/// blob failed to deserialize, and defaulting would overwrite the history on
/// the next write, so it must at least be visible in the logs.
fn log_unless_missing(key: &str, err: &Error) {
    if !matches!(err, Error::JsError(msg) if msg.contains("No such value")) {
        console_error!("Scoreboard: failed to load '{key}', starting empty: {err:?}");
    }
}

/// Current UTC day key, `YYYY-MM-DD`
fn today_key() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_utc_full_year() as u32,
        now.get_utc_month() as u32 + 1,
        now.get_utc_date() as u32
    )
}
