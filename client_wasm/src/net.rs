//! Fetch plumbing for the score API. Responses are passed back to the page
//! as raw JSON strings; the page owns presentation.

use api::SubmitScore;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

pub async fn submit_score(twitter: String, wallet: String, score: u32) -> Result<String, JsValue> {
    let payload = SubmitScore {
        twitter,
        wallet,
        score: score as f64,
    };
    let body =
        serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&JsValue::from(headers));
    init.set_body(&JsValue::from_str(&body));

    fetch_text("/api/score", Some(&init)).await
}

pub async fn fetch_daily(date: Option<String>) -> Result<String, JsValue> {
    let url = match date {
        Some(d) => format!("/api/leaderboard/daily?date={d}"),
        None => "/api/leaderboard/daily".to_string(),
    };
    fetch_text(&url, None).await
}

pub async fn fetch_winners() -> Result<String, JsValue> {
    fetch_text("/api/winners", None).await
}

async fn fetch_text(url: &str, init: Option<&RequestInit>) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let promise = match init {
        Some(init) => window.fetch_with_str_and_init(url, init),
        None => window.fetch_with_str(url),
    };
    let resp: Response = JsFuture::from(promise).await?.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("non-text response body"))
}
