use gloo_net::http::Request;

use crate::models::{RelayReply, RelayRequest};

/// Chat endpoint of the relay server.
const RELAY_URL: &str = "http://localhost:3001/api/chat";

/// Sends the whole conversation to the relay and returns the assistant reply.
pub async fn send_chat(request: &RelayRequest) -> Result<String, String> {
    let resp = Request::post(RELAY_URL)
        .json(request)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(format!("Server error: {} {text}", resp.status()));
    }

    resp.json::<RelayReply>()
        .await
        .map(|r| r.reply)
        .map_err(|e| format!("Parse error: {e}"))
}
