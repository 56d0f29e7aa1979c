use std::sync::Arc;

use actix_web::HttpRequest;
use tracing::warn;

use super::{ClickEvent, ClickSink, RequestMetadata};
use crate::utils::ip::extract_client_ip;
use crate::utils::user_agent::classify_user_agent;

/// Fire-and-forget click recording.
///
/// `capture` runs synchronously in the handler and only copies header
/// strings out of the request. `dispatch` spawns a detached task that does
/// the UA classification and the sink write; the handler never awaits it,
/// so sink latency and sink failures cannot reach the redirect response.
pub struct ClickRecorder {
    sink: Arc<dyn ClickSink>,
}

impl ClickRecorder {
    pub fn new(sink: Arc<dyn ClickSink>) -> Self {
        Self { sink }
    }

    /// Extract raw request metadata. Non-UTF-8 header values count as absent.
    pub fn capture(req: &HttpRequest) -> RequestMetadata {
        let user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let referer = req
            .headers()
            .get("referer")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let ip = extract_client_ip(req.headers()).unwrap_or_default();

        RequestMetadata {
            ip,
            user_agent,
            referer,
        }
    }

    /// Queue one click event for the resolved link. Returns immediately.
    pub fn dispatch(&self, link_id: &str, metadata: RequestMetadata) {
        let sink = Arc::clone(&self.sink);
        let link_id = link_id.to_string();

        tokio::spawn(async move {
            let agent = classify_user_agent(&metadata.user_agent);
            let event = ClickEvent::new(link_id, metadata, agent);

            if let Err(e) = sink.record_click(event).await {
                warn!("Click event discarded, sink write failed: {}", e);
            }
        });
    }
}
