//! Click analytics
//!
//! Append-only from this service's perspective: one `ClickEvent` per
//! in-policy redirect, written through `ClickSink` and never read back.

mod recorder;

pub use recorder::ClickRecorder;

use crate::utils::user_agent::ClientAgent;

/// Placeholder for the unintegrated geo-IP collaborator.
pub const UNKNOWN_GEO: &str = "Unknown";

/// Raw request metadata captured synchronously on the hot path.
///
/// Everything derived (UA classification) happens later, off the response
/// path, in the recorder's spawned task.
#[derive(Debug, Clone, Default)]
pub struct RequestMetadata {
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
}

/// One redirect attempt's analytics record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: String,
    pub ip: String,
    pub user_agent: String,
    pub referer: String,
    pub browser: String,
    pub device: String,
    pub os: String,
    pub country: String,
    pub city: String,
}

impl ClickEvent {
    pub fn new(link_id: String, metadata: RequestMetadata, agent: ClientAgent) -> Self {
        Self {
            link_id,
            ip: metadata.ip,
            user_agent: metadata.user_agent,
            referer: metadata.referer,
            browser: agent.browser,
            device: agent.device,
            os: agent.os,
            country: UNKNOWN_GEO.to_string(),
            city: UNKNOWN_GEO.to_string(),
        }
    }
}

/// Insert-only event sink. Implementations must not assume the caller ever
/// checks the result beyond logging it.
#[async_trait::async_trait]
pub trait ClickSink: Send + Sync {
    async fn record_click(&self, event: ClickEvent) -> anyhow::Result<()>;
}
