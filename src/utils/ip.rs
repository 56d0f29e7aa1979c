//! Client IP extraction
//!
//! This service runs behind the platform's edge proxy, so the network
//! address always arrives in forwarding headers: `X-Forwarded-For` (first
//! entry is the original client) with `X-Real-IP` as the fallback.

use actix_web::http::header::HeaderMap;

/// Extract the client IP from forwarding headers.
///
/// Returns `None` when neither header carries a usable value; callers on
/// the analytics path store an empty string in that case.
pub fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
}
