//! Link store access
//!
//! The link table is owned by the hosting platform; this service only ever
//! performs a point read by slug. The `LinkStore` trait is the seam that
//! lets tests substitute an in-memory store.

pub mod backend;
pub mod entities;

pub use backend::SeaOrmStore;

use chrono::{DateTime, Utc};

use crate::errors::Result;

/// A shortened link as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub slug: String,
    pub original_url: String,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Whether the expiry timestamp, if any, is strictly in the past.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at < now)
    }
}

#[async_trait::async_trait]
pub trait LinkStore: Send + Sync {
    /// Exact-match point lookup by slug.
    ///
    /// `Ok(None)` means no such link. Callers on the redirect path treat
    /// `Err` the same way; the distinction only reaches the logs.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link(expires_at: Option<DateTime<Utc>>) -> Link {
        Link {
            id: "1".to_string(),
            slug: "demo".to_string(),
            original_url: "https://example.com".to_string(),
            is_active: true,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_expiry_never_expires() {
        assert!(!link(None).is_expired(Utc::now()));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = Utc::now();
        assert!(link(Some(now - Duration::hours(1))).is_expired(now));
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        let now = Utc::now();
        assert!(!link(Some(now + Duration::hours(1))).is_expired(now));
    }

    #[test]
    fn test_expiry_at_now_is_not_expired() {
        // Strict comparison: expires_at == now still redirects
        let now = Utc::now();
        assert!(!link(Some(now)).is_expired(now));
    }
}
