//! Resolution policy gate
//!
//! Pure decision procedure over the resolver's answer. The branch order is
//! part of the contract: empty slug, then not-found, then inactive (which
//! wins over expiry), then expired, then the destination itself.

use chrono::{DateTime, Utc};

use crate::config::FallbackConfig;
use crate::storage::Link;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty slug; nothing was looked up
    Home,
    /// No link for this slug, or the store lookup failed
    NotFound,
    /// Link exists but the owner has deactivated it
    Inactive,
    /// Link is active but its expiry timestamp has passed
    Expired,
    /// Active, unexpired link; the only outcome that records a click
    Destination(Link),
}

impl Resolution {
    pub fn decide(slug: &str, lookup: Option<Link>, now: DateTime<Utc>) -> Self {
        if slug.is_empty() {
            return Resolution::Home;
        }

        match lookup {
            None => Resolution::NotFound,
            Some(link) if !link.is_active => Resolution::Inactive,
            Some(link) if link.is_expired(now) => Resolution::Expired,
            Some(link) => Resolution::Destination(link),
        }
    }

    /// The URL this outcome redirects to.
    pub fn location(&self, fallbacks: &FallbackConfig) -> String {
        match self {
            Resolution::Home => fallbacks.home_url(),
            Resolution::NotFound => fallbacks.not_found_url(),
            Resolution::Inactive => fallbacks.inactive_url(),
            Resolution::Expired => fallbacks.expired_url(),
            Resolution::Destination(link) => link.original_url.clone(),
        }
    }

    /// The resolved link, only for the destination outcome.
    pub fn resolved_link(&self) -> Option<&Link> {
        match self {
            Resolution::Destination(link) => Some(link),
            _ => None,
        }
    }
}
