//! Redirect request handler
//!
//! The hot path of every shortened link: extract the slug, resolve it,
//! run the policy gate, answer with a 302, and hand the click off to the
//! detached recorder. Every failure mode degrades to a redirect, because
//! the caller is a browser following a link, never an API client.

use std::sync::Arc;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, warn};

use crate::analytics::ClickRecorder;
use crate::config::get_config;
use crate::errors::Result;
use crate::services::resolution::Resolution;
use crate::storage::{Link, LinkStore};

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        store: web::Data<Arc<dyn LinkStore>>,
        recorder: web::Data<Arc<ClickRecorder>>,
    ) -> impl Responder {
        let slug = path.into_inner();

        match Self::process_redirect(&slug, &req, &store, &recorder).await {
            Ok(response) => response,
            Err(e) => {
                // Catch-all: still a redirect, never a 5xx
                error!("Unexpected error resolving slug '{}': {}", slug, e);
                Self::redirect_to(&get_config().fallbacks.error_url())
            }
        }
    }

    async fn process_redirect(
        slug: &str,
        req: &HttpRequest,
        store: &web::Data<Arc<dyn LinkStore>>,
        recorder: &web::Data<Arc<ClickRecorder>>,
    ) -> Result<HttpResponse> {
        let config = get_config();

        // Empty slug short-circuits without touching the store
        if slug.is_empty() {
            return Ok(Self::redirect_to(&config.fallbacks.home_url()));
        }

        let lookup = Self::resolve(slug, store).await;
        let resolution = Resolution::decide(slug, lookup, chrono::Utc::now());

        if let Some(link) = resolution.resolved_link() {
            recorder.dispatch(&link.id, ClickRecorder::capture(req));
        } else {
            debug!("Slug '{}' resolved to fallback: {:?}", slug, resolution);
        }

        Ok(Self::redirect_to(&resolution.location(&config.fallbacks)))
    }

    /// One point lookup. A store error is deliberately conflated with a
    /// genuine miss: the redirect path never hard-fails on a backing-store
    /// hiccup, and the distinction only matters to operators reading logs.
    async fn resolve(slug: &str, store: &web::Data<Arc<dyn LinkStore>>) -> Option<Link> {
        match store.find_by_slug(slug).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Link store lookup failed for '{}': {}", slug, e);
                None
            }
        }
    }

    /// Temporary redirect in every branch. The slug→destination mapping is
    /// mutable and revocable, so a 301 must never be issued here.
    #[inline]
    fn redirect_to(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()
    }
}

/// Redirect route configuration: the whole remaining path is the slug,
/// for any HTTP method.
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("").route("/{slug:.*}", web::route().to(RedirectService::handle_redirect))
}
