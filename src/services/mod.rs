//! Request-facing services
//!
//! `resolution` is the pure policy gate; `redirect` wires it into the HTTP
//! handler together with the resolver and the click recorder.

pub mod redirect;
pub mod resolution;

pub use redirect::{RedirectService, redirect_routes};
pub use resolution::Resolution;
