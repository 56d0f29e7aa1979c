//! Entity definitions for the externally-owned `links` and `clicks` tables.
//!
//! The schema belongs to the hosting platform; this service never creates or
//! migrates these tables.

pub mod click;
pub mod link;
