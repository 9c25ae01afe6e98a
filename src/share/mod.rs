//! Sharing Surface
//!
//! How a game leaves one session: share links carrying the seed, and
//! serialisable snapshots of what a session shows.
//!
//! ## Module Structure
//!
//! - `link`: Share link rendering and seed extraction
//! - `snapshot`: Serialisable session views

pub mod link;
pub mod snapshot;

pub use link::{player_link, resolve_seed, seed_from_link};
pub use snapshot::{SessionSnapshot, TeamSnapshot};
