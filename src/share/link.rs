//! Share Links
//!
//! A game is shared as `<base>?<seed>`; whoever opens the link rebuilds the
//! same board from the seed in the query.

use crate::core::seed::{Seed, SeedError};

/// Render the player link for `seed`, without scheme.
pub fn player_link(base: &str, seed: &Seed) -> String {
    format!("{base}?{seed}")
}

/// Render the player link for `seed` as an https URL.
pub fn player_url(base: &str, seed: &Seed) -> String {
    format!("https://{}", player_link(base, seed))
}

/// Everything after the first `?`, or `None` when there is no query.
pub fn query_of(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, query)| query)
}

/// Extract the seed from a share link.
pub fn seed_from_link(url: &str) -> Option<Seed> {
    query_of(url).and_then(|query| Seed::parse(query).ok())
}

/// The seed part of user input that is either a bare seed or a link.
pub fn seed_text(input: &str) -> &str {
    query_of(input).unwrap_or(input)
}

/// Resolve a bare seed or a share link into a seed.
pub fn resolve_seed(input: &str) -> Result<Seed, SeedError> {
    Seed::parse(seed_text(input.trim()))
}
