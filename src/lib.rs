//! Scraper for Pokemon Unite player profiles published on uniteapi.dev.
//!
//! [`UniteClient`] fetches a profile page and turns it into a [`PlayerInfo`]:
//! identity and rank, recent partners, and every listed ranked match with
//! both rosters. [`parse_player_html`] runs the same extraction on HTML you
//! already have.

mod client;
pub mod error;
pub mod model;
mod unite_scraper;

pub use client::UniteClient;
pub use error::{Result, UniteError};
pub use model::*;
pub use unite_scraper::player::parse_player_html;
pub use unite_scraper::query::Query;
pub use unite_scraper::sanitize::sanitize_html;
