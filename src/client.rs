use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::unite_scraper::{self, BASE_URL, STATS_URL};

/// The main entry point for fetching Unite player data.
///
/// `UniteClient` wraps a [`reqwest::Client`] and exposes methods to fetch
/// player profiles from uniteapi.dev and base stats from unite-db.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> unite_scraper::Result<()> {
/// use unite_scraper::UniteClient;
///
/// let client = UniteClient::new();
/// let player = client.get_player("AshK").await?;
/// println!("{} has played {} ranked matches", player.name, player.recent_ranked_matches.len());
/// # Ok(())
/// # }
/// ```
pub struct UniteClient {
    http: reqwest::Client,
    base_url: String,
    stats_url: String,
}

impl UniteClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: BASE_URL.to_string(),
            stats_url: STATS_URL.to_string(),
        }
    }

    /// Point profile requests at another host, e.g. a mirror or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the stats document from another URL.
    pub fn with_stats_url(mut self, stats_url: impl Into<String>) -> Self {
        self.stats_url = stats_url.into();
        self
    }

    /// Fetch and extract a player's profile by name or id.
    ///
    /// Blank or malformed keys return an empty [`PlayerInfo`] without
    /// touching the network.
    #[instrument(skip(self))]
    pub async fn get_player(&self, name_or_id: &str) -> Result<PlayerInfo> {
        unite_scraper::player::get_player(&self.http, &self.base_url, name_or_id).await
    }

    /// Fetch per-level base stats for every Pokemon.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> Result<Vec<PokemonStat>> {
        unite_scraper::stats::get_stats(&self.http, &self.stats_url).await
    }
}

impl Default for UniteClient {
    fn default() -> Self {
        Self::new()
    }
}
