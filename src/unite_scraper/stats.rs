use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::PokemonStat;
use crate::unite_scraper;

/// Fetch the per-level stat table. Any schema violation fails the whole fetch.
#[instrument(skip(client))]
pub(crate) async fn get_stats(client: &reqwest::Client, url: &str) -> Result<Vec<PokemonStat>> {
    let body = unite_scraper::get_page(client, url).await?;
    let stats = parse_stats(&body)?;
    debug!(count = stats.len(), "parsed pokemon stats");
    Ok(stats)
}

pub(crate) fn parse_stats(body: &str) -> Result<Vec<PokemonStat>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UniteError;

    #[test]
    fn test_parse_stats_rejects_wrong_shape() {
        assert!(matches!(
            parse_stats(r#"{"name": "Pikachu"}"#),
            Err(UniteError::StatsSchema(_))
        ));
        assert!(matches!(
            parse_stats(r#"[{"name": "Pikachu", "level": [{"level": 1}]}]"#),
            Err(UniteError::StatsSchema(_))
        ));
    }

    #[test]
    fn test_parse_stats_empty() {
        assert!(parse_stats("[]").unwrap().is_empty());
    }
}
