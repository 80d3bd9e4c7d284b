pub(crate) mod coerce;
pub(crate) mod player;
pub(crate) mod query;
pub(crate) mod ranked;
pub(crate) mod sanitize;
pub(crate) mod stats;

use tracing::debug;

use crate::error::{Result, UniteError};

pub(crate) const BASE_URL: &str = "https://uniteapi.dev";
pub(crate) const STATS_URL: &str = "https://unite-db.com/stats.json";

/// GET an upstream page. Anything but a 2xx is an error; the body is not
/// inspected here.
pub(crate) async fn get_page(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "requesting upstream page");

    let response = client.get(url).send().await.map_err(|e| UniteError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(UniteError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| UniteError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
