use ::scraper::Html;
use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::error::{Result, UniteError};
use crate::model::{PlayerInfo, TeammateCount};
use crate::unite_scraper::coerce::{first_number, nonzero_level, parse_number};
use crate::unite_scraper::query::{required, Query};
use crate::unite_scraper::sanitize::sanitize_html;
use crate::unite_scraper::{self, ranked};

const PLAYER_NAME: &str = "div.player-card div.card-header h2";
const PLAYER_FIELDS: &str = "div.player-card div.card-body > p";
const MASTER_RANK: &str = ".master-rank";
const PARTNER: &str = "div.partners div.partner";
const PARTNER_NAME: &str = ".partner-name";
const PARTNER_COUNT: &str = ".partner-count";

const MAX_KEY_LEN: usize = 64;

#[instrument(skip(client))]
pub(crate) async fn get_player(
    client: &reqwest::Client,
    base_url: &str,
    name_or_id: &str,
) -> Result<PlayerInfo> {
    let Some(key) = player_key(name_or_id) else {
        debug!("blank or invalid player key, returning empty profile");
        return Ok(PlayerInfo::default());
    };

    let url = format!(
        "{}/p/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(key)
    );
    let body = unite_scraper::get_page(client, &url).await?;
    let player = parse_player_html(&body)?;
    debug!(
        id = %player.id,
        teammates = player.recent_teammates.len(),
        matches = player.recent_ranked_matches.len(),
        "parsed player profile"
    );
    Ok(player)
}

/// The trimmed key if it can be used as a profile path segment.
fn player_key(raw: &str) -> Option<&str> {
    let key = raw.trim();
    let valid = !key.is_empty()
        && key.chars().count() <= MAX_KEY_LEN
        && !key
            .chars()
            .any(|c| c.is_control() || matches!(c, '/' | '?' | '#' | '\\'));
    valid.then_some(key)
}

/// Extract a [`PlayerInfo`] from a raw upstream profile page.
pub fn parse_player_html(html: &str) -> Result<PlayerInfo> {
    let html = sanitize_html(html);
    trace!(target: "unite_scraper::html", html = %html, "sanitized profile page");
    let document = Html::parse_document(&html);
    parse_player(&document.root_element())
}

pub(crate) fn parse_player<N: Query>(root: &N) -> Result<PlayerInfo> {
    let name = required(root, PLAYER_NAME, "player name (div.card-header h2)")?.text_content();

    // id, level and cup are three sibling <p> without classes
    let fields = root.find_all(PLAYER_FIELDS)?;
    let (id, level, cup) = fields
        .iter()
        .take(3)
        .map(|field| field.text_content())
        .collect_tuple()
        .ok_or(UniteError::MissingField {
            context: "player id/level/cup (div.card-body > p)",
        })?;

    Ok(PlayerInfo {
        id,
        name,
        level: nonzero_level(first_number(&level, "level")?, &level)?,
        cup,
        master_rank: parse_master_rank(root)?,
        recent_teammates: parse_teammates(root)?,
        recent_ranked_matches: ranked::parse_ranked_matches(root)?,
    })
}

/// Unranked or hidden profiles carry no usable master rank; that is 0.
fn parse_master_rank<N: Query>(root: &N) -> Result<u32> {
    let Some(node) = root.find_first(MASTER_RANK)? else {
        return Ok(0);
    };
    let text = node.text_content();
    Ok(parse_number(&text, "masterRank").unwrap_or_else(|_| {
        debug!(text = %text, "unparseable master rank, using 0");
        0
    }))
}

/// Recent partners, most frequent first. Equal counts keep page order.
fn parse_teammates<N: Query>(root: &N) -> Result<Vec<TeammateCount>> {
    let teammates = root
        .find_all(PARTNER)?
        .iter()
        .map(|partner| {
            let name = required(partner, PARTNER_NAME, "partner name")?.text_content();
            let count = required(partner, PARTNER_COUNT, "partner count")?.text_content();
            Ok(TeammateCount {
                name,
                count: first_number(&count, "partner count")?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(teammates
        .into_iter()
        .sorted_by(|a, b| b.count.cmp(&a.count))
        .collect())
}
