use itertools::Itertools;
use tracing::warn;

use crate::error::{Result, UniteError};
use crate::model::{MatchInfo, TeamColor, TeammateInfo};
use crate::unite_scraper::coerce::{
    nonzero_level, parse_damage_recovery, parse_epoch, parse_kai, parse_number, pokemon_from_icon,
};
use crate::unite_scraper::query::{required, Query};

const RANKED_SECTION: &str = "div#ranked";
const MATCH_SUMMARY: &str = "div.match-summary";
const MATCH_DETAIL: &str = "div.match-detail";
const RESULT_LABEL: &str = "b";
const MATCH_TIME: &str = ".match-time";
const ALLY_ORANGE_MARKER: &str = ".ally-orange";
const ROSTER_ICON: &str = "img";
const ROSTER_CELLS: &str = "td:not(.pokemon-icon)";
const ROSTER_CELL_COUNT: usize = 5;

/// Parse every ranked match listed on the profile, newest first.
pub(crate) fn parse_ranked_matches<N: Query>(root: &N) -> Result<Vec<MatchInfo>> {
    let section = required(root, RANKED_SECTION, "ranked section (div#ranked)")?;
    let summaries = section.find_all(MATCH_SUMMARY)?;
    let details = section.find_all(MATCH_DETAIL)?;

    zip_exact(summaries, details, "ranked match summaries vs details")?
        .map(|(summary, detail)| parse_match(&summary, &detail))
        .collect()
}

/// Pair two node lists by position. Lists of unequal length mean the page
/// layout changed and are rejected instead of truncated.
pub(crate) fn zip_exact<A, B>(
    left: Vec<A>,
    right: Vec<B>,
    context: &'static str,
) -> Result<impl Iterator<Item = (A, B)>> {
    if left.len() != right.len() {
        return Err(UniteError::SchemaMismatch {
            context,
            expected: left.len(),
            found: right.len(),
        });
    }
    Ok(left.into_iter().zip(right))
}

fn parse_match<N: Query>(summary: &N, detail: &N) -> Result<MatchInfo> {
    let result = required(summary, RESULT_LABEL, "match result label")?.text_content();
    let time = parse_epoch(&required(summary, MATCH_TIME, "match time")?.text_content())?;

    let ally = ally_color(detail)?;
    let opponent = ally.other();

    let ally_score = parse_score(summary, ally)?;
    let opponent_score = parse_score(summary, opponent)?;

    let team_ally = parse_roster(detail, ally)?;
    let team_opponent = parse_roster(detail, opponent)?;
    if team_ally.len() != team_opponent.len() {
        warn!(
            side = %ally,
            ally = team_ally.len(),
            opponent = team_opponent.len(),
            "asymmetric rosters"
        );
    }

    Ok(MatchInfo {
        time,
        result,
        ally_score,
        opponent_score,
        team_ally,
        team_opponent,
    })
}

/// Which side the profile owner played on, from the detail panel marker.
fn ally_color<N: Query>(detail: &N) -> Result<TeamColor> {
    Ok(match detail.find_first(ALLY_ORANGE_MARKER)? {
        Some(_) => TeamColor::Orange,
        None => TeamColor::Purple,
    })
}

fn parse_score<N: Query>(summary: &N, color: TeamColor) -> Result<u32> {
    let node = required(summary, color.score_class(), "match score")?;
    parse_number(&node.text_content(), "score")
}

/// Roster rows of one side, in page order.
fn parse_roster<N: Query>(detail: &N, color: TeamColor) -> Result<Vec<TeammateInfo>> {
    detail
        .find_all(color.row_class())?
        .iter()
        .map(parse_roster_row)
        .collect()
}

fn parse_roster_row<N: Query>(row: &N) -> Result<TeammateInfo> {
    let src = required(row, ROSTER_ICON, "pokemon icon")?
        .attribute("src")
        .ok_or(UniteError::MissingField {
            context: "pokemon icon src",
        })?;
    let pokemon = pokemon_from_icon(&src)
        .ok_or(UniteError::MissingField {
            context: "pokemon id in icon path (_Square_<id>.png)",
        })?
        .to_string();

    let cells = row.find_all(ROSTER_CELLS)?;
    if cells.len() != ROSTER_CELL_COUNT {
        return Err(UniteError::SchemaMismatch {
            context: "roster row cells",
            expected: ROSTER_CELL_COUNT,
            found: cells.len(),
        });
    }
    let (level, name, score, kai, damage) = cells
        .iter()
        .map(|cell| cell.text_content())
        .collect_tuple()
        .ok_or(UniteError::MissingField {
            context: "roster row cells",
        })?;

    let (kill, assist, interrupt) = parse_kai(&kai)?;
    let (damage_dealt, damage_taken, recovery) = parse_damage_recovery(&damage)?;

    Ok(TeammateInfo {
        level: nonzero_level(parse_number(&level, "level")?, &level)?,
        name,
        pokemon,
        score: parse_number(&score, "score")?,
        kill,
        assist,
        interrupt,
        damage_dealt,
        damage_taken,
        recovery,
    })
}
