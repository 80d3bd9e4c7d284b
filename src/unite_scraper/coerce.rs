use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use regex::Regex;

use crate::error::{Result, UniteError};

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

// Upstream pads the fields of a combined cell with two or more spaces.
static FIELD_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

static GAP_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}(\d+)").expect("valid regex"));

static SQUARE_ICON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_Square_([^/?#]+)\.png").expect("valid regex"));

/// Parse the whole (trimmed) text as a number.
pub(crate) fn parse_number<T: FromStr>(text: &str, field: &'static str) -> Result<T> {
    text.trim().parse().map_err(|_| UniteError::Coercion {
        field,
        value: text.to_string(),
    })
}

/// Parse the first run of digits in decorated text, e.g. `"Lv. 40"`.
pub(crate) fn first_number<T: FromStr>(text: &str, field: &'static str) -> Result<T> {
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| UniteError::Coercion {
            field,
            value: text.to_string(),
        })
}

/// Levels start at 1; a zero level is as malformed as a non-numeric one.
pub(crate) fn nonzero_level(level: u32, text: &str) -> Result<u32> {
    if level == 0 {
        return Err(UniteError::Coercion {
            field: "level",
            value: text.to_string(),
        });
    }
    Ok(level)
}

/// Kill, assist and interrupt counts from a cell like `"3  7  2"`.
pub(crate) fn parse_kai(text: &str) -> Result<(u32, u32, u32)> {
    let (kill, assist, interrupt) = FIELD_GAP
        .split(text.trim())
        .collect_tuple()
        .ok_or_else(|| UniteError::Coercion {
            field: "kill/assist/interrupt",
            value: text.to_string(),
        })?;
    Ok((
        parse_number(kill, "kill")?,
        parse_number(assist, "assist")?,
        parse_number(interrupt, "interrupt")?,
    ))
}

/// Damage dealt, damage taken and recovery from a labelled cell such as
/// `"Dealt  52341 Taken  30112 Recovered  4521"`. Only numbers that follow a
/// field gap count.
pub(crate) fn parse_damage_recovery(text: &str) -> Result<(u32, u32, u32)> {
    let (dealt, taken, recovery) = GAP_NUMBER
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect_tuple()
        .ok_or_else(|| UniteError::Coercion {
            field: "damage/recovery",
            value: text.to_string(),
        })?;
    Ok((
        parse_number(dealt, "damageDealt")?,
        parse_number(taken, "damageTaken")?,
        parse_number(recovery, "recovery")?,
    ))
}

/// Pokemon identifier from an icon path like `/img/t_Square_Pikachu.png`.
pub(crate) fn pokemon_from_icon(src: &str) -> Option<&str> {
    SQUARE_ICON
        .captures(src)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// UTC timestamp from Unix seconds given as text.
pub(crate) fn parse_epoch(text: &str) -> Result<DateTime<Utc>> {
    let seconds: i64 = parse_number(text, "time")?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| UniteError::Coercion {
        field: "time",
        value: text.to_string(),
    })
}
