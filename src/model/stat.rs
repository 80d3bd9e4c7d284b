use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Per-level base stats of one Pokemon, as published by the stats database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub level: Vec<LevelStat>,
}

impl PokemonStat {
    /// The stat row for `level`, if the database lists one.
    pub fn at_level(&self, level: u32) -> Option<&LevelStat> {
        self.level.iter().find(|l| l.level == f64::from(level))
    }
}

/// Base stats at a single level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStat {
    #[serde(deserialize_with = "number_or_string")]
    pub level: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub hp: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub attack: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub defense: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub sp_attack: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub sp_defense: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub crit: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub cdr: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub lifesteal: f64,
}

/// HP adjusted for physical and special defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveHp {
    pub physical: u64,
    pub special: u64,
}

impl LevelStat {
    pub fn effective_hp(&self) -> EffectiveHp {
        let scaled = |def: f64| (self.hp * (600.0 + def) / 600.0).floor().max(0.0) as u64;
        EffectiveHp {
            physical: scaled(self.defense),
            special: scaled(self.sp_defense),
        }
    }
}

/// Accepts `12`, `12.5` or `"12.5"`. A blank string counts as zero.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(text) if text.trim().is_empty() => 0.0,
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got {text:?}")))?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom(format!("non-finite number {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = r#"[
        {
            "name": "Snorlax",
            "level": [
                { "level": 1, "hp": "3300", "attack": 190, "defense": "100", "sp_attack": 30,
                  "sp_defense": 70, "crit": 0, "cdr": "0", "lifesteal": 0 },
                { "level": "2", "hp": 3420, "attack": 198, "defense": 120, "sp_attack": 36,
                  "sp_defense": 84, "crit": "", "cdr": 0, "lifesteal": 0 }
            ]
        }
    ]"#;

    #[test]
    fn test_coerces_numeric_strings() {
        let stats: Vec<PokemonStat> = serde_json::from_str(STATS).unwrap();
        assert_eq!(stats.len(), 1);
        let snorlax = &stats[0];
        assert_eq!(snorlax.name, "Snorlax");
        assert_eq!(snorlax.level[0].hp, 3300.0);
        assert_eq!(snorlax.level[0].defense, 100.0);
        assert_eq!(snorlax.level[1].level, 2.0);
        assert_eq!(snorlax.level[1].crit, 0.0);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let bad = STATS.replace(r#""hp": "3300""#, r#""hp": "lots""#);
        assert!(serde_json::from_str::<Vec<PokemonStat>>(&bad).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let bad = STATS.replace(r#""cdr": "0", "lifesteal": 0 },"#, r#""cdr": "0" },"#);
        assert!(serde_json::from_str::<Vec<PokemonStat>>(&bad).is_err());
    }

    #[test]
    fn test_effective_hp() {
        let stats: Vec<PokemonStat> = serde_json::from_str(STATS).unwrap();
        let lv1 = stats[0].at_level(1).unwrap();
        assert_eq!(
            lv1.effective_hp(),
            EffectiveHp {
                physical: 3850,
                special: 3685,
            }
        );
        assert!(stats[0].at_level(15).is_none());
    }
}
