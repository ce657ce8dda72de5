use std::collections::HashMap;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::model::game::{GameInput, GameResult, GameUpdate};
use crate::time::parse_game_date;

/// Field keys accepted on the command line. Any unique prefix works (`s:30`).
pub const GAME_KEYS: [&str; 8] = [
    "date", "team", "league", "opponent", "shots", "goals", "result", "notes",
];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub text: String,
    pub metadata: HashMap<String, String>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut text_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        text_parts.push(arg.as_str());
    }

    ParsedInput {
        text: text_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    let key = key.to_lowercase();
    if candidates.contains(&key.as_str()) {
        return Ok(key);
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key.as_str()))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

/// Parses `key:value` arguments into a partial update. Loose words become notes.
pub fn parse_game_update(args: &[String], today: NaiveDate) -> Result<GameUpdate> {
    let parsed = parse_args(args);
    let mut fields: HashMap<String, String> = HashMap::new();
    for (key, value) in parsed.metadata {
        let full_key = expand_key(&key, &GAME_KEYS)?;
        if fields.insert(full_key.clone(), value).is_some() {
            return Err(anyhow!("Field '{}' given more than once", full_key));
        }
    }

    let mut update = GameUpdate::default();
    for (key, value) in fields {
        match key.as_str() {
            "date" => update.date = Some(parse_game_date(&value, today)?),
            "team" => update.team = Some(value),
            "league" => update.league = Some(value),
            "opponent" => update.opponent = Some(value),
            "shots" => update.shots_against = Some(parse_count("shots", &value)?),
            "goals" => update.goals_allowed = Some(parse_count("goals", &value)?),
            "result" => update.result = Some(value.parse()?),
            "notes" => update.notes = Some(value),
            _ => unreachable!("expand_key only returns GAME_KEYS"),
        }
    }
    if update.notes.is_none() && !parsed.text.trim().is_empty() {
        update.notes = Some(parsed.text);
    }

    Ok(update)
}

/// Parses a complete new game. The date defaults to `today`.
pub fn parse_game_input(args: &[String], today: NaiveDate) -> Result<GameInput> {
    let update = parse_game_update(args, today)?;
    let missing = |field: &str| anyhow!("Missing required field: {}", field);

    Ok(GameInput {
        date: update.date.unwrap_or(today),
        team: update.team.ok_or_else(|| missing("team"))?,
        league: update.league.ok_or_else(|| missing("league"))?,
        opponent: update.opponent.ok_or_else(|| missing("opponent"))?,
        shots_against: update.shots_against.ok_or_else(|| missing("shots"))?,
        goals_allowed: update.goals_allowed.ok_or_else(|| missing("goals"))?,
        result: update.result.ok_or_else(|| missing("result"))?,
        notes: update.notes,
    })
}

fn parse_count(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("Please enter valid {}: '{}'", field, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let parsed = parse_args(&args(&["Great", "game", "team:Hawks", "league:AAA"]));
        assert_eq!(parsed.text, "Great game");
        assert_eq!(parsed.metadata.get("team"), Some(&"Hawks".to_string()));
        assert_eq!(parsed.metadata.get("league"), Some(&"AAA".to_string()));
    }

    #[test]
    fn test_expand_key() {
        assert_eq!(expand_key("s", &GAME_KEYS).unwrap(), "shots");
        assert_eq!(expand_key("g", &GAME_KEYS).unwrap(), "goals");
        assert_eq!(expand_key("opp", &GAME_KEYS).unwrap(), "opponent");
        assert_eq!(expand_key("League", &GAME_KEYS).unwrap(), "league");
        assert!(expand_key("x", &GAME_KEYS).is_err());

        let candidates = ["team", "teammate"];
        assert!(expand_key("tea", &candidates).is_err());
        assert_eq!(expand_key("team", &candidates).unwrap(), "team");
    }

    #[test]
    fn test_parse_game_input() {
        let input = parse_game_input(
            &args(&[
                "t:Hawks", "l:AAA", "o:Bears", "s:30", "g:2", "r:W", "d:yesterday", "stood", "tall",
            ]),
            today(),
        )
        .unwrap();
        assert_eq!(input.team, "Hawks");
        assert_eq!(input.league, "AAA");
        assert_eq!(input.opponent, "Bears");
        assert_eq!(input.shots_against, 30);
        assert_eq!(input.goals_allowed, 2);
        assert_eq!(input.result, GameResult::Win);
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
        assert_eq!(input.notes.as_deref(), Some("stood tall"));
    }

    #[test]
    fn test_parse_game_input_defaults_date_and_reports_missing() {
        let input = parse_game_input(
            &args(&["team:Hawks", "league:AAA", "opp:Bears", "shots:0", "goals:0", "result:sol"]),
            today(),
        )
        .unwrap();
        assert_eq!(input.date, today());
        assert_eq!(input.result, GameResult::ShootoutLoss);

        let err = parse_game_input(&args(&["team:Hawks", "league:AAA"]), today()).unwrap_err();
        assert!(err.to_string().contains("Missing required field"));
    }

    #[test]
    fn test_parse_game_update_rejects_bad_values() {
        assert!(parse_game_update(&args(&["shots:-3"]), today()).is_err());
        assert!(parse_game_update(&args(&["result:tie"]), today()).is_err());
        assert!(parse_game_update(&args(&["s:20", "shots:21"]), today()).is_err());
        assert!(parse_game_update(&args(&["zamboni:yes"]), today()).is_err());
    }

    #[test]
    fn test_parse_game_update_partial() {
        let update = parse_game_update(&args(&["g:1", "notes:"]), today()).unwrap();
        assert_eq!(update.goals_allowed, Some(1));
        assert_eq!(update.notes.as_deref(), Some(""));
        assert_eq!(update.team, None);
        assert!(!update.is_empty());
        assert!(parse_game_update(&[], today()).unwrap().is_empty());
    }
}
