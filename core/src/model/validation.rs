use thiserror::Error;

use crate::model::game::GameInput;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a {0}")]
    EmptyField(&'static str),
    #[error("Goals allowed ({goals}) cannot exceed shots against ({shots})")]
    GoalsExceedShots { goals: u32, shots: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown game result: '{0}' (expected W, L, OTL or SOL)")]
    UnknownResult(String),
    #[error("Unknown time window: '{0}' (expected all, week, month or year)")]
    UnknownWindow(String),
}

/// Checks a game at the input boundary. Nothing downstream re-checks these rules.
pub fn validate(input: &GameInput) -> Result<(), ValidationError> {
    let required = [
        ("team name", &input.team),
        ("league", &input.league),
        ("opponent", &input.opponent),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField(field));
        }
    }

    if input.goals_allowed > input.shots_against {
        return Err(ValidationError::GoalsExceedShots {
            goals: input.goals_allowed,
            shots: input.shots_against,
        });
    }

    Ok(())
}
