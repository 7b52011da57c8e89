// File: src/api.rs

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::BoardError;
use crate::game_state::{validate_board, validate_grid};
use crate::grid::{Cell, Grid};
use crate::policy::{Decision, Tier};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DecideRequest {
    pub width: usize,
    pub height: usize,
    pub body: Vec<Cell>,
    pub target: Cell,
}

impl DecideRequest {
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        validate_board(&self.grid(), &self.body, self.target)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DecideResponse {
    pub r#move: Option<String>,
    pub tier: Option<Tier>,
    pub shout: String,
}

impl DecideResponse {
    pub fn from_decision(decision: Option<Decision>) -> Self {
        DecideResponse {
            r#move: decision.map(|d| d.direction.as_str().to_string()),
            tier: decision.map(|d| d.tier),
            shout: shout_for(decision.map(|d| d.tier)).to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AutopilotRequest {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
    pub max_turns: Option<u32>,
}

/// Settled parameters for one autopilot game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutopilotPlan {
    pub grid: Grid,
    pub seed: u64,
    pub max_turns: u32,
}

impl AutopilotRequest {
    /// Fills missing fields from `config`, caps `max_turns` at the configured
    /// limit and rejects boards the engine will not run on. `fallback_seed`
    /// is used when the request names no seed.
    pub fn resolve(&self, config: &Config, fallback_seed: u64) -> Result<AutopilotPlan, BoardError> {
        let grid = Grid::new(
            self.width.unwrap_or(config.board.width),
            self.height.unwrap_or(config.board.height),
        );
        validate_grid(&grid)?;

        Ok(AutopilotPlan {
            grid,
            seed: self.seed.unwrap_or(fallback_seed),
            max_turns: self
                .max_turns
                .map_or(config.max_turns, |turns| turns.min(config.max_turns)),
        })
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// Local flavor line for a move. Stands in for the remote commentary
/// service, which is never called from here.
pub fn shout_for(tier: Option<Tier>) -> &'static str {
    match tier {
        Some(Tier::Targeted) => "Food spotted, going in!",
        Some(Tier::SpaceSafe) => "Can't reach the food safely, chasing my tail.",
        Some(Tier::Emergency) => "Things are getting tight in here...",
        None => "Nowhere left to go!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, MAX_SIDE};
    use serde_json::json;

    #[test]
    fn parses_request_json() {
        let request: DecideRequest = serde_json::from_value(json!({
            "width": 5,
            "height": 5,
            "body": [{"x": 2, "y": 2}, {"x": 2, "y": 3}],
            "target": {"x": 2, "y": 0}
        }))
        .unwrap();
        assert_eq!(request.grid(), Grid::new(5, 5));
        assert_eq!(request.body[1], Cell::new(2, 3));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn response_serializes_lowercase_move_and_null_when_trapped() {
        let decision = Decision {
            direction: Direction::Left,
            tier: Tier::SpaceSafe,
            score: 7,
            candidates: 2,
        };
        let value = serde_json::to_value(DecideResponse::from_decision(Some(decision))).unwrap();
        assert_eq!(value["move"], "left");
        assert_eq!(value["tier"], "space_safe");

        let trapped = serde_json::to_value(DecideResponse::from_decision(None)).unwrap();
        assert!(trapped["move"].is_null());
        assert_eq!(trapped["shout"], "Nowhere left to go!");
    }

    #[test]
    fn oversized_decide_request_is_rejected() {
        let request: DecideRequest = serde_json::from_value(json!({
            "width": usize::MAX,
            "height": 2,
            "body": [{"x": 0, "y": 0}, {"x": 1, "y": 0}],
            "target": {"x": 0, "y": 1}
        }))
        .unwrap();
        assert_eq!(
            request.validate(),
            Err(BoardError::TooLarge {
                width: usize::MAX,
                height: 2,
                max: MAX_SIDE
            })
        );
    }

    #[test]
    fn autopilot_request_falls_back_to_config() {
        let config = Config::default();
        let plan = AutopilotRequest::default().resolve(&config, 77).unwrap();
        assert_eq!(plan.grid, config.board);
        assert_eq!(plan.seed, 77);
        assert_eq!(plan.max_turns, config.max_turns);
    }

    #[test]
    fn autopilot_turns_are_capped_by_config() {
        let config = Config::default();
        let request = AutopilotRequest {
            max_turns: Some(u32::MAX),
            seed: Some(5),
            ..AutopilotRequest::default()
        };
        let plan = request.resolve(&config, 0).unwrap();
        assert_eq!(plan.max_turns, config.max_turns);
        assert_eq!(plan.seed, 5);

        let short = AutopilotRequest {
            max_turns: Some(10),
            ..AutopilotRequest::default()
        };
        assert_eq!(short.resolve(&config, 0).unwrap().max_turns, 10);
    }

    #[test]
    fn autopilot_board_size_is_bounded() {
        let config = Config::default();
        let huge = AutopilotRequest {
            width: Some(MAX_SIDE + 1),
            ..AutopilotRequest::default()
        };
        assert!(matches!(
            huge.resolve(&config, 0),
            Err(BoardError::TooLarge { .. })
        ));

        let empty = AutopilotRequest {
            height: Some(0),
            ..AutopilotRequest::default()
        };
        assert!(matches!(
            empty.resolve(&config, 0),
            Err(BoardError::EmptyGrid { .. })
        ));
    }
}
