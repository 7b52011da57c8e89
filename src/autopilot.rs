use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use uuid::Uuid;

use crate::game_state::{GameState, StepOutcome};
use crate::grid::Grid;
use crate::policy::{decide_detailed, Tier};
use crate::visualizer::visualize_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The engine found no legal step.
    Trapped,
    HitWall,
    HitSelf,
    /// The snake covers every cell.
    BoardFull,
    TurnLimit,
}

/// Summary of one headless game driven entirely by the engine.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub id: Uuid,
    pub seed: u64,
    pub grid: Grid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub turns: u32,
    pub score: u32,
    pub length: usize,
    pub end_reason: EndReason,
    pub tiers: HashMap<Tier, u32>,
    pub final_board: String,
}

/// Plays one game from a centered length-3 snake until it ends or
/// `max_turns` steps have been taken.
pub fn run_autopilot(grid: Grid, seed: u64, max_turns: u32) -> GameReport {
    let id = Uuid::new_v4();
    let started_at = Utc::now();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::centered(grid);
    let mut tiers: HashMap<Tier, u32> = HashMap::new();

    info!("Autopilot game {} started on {}x{} (seed {})", id, grid.width, grid.height, seed);
    state.spawn_food(&mut rng);

    let end_reason = loop {
        if state.turn >= max_turns {
            break EndReason::TurnLimit;
        }
        let Some(food) = state.food else {
            break EndReason::BoardFull;
        };

        let body = state.body_cells();
        let Some(decision) = decide_detailed(&grid, &body, food) else {
            break EndReason::Trapped;
        };
        *tiers.entry(decision.tier).or_insert(0) += 1;

        match state.step(decision.direction) {
            StepOutcome::Moved => {}
            StepOutcome::Ate => {
                debug!(
                    "Turn {}: ate, length {}\n{}",
                    state.turn,
                    state.length(),
                    visualize_board(&grid, &body, Some(food))
                );
                if state.is_full() || state.spawn_food(&mut rng).is_none() {
                    break EndReason::BoardFull;
                }
            }
            StepOutcome::HitWall => break EndReason::HitWall,
            StepOutcome::HitSelf | StepOutcome::GameOver => break EndReason::HitSelf,
        }
    };

    let finished_at = Utc::now();
    let final_board = visualize_board(&grid, &state.body_cells(), state.food);
    info!(
        "Autopilot game {} ended after {} turns: {:?}, score {}, length {}",
        id,
        state.turn,
        end_reason,
        state.score,
        state.length()
    );

    GameReport {
        id,
        seed,
        grid,
        started_at,
        finished_at,
        turns: state.turn,
        score: state.score,
        length: state.length(),
        end_reason,
        tiers,
        final_board,
    }
}
