// File: tests/autopilot_test.rs

use autosnake::autopilot::{run_autopilot, EndReason};
use autosnake::grid::Grid;
use autosnake::policy::Tier;

#[test]
fn test_autopilot_stops_at_turn_limit() {
    let report = run_autopilot(Grid::new(11, 11), 1, 25);

    println!("{}", report.final_board);
    assert_eq!(report.end_reason, EndReason::TurnLimit);
    assert_eq!(report.turns, 25);
    assert_eq!(report.length, 3 + report.score as usize);
    assert_eq!(report.tiers.values().sum::<u32>(), 25);
}

#[test]
fn test_autopilot_never_crashes_on_a_small_board() {
    for seed in 0..10 {
        let report = run_autopilot(Grid::new(6, 6), seed, 2_000);

        println!("seed {}: {:?} after {} turns", seed, report.end_reason, report.turns);
        println!("{}", report.final_board);
        assert!(report.score >= 1, "never ate with seed {}", seed);
        assert!(report.tiers.get(&Tier::Targeted).copied().unwrap_or(0) > 0);
        // Every move the engine returns is legal, so only these endings remain
        assert!(matches!(
            report.end_reason,
            EndReason::TurnLimit | EndReason::BoardFull | EndReason::Trapped
        ));
    }
}

#[test]
fn test_autopilot_games_are_reproducible_by_seed() {
    let first = run_autopilot(Grid::new(8, 8), 1234, 2_000);
    let second = run_autopilot(Grid::new(8, 8), 1234, 2_000);

    assert_ne!(first.id, second.id);
    assert_eq!(first.turns, second.turns);
    assert_eq!(first.score, second.score);
    assert_eq!(first.end_reason, second.end_reason);
    assert_eq!(first.final_board, second.final_board);
}

#[test]
fn test_single_cell_board_is_immediately_full() {
    let report = run_autopilot(Grid::new(1, 1), 0, 100);
    assert_eq!(report.end_reason, EndReason::BoardFull);
    assert_eq!(report.turns, 0);
}

#[test]
fn test_report_serializes_tier_counts() {
    let report = run_autopilot(Grid::new(5, 5), 3, 10);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["end_reason"], "turn_limit");
    assert!(value["tiers"].is_object());
    assert_eq!(value["grid"]["width"], 5);
}
