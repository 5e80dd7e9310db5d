//! Statistical checks over full simulation runs.
//!
//! Tolerances are a few standard errors wide at the sample sizes used, and
//! every run is seeded, so these are deterministic rather than flaky.
use super::*;
use crate::EXPECTED_STAY_WIN;
use crate::EXPECTED_SWITCH_WIN;
use crate::game::*;

const N: i64 = 100_000;
const TOLERANCE: f64 = 0.01;

fn simulation(n: i64, seed: u64) -> Simulation {
    Simulation::new(Trials::try_from(n).unwrap(), seed)
}

#[test]
fn switching_wins_two_thirds() {
    let summary = simulation(N, 0xC0FFEE).run().summary();
    assert_eq!(summary.trials(), N as usize);
    let switch = summary.win_rate(Strategy::Switch);
    let stay = summary.win_rate(Strategy::Stay);
    assert!((switch - EXPECTED_SWITCH_WIN).abs() < TOLERANCE, "switch {}", switch);
    assert!((stay - EXPECTED_STAY_WIN).abs() < TOLERANCE, "stay {}", stay);
    assert_eq!(summary.best(), Strategy::Switch);
}

#[test]
fn every_trial_has_one_winner() {
    let batch = simulation(10_000, 11).run();
    assert!(batch.trials().iter().all(|trial| trial
        .iter()
        .filter(|(_, outcome)| outcome.is_win())
        .count()
        == 1));
    let summary = batch.summary();
    assert_eq!(
        summary.tally(Strategy::Stay).wins() + summary.tally(Strategy::Switch).wins(),
        batch.len()
    );
}

#[test]
fn rows_are_twice_the_trials() {
    let batch = simulation(250, 12).run();
    let rows = batch.rows().collect::<Vec<Row>>();
    assert_eq!(batch.len(), 250);
    assert_eq!(rows.len(), 500);
    assert_eq!(rows[0].trial, 1);
    assert_eq!(rows[0].strategy, Strategy::Stay);
    assert_eq!(rows[1].trial, 1);
    assert_eq!(rows[1].strategy, Strategy::Switch);
    assert_eq!(rows[499].trial, 250);
}

#[test]
fn seeded_runs_are_reproducible() {
    assert_eq!(simulation(1_000, 42).run(), simulation(1_000, 42).run());
    assert_ne!(simulation(1_000, 42).run(), simulation(1_000, 43).run());
}

#[cfg(feature = "server")]
#[test]
fn parallel_matches_sequential() {
    let simulation = simulation(20_000, 99);
    assert_eq!(simulation.run(), simulation.par_run());
}
