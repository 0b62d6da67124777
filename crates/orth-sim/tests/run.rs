//! End-to-end runs of the simulation driver.

use std::time::Duration;

use orth_sim::{ConfigError, Outcome, SimConfig, SimError, Simulation, StepOutcome};
use orth_test_utils::assert_partition_invariant;
use proptest::prelude::*;

fn config(lengths: &[i32], seed: u64) -> SimConfig {
    SimConfig {
        lengths: lengths.to_vec(),
        seed: Some(seed),
        step_delay: Duration::ZERO,
        render_every: None,
        ..SimConfig::default()
    }
}

#[test]
fn default_shape_spans() {
    let mut sim = Simulation::new(config(&[15, 10], 42)).unwrap();
    let report = sim.run().unwrap();
    assert_eq!(report.outcome, Outcome::Spanned);
    assert_eq!(report.cell_count, 150);
    assert!(report.steps >= 15);
    assert!(sim.grid().is_spanning().unwrap());
    assert_partition_invariant(sim.grid());
}

#[test]
fn same_seed_same_run() {
    let mut a = Simulation::new(config(&[8, 6], 1234)).unwrap();
    let mut b = Simulation::new(config(&[8, 6], 1234)).unwrap();
    assert_eq!(a.run().unwrap(), b.run().unwrap());
    assert_eq!(a.grid().occupied_coords(), b.grid().occupied_coords());
}

#[test]
fn rendering_does_not_change_result() {
    let mut plain = Simulation::new(config(&[5, 5], 77)).unwrap();
    let mut rendered = Simulation::new(SimConfig {
        render_every: Some(2),
        ..config(&[5, 5], 77)
    })
    .unwrap();
    assert_eq!(plain.run().unwrap(), rendered.run().unwrap());
}

#[test]
fn partition_holds_after_every_step() {
    let mut sim = Simulation::new(config(&[4, 3, 2], 5)).unwrap();
    loop {
        let outcome = sim.step().unwrap();
        assert_partition_invariant(sim.grid());
        if outcome.is_terminal() {
            assert!(matches!(outcome, StepOutcome::Spanned { .. }));
            break;
        }
    }
}

#[test]
fn three_dimensional_run_reports_cluster() {
    let mut sim = Simulation::new(config(&[4, 4, 4], 99)).unwrap();
    let report = sim.run().unwrap();
    assert_eq!(report.outcome, Outcome::Spanned);
    let cluster = sim.grid().spanning_cluster().unwrap().unwrap();
    assert_eq!(report.cluster_size, Some(cluster.len()));
    assert!(cluster.len() >= 4);
}

#[test]
fn step_limit_stops_early() {
    let mut sim = Simulation::new(SimConfig {
        max_steps: Some(10),
        ..config(&[30, 30], 3)
    })
    .unwrap();
    let report = sim.run().unwrap();
    assert_eq!(report.outcome, Outcome::StepLimit);
    assert_eq!(report.steps, 10);
    assert_eq!(sim.grid().occupied_count(), 10);
}

#[test]
fn invalid_config_is_rejected_before_allocation() {
    let err = Simulation::new(config(&[], 0)).unwrap_err();
    assert_eq!(err, SimError::Config(ConfigError::NoDimensions));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn spanned_report_is_consistent(
        seed in any::<u64>(),
        lengths in proptest::collection::vec(1i32..6, 1..4),
    ) {
        let mut sim = Simulation::new(config(&lengths, seed)).unwrap();
        let report = sim.run().unwrap();
        prop_assert_eq!(report.outcome, Outcome::Spanned);
        prop_assert_eq!(report.occupied as u64, report.steps);
        prop_assert!(report.steps >= lengths[0] as u64);
        prop_assert!(report.cluster_size.is_some());
        prop_assert!(report.occupied <= report.cell_count);
    }
}
