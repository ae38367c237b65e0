use super::*;
use crate::agent::testing::ScriptedAgent;
use crate::grid::{Action, ActionSet, Cell, GridAgent, ObservationModel};

fn seeded(iterations: usize, batch_size: usize, seed: u64) -> PlannerConfig {
    PlannerConfig {
        iterations,
        batch_size,
        seed: Some(seed),
        ..PlannerConfig::default()
    }
}

/// Agent 0 should watch `{1, 2, 3}`; agent 1 then does best on `{4, 5}`.
fn contested_team() -> Vec<ScriptedAgent> {
    vec![
        ScriptedAgent::new(&[], &[&[(1, 0), (2, 0), (3, 0)], &[(9, 0)]]),
        ScriptedAgent::new(&[], &[&[(1, 0), (2, 0), (3, 0)], &[(4, 0), (5, 0)]]),
    ]
}

fn grid_team(cells: &[(i32, i32)]) -> Vec<GridAgent> {
    let actions = ActionSet::default();
    cells
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            GridAgent::new(
                format!("agent_{i}"),
                Cell::new(x, y),
                actions.clone(),
                ObservationModel::square(2),
            )
        })
        .collect()
}

#[test]
fn finds_complementary_assignment() {
    let mut agents = contested_team();
    let mut planner = DcgPlanner::new(seeded(10, 100, 7));
    let plan = planner.plan(&mut agents).unwrap();
    assert_eq!(plan.action_indices, vec![0, 1]);
    assert_eq!(plan.coverage, 5);
    assert_eq!(agents[0].intended, Some("a0"));
    assert_eq!(agents[1].intended, Some("a1"));
}

#[test]
fn chosen_action_is_argmax_of_final_block() {
    let mut agents = grid_team(&[(2, 2), (3, 2), (2, 3), (6, 6)]);
    let mut planner = DcgPlanner::new(seeded(5, 10, 1));
    let plan = planner.plan(&mut agents).unwrap();

    for (i, row) in plan.probabilities.iter().enumerate() {
        let max = row.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let first_max = row.iter().position(|p| *p == max).unwrap();
        assert_eq!(plan.action_indices[i], first_max);
        assert_eq!(agents[i].intended_action(), plan.actions[i]);
    }
}

#[test]
fn final_blocks_lie_on_simplex() {
    let agents = grid_team(&[(0, 0), (1, 1), (5, 5)]);
    let snapshot = Snapshot::capture(&agents).unwrap();
    let mut planner = DcgPlanner::new(seeded(4, 8, 3));
    let y = planner.optimize(&snapshot).unwrap();
    assert_eq!(y.len(), 3);
    for (i, yi) in y.iter().enumerate() {
        let block = &yi[snapshot.block(i)];
        assert!((block.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(block.iter().all(|p| (0.0..=1.0 + 1e-12).contains(p)));
    }
}

#[test]
fn same_seed_same_plan() {
    let run = || {
        let mut agents = grid_team(&[(0, 0), (1, 0), (0, 1)]);
        let mut planner = DcgPlanner::new(seeded(4, 6, 99));
        planner.plan(&mut agents).unwrap()
    };
    let a = run();
    let b = run();
    assert_eq!(a.action_indices, b.action_indices);
    assert_eq!(a.probabilities, b.probabilities);
}

#[test]
fn parallel_gradients_reach_same_assignment() {
    let mut agents = contested_team();
    let config = PlannerConfig {
        parallel: true,
        ..seeded(10, 100, 21)
    };
    let plan = DcgPlanner::new(config).plan(&mut agents).unwrap();
    assert_eq!(plan.action_indices, vec![0, 1]);
}

#[test]
fn lone_single_cell_agent_covers_one_cell() {
    let actions = ActionSet::default();
    let mut agents = vec![GridAgent::new(
        "solo".into(),
        Cell::new(4, 4),
        actions,
        ObservationModel::single_cell(),
    )];
    let plan = DcgPlanner::new(seeded(3, 5, 0)).plan(&mut agents).unwrap();
    assert_eq!(plan.coverage, 1);
    assert_eq!(plan.len(), 1);
}

#[test]
fn empty_team_is_a_no_op() {
    let mut agents: Vec<GridAgent> = Vec::new();
    let plan = DcgPlanner::new(seeded(3, 5, 0)).plan(&mut agents).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn zero_iterations_rejected_before_planning() {
    let mut agents = grid_team(&[(0, 0)]);
    agents[0].set_intended_action(Action::Left);
    let err = DcgPlanner::new(seeded(0, 5, 0))
        .plan(&mut agents)
        .unwrap_err();
    assert_eq!(err, PlanningError::ZeroIterations);
    assert_eq!(agents[0].intended_action(), Action::Left);
}

#[test]
fn mismatched_action_counts_rejected() {
    let mut agents = grid_team(&[(0, 0), (4, 4)]);
    agents[1] = GridAgent::new(
        "short".into(),
        Cell::new(4, 4),
        ActionSet::new(vec![Action::Stay, Action::Up]),
        ObservationModel::square(2),
    );
    let err = DcgPlanner::new(seeded(2, 2, 0))
        .plan(&mut agents)
        .unwrap_err();
    assert_eq!(
        err,
        PlanningError::ActionCountMismatch {
            agent: 1,
            expected: 5,
            found: 2
        }
    );
    assert!(agents.iter().all(|a| a.intended_action() == Action::Stay));
}

#[test]
fn blind_agent_fails_loudly() {
    // Every gradient entry of an agent that observes nothing is zero.
    let mut agents = vec![
        ScriptedAgent::new(&[], &[&[(0, 0)], &[(1, 0)]]),
        ScriptedAgent::new(&[], &[&[], &[]]),
    ];
    let err = DcgPlanner::new(seeded(2, 4, 0))
        .plan(&mut agents)
        .unwrap_err();
    assert_eq!(err, PlanningError::DegenerateSubvector { agent: 1 });
    assert!(agents.iter().all(|a| a.intended.is_none()));
}

#[derive(Debug)]
struct Isolated;

impl NeighborPolicy for Isolated {
    fn neighbors(&self, agent: usize, _n_agents: usize) -> Vec<usize> {
        vec![agent]
    }

    fn name(&self) -> &str {
        "isolated"
    }
}

#[test]
fn neighbor_policy_is_swappable() {
    let mut agents = contested_team();
    let mut planner = DcgPlanner::with_neighbor_policy(seeded(10, 100, 7), Box::new(Isolated));
    let plan = planner.plan(&mut agents).unwrap();
    assert_eq!(plan.len(), 2);
    for row in &plan.probabilities {
        assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn radius_has_no_effect() {
    let run = |radius| {
        let mut agents = grid_team(&[(0, 0), (1, 1)]);
        let config = PlannerConfig {
            radius,
            ..seeded(3, 4, 5)
        };
        DcgPlanner::new(config).plan(&mut agents).unwrap()
    };
    assert_eq!(run(Some(1.0)).probabilities, run(None).probabilities);
}

#[test]
fn argmax_prefers_first_maximum() {
    assert_eq!(argmax(&[0.2, 0.4, 0.4]), 1);
    assert_eq!(argmax(&[0.5, 0.5]), 0);
}

/// Footprints are pairwise disjoint, so every trial returns the exact
/// marginals `[1, 3, 3, 1]` and the iterates are deterministic.
fn disjoint_team() -> Vec<ScriptedAgent> {
    vec![
        ScriptedAgent::new(&[], &[&[(0, 0)], &[(1, 0), (2, 0), (3, 0)]]),
        ScriptedAgent::new(&[], &[&[(4, 0), (5, 0), (6, 0)], &[(7, 0)]]),
    ]
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
    }
}

#[test]
fn later_agents_average_updated_iterates() {
    let snapshot = Snapshot::capture(&disjoint_team()).unwrap();
    let y = DcgPlanner::new(seeded(1, 3, 11))
        .optimize(&snapshot)
        .unwrap();
    assert_close(&y[0], &[0.375, 0.625, 0.5, 0.5]);
    // Agent 1 averages with agent 0's iterate from this same round.
    assert_close(&y[1], &[0.4375, 0.5625, 0.625, 0.375]);
}

#[test]
fn step_size_shrinks_as_one_over_t() {
    let snapshot = Snapshot::capture(&disjoint_team()).unwrap();
    let y = DcgPlanner::new(seeded(2, 3, 11))
        .optimize(&snapshot)
        .unwrap();
    let d = 48.0;
    assert_close(&y[0], &[17.0 / d, 31.0 / d, 0.5625, 0.4375]);
    assert_close(&y[1], &[19.0 / d, 29.0 / d, 31.0 / d, 17.0 / d]);
}
