//! Hand-built agents with explicit footprints for unit tests.

use std::collections::HashSet;

use super::traits::CoverageAgent;

/// Agent whose successors and footprints are given verbatim.
///
/// States are successor indices; `usize::MAX` stands for the current state.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    pub current: HashSet<(i32, i32)>,
    pub footprints: Vec<HashSet<(i32, i32)>>,
    pub labels: Vec<&'static str>,
    pub intended: Option<&'static str>,
}

pub const CURRENT: usize = usize::MAX;

impl ScriptedAgent {
    /// Agent observing `current` now and `footprints[j]` after action `j`.
    pub fn new(current: &[(i32, i32)], footprints: &[&[(i32, i32)]]) -> Self {
        let labels = ["a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7"];
        assert!(footprints.len() <= labels.len());
        Self {
            current: current.iter().copied().collect(),
            footprints: footprints
                .iter()
                .map(|f| f.iter().copied().collect())
                .collect(),
            labels: labels[..footprints.len()].to_vec(),
            intended: None,
        }
    }
}

impl CoverageAgent for ScriptedAgent {
    type State = usize;
    type Action = &'static str;
    type Cell = (i32, i32);

    fn state(&self) -> usize {
        CURRENT
    }

    fn successors(&self) -> Vec<(usize, &'static str)> {
        self.labels.iter().copied().enumerate().collect()
    }

    fn observe(&self, state: &usize) -> HashSet<(i32, i32)> {
        if *state == CURRENT {
            self.current.clone()
        } else {
            self.footprints[*state].clone()
        }
    }

    fn set_intended_action(&mut self, action: &'static str) {
        self.intended = Some(action);
    }
}
