use crate::game::Outcome;
use crate::game::Strategy;

/// One (trial, strategy) cell of a batch, flattened for tabular output.
///
/// A batch of n trials yields 2n rows, stay before switch within a trial.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Row {
    pub trial: usize,
    pub strategy: Strategy,
    pub outcome: Outcome,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:>8} {:<8}{}", self.trial, self.strategy, self.outcome)
    }
}
