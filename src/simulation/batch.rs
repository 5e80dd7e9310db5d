use super::row::Row;
use super::summary::Summary;
use crate::trial::Trial;

/// The ordered results of one simulation run, one [`Trial`] per game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Batch(Vec<Trial>);

impl Batch {
    pub fn trials(&self) -> &[Trial] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Flattens into 2n rows, numbering trials from 1.
    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, trial)| {
                trial.iter().map(move |(strategy, outcome)| Row {
                    trial: i + 1,
                    strategy,
                    outcome,
                })
            })
    }
    pub fn summary(&self) -> Summary {
        Summary::from(self.trials())
    }
}

impl From<Vec<Trial>> for Batch {
    fn from(trials: Vec<Trial>) -> Self {
        Self(trials)
    }
}

impl FromIterator<Trial> for Batch {
    fn from_iter<I: IntoIterator<Item = Trial>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Trial;
    type IntoIter = std::slice::Iter<'a, Trial>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
