use crate::Probability;
use crate::game::Outcome;
use crate::game::Strategy;
use crate::trial::Trial;

/// Win and loss counts for one strategy.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    losses: usize,
}

impl Tally {
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn total(&self) -> usize {
        self.wins + self.losses
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Lose => self.losses,
        }
    }
    /// Share of games ending in `outcome`. Zero for an empty tally.
    pub fn proportion(&self, outcome: Outcome) -> Probability {
        match self.total() {
            0 => 0.,
            n => self.count(outcome) as Probability / n as Probability,
        }
    }
}

impl From<Outcome> for Tally {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self { wins: 1, losses: 0 },
            Outcome::Lose => Self { wins: 0, losses: 1 },
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            losses: self.losses + rhs.losses,
        }
    }
}

/// Per-strategy outcome frequencies across a batch.
///
/// Built by summing single-trial summaries, so merging is commutative and
/// the result does not depend on the order trials finished in. Displays
/// as a row-normalized table: one row per strategy, one column per
/// outcome, proportions to two decimals.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
#[serde(into = "Report")]
pub struct Summary {
    stay: Tally,
    switch: Tally,
}

impl Summary {
    pub fn tally(&self, strategy: Strategy) -> Tally {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }
    /// Number of trials aggregated.
    pub fn trials(&self) -> usize {
        self.stay.total()
    }
    pub fn proportion(&self, strategy: Strategy, outcome: Outcome) -> Probability {
        self.tally(strategy).proportion(outcome)
    }
    pub fn win_rate(&self, strategy: Strategy) -> Probability {
        self.proportion(strategy, Outcome::Win)
    }
    /// The strategy with the higher win count, stay on a tie.
    pub fn best(&self) -> Strategy {
        if self.switch.wins > self.stay.wins {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }
}

impl From<&Trial> for Summary {
    fn from(trial: &Trial) -> Self {
        Self {
            stay: Tally::from(trial.outcome(Strategy::Stay)),
            switch: Tally::from(trial.outcome(Strategy::Switch)),
        }
    }
}
impl From<&[Trial]> for Summary {
    fn from(trials: &[Trial]) -> Self {
        trials.iter().map(Self::from).sum()
    }
}

impl std::ops::Add for Summary {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            stay: self.stay + rhs.stay,
            switch: self.switch + rhs.switch,
        }
    }
}
impl std::iter::Sum for Summary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10}", "outcome")?;
        for outcome in Outcome::all() {
            write!(f, "{:>6}", outcome)?;
        }
        writeln!(f)?;
        writeln!(f, "{:<10}", "strategy")?;
        for strategy in Strategy::all() {
            write!(f, "{:<10}", strategy)?;
            for outcome in Outcome::all() {
                write!(f, "{:>6.2}", self.proportion(strategy, outcome))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialized shape of a [`Summary`].
#[derive(serde::Serialize)]
struct Report {
    trials: usize,
    strategies: Vec<Line>,
}

#[derive(serde::Serialize)]
struct Line {
    strategy: Strategy,
    wins: usize,
    losses: usize,
    win: Probability,
    lose: Probability,
}

impl From<Summary> for Report {
    fn from(summary: Summary) -> Self {
        Self {
            trials: summary.trials(),
            strategies: Strategy::all()
                .into_iter()
                .map(|strategy| (strategy, summary.tally(strategy)))
                .map(|(strategy, tally)| Line {
                    strategy,
                    wins: tally.wins(),
                    losses: tally.losses(),
                    win: tally.proportion(Outcome::Win),
                    lose: tally.proportion(Outcome::Lose),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::*;

    fn trial(car: u8, pick: u8, opened: u8) -> Trial {
        let game = Game::from(Door::try_from(car).unwrap());
        let pick = Door::try_from(pick).unwrap();
        let opened = Door::try_from(opened).unwrap();
        Trial::settle(&game, &Reveal::try_from((pick, opened)).unwrap())
    }

    #[test]
    fn counts_and_proportions() {
        let trials = [trial(1, 1, 2), trial(2, 1, 3), trial(3, 1, 2), trial(1, 2, 3)];
        let summary = Summary::from(&trials[..]);
        assert_eq!(summary.trials(), 4);
        assert_eq!(summary.tally(Strategy::Stay).wins(), 1);
        assert_eq!(summary.tally(Strategy::Switch).wins(), 3);
        assert_eq!(summary.win_rate(Strategy::Stay), 0.25);
        assert_eq!(summary.proportion(Strategy::Switch, Outcome::Lose), 0.25);
        assert_eq!(summary.best(), Strategy::Switch);
    }

    #[test]
    fn merge_is_order_insensitive() {
        let trials = [trial(1, 1, 2), trial(2, 1, 3), trial(3, 2, 1)];
        let forward = Summary::from(&trials[..]);
        let reverse = trials.iter().rev().map(Summary::from).sum::<Summary>();
        assert_eq!(forward, reverse);
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = Summary::default();
        assert_eq!(summary.trials(), 0);
        assert_eq!(summary.win_rate(Strategy::Switch), 0.);
    }

    #[test]
    fn renders_table() {
        let trials = [trial(1, 1, 2), trial(2, 1, 3), trial(3, 1, 2)];
        let table = Summary::from(&trials[..]).to_string();
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "outcome     LOSE   WIN");
        assert_eq!(lines[1].trim(), "strategy");
        assert_eq!(lines[2], "STAY        0.67  0.33");
        assert_eq!(lines[3], "SWITCH      0.33  0.67");
    }

    #[test]
    fn serializes_report() {
        let trials = [trial(1, 1, 2), trial(2, 1, 3)];
        let json = serde_json::to_value(Summary::from(&trials[..])).unwrap();
        assert_eq!(json["trials"], 2);
        assert_eq!(json["strategies"][0]["strategy"], "STAY");
        assert_eq!(json["strategies"][0]["wins"], 1);
        assert_eq!(json["strategies"][1]["strategy"], "SWITCH");
        assert_eq!(json["strategies"][1]["win"], 0.5);
    }
}
