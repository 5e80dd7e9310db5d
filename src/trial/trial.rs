use crate::game::*;
use rand::Rng;

/// Both strategies' outcomes for one game.
///
/// Stay and switch are judged against the same layout, the same initial
/// pick, and the same opened door, so exactly one of them wins.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Trial {
    stay: Outcome,
    switch: Outcome,
}

impl Trial {
    /// Plays one full game: deal, pick, reveal, then settle both strategies.
    pub fn play(rng: &mut impl Rng) -> Self {
        let game = Game::deal(rng);
        let pick = Door::pick(rng);
        let ref reveal = game.reveal(pick, rng);
        let trial = Self::settle(&game, reveal);
        log::trace!("{} {} -> {}", game, reveal, trial);
        trial
    }
    /// Judges both strategies for an already revealed game.
    pub fn settle(game: &Game, reveal: &Reveal) -> Self {
        Self {
            stay: game.outcome(Strategy::Stay.choose(reveal)),
            switch: game.outcome(Strategy::Switch.choose(reveal)),
        }
    }
    /// Outcome for one strategy.
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }
    /// The strategy that won this game.
    pub fn winner(&self) -> Strategy {
        if self.stay.is_win() {
            Strategy::Stay
        } else {
            Strategy::Switch
        }
    }
    /// (strategy, outcome) pairs in table-row order.
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, Outcome)> + '_ {
        Strategy::all().into_iter().map(|s| (s, self.outcome(s)))
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "stay {} switch {}", self.stay, self.switch)
    }
}
