//! Flat entry points over raw door numbers.
//!
//! These mirror the classic step-by-step formulation of the puzzle:
//! create a game, select a door, open a goat door, change (or keep) the
//! door, determine the winner. Door numbers cross this boundary as plain
//! [`DoorIndex`] values and are validated on the way in, so an
//! out-of-range door fails with [`InvalidArgument`](crate::Error::InvalidArgument) instead of
//! producing a wrong answer.
use crate::DoorIndex;
use crate::Result;
use crate::game::*;
use crate::simulation::Batch;
use crate::simulation::Trials;
use crate::trial::Trial;
use rand::Rng;

/// Shuffles one car and two goats behind three doors.
pub fn create_game(rng: &mut impl Rng) -> Game {
    Game::deal(rng)
}

/// Picks a door uniformly at random.
pub fn select_door(rng: &mut impl Rng) -> DoorIndex {
    Door::pick(rng).into()
}

/// The door the host opens: never the pick, never the car.
pub fn open_goat_door(game: &Game, pick: DoorIndex, rng: &mut impl Rng) -> Result<DoorIndex> {
    let pick = Door::try_from(pick)?;
    Ok(game.reveal(pick, rng).opened().into())
}

/// The contestant's final door after choosing to stay or switch.
pub fn change_door(stay: bool, opened: DoorIndex, pick: DoorIndex) -> Result<DoorIndex> {
    let ref reveal = Reveal::try_from((Door::try_from(pick)?, Door::try_from(opened)?))?;
    Ok(Strategy::from(stay).choose(reveal).into())
}

/// WIN if the final door hides the car.
pub fn determine_winner(final_pick: DoorIndex, game: &Game) -> Result<Outcome> {
    Ok(game.outcome(Door::try_from(final_pick)?))
}

/// One full game, judged under both strategies.
pub fn play_game(rng: &mut impl Rng) -> Trial {
    Trial::play(rng)
}

/// Plays `n` games from a single generator and logs the proportion table.
///
/// `n` is validated before any game is played.
pub fn play_n_games(n: i64, rng: &mut impl Rng) -> Result<Batch> {
    Trials::try_from(n).map(|trials| play_trials(trials, rng))
}

/// [`play_n_games`] with [`DEFAULT_TRIALS`](crate::DEFAULT_TRIALS) games.
pub fn play_default_games(rng: &mut impl Rng) -> Batch {
    play_trials(Trials::default(), rng)
}

fn play_trials(trials: Trials, rng: &mut impl Rng) -> Batch {
    let batch = (0..trials.get()).map(|_| play_game(rng)).collect::<Batch>();
    log::info!("\n{}", batch.summary());
    batch
}
