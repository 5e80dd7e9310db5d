use super::door::Door;
use super::outcome::Outcome;
use super::prize::Prize;
use super::reveal::Reveal;
use crate::Arbitrary;
use crate::DOORS;
use crate::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// A fixed assignment of prizes to the three doors.
///
/// Exactly one door hides the car. Every constructor enforces this, and
/// nothing mutates a game once it is built, so the layout a contestant
/// plays against is the layout the outcome is judged against.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Game([Prize; DOORS]);

impl Game {
    /// Shuffles one car and two goats behind the doors.
    ///
    /// Each door hides the car with probability 1/3.
    pub fn deal(rng: &mut impl Rng) -> Self {
        let mut prizes = [Prize::Goat, Prize::Goat, Prize::Car];
        prizes.shuffle(rng);
        Self(prizes)
    }
    /// What stands behind a given door.
    pub fn prize(&self, door: Door) -> Prize {
        self.0[door.index()]
    }
    /// The door hiding the car.
    pub fn car(&self) -> Door {
        Door::all()
            .into_iter()
            .find(|door| self.prize(*door).is_car())
            .unwrap_or_else(|| unreachable!("game without a car"))
    }
    /// Opens a goat door other than the contestant's pick.
    ///
    /// If the pick hides a goat the host has exactly one legal door.
    /// If the pick hides the car the host chooses between the two goats
    /// with equal probability.
    pub fn reveal(&self, pick: Door, rng: &mut impl Rng) -> Reveal {
        let [a, b] = pick.others();
        match (self.prize(a), self.prize(b)) {
            (Prize::Car, _) => Reveal::new(pick, b, a),
            (_, Prize::Car) => Reveal::new(pick, a, b),
            _ if rng.random_bool(0.5) => Reveal::new(pick, a, b),
            _ => Reveal::new(pick, b, a),
        }
    }
    /// Judges a final door against this layout.
    pub fn outcome(&self, door: Door) -> Outcome {
        Outcome::from(self.prize(door))
    }
}

/// car position isomorphism
impl From<Door> for Game {
    fn from(car: Door) -> Self {
        let mut prizes = [Prize::Goat; DOORS];
        prizes[car.index()] = Prize::Car;
        Self(prizes)
    }
}

impl TryFrom<[Prize; DOORS]> for Game {
    type Error = Error;
    fn try_from(prizes: [Prize; DOORS]) -> Result<Self, Self::Error> {
        match prizes.iter().filter(|p| p.is_car()).count() {
            1 => Ok(Self(prizes)),
            n => Err(Error::invalid(format!("game must hide exactly 1 car, not {}", n))),
        }
    }
}
impl TryFrom<&[Prize]> for Game {
    type Error = Error;
    fn try_from(prizes: &[Prize]) -> Result<Self, Self::Error> {
        <[Prize; DOORS]>::try_from(prizes)
            .map_err(|_| Error::invalid(format!("game needs {} doors, not {}", DOORS, prizes.len())))
            .and_then(Self::try_from)
    }
}
impl TryFrom<&[&str]> for Game {
    type Error = Error;
    fn try_from(labels: &[&str]) -> Result<Self, Self::Error> {
        labels
            .iter()
            .map(|s| Prize::try_from(*s))
            .collect::<Result<Vec<Prize>, _>>()
            .and_then(|prizes| Self::try_from(prizes.as_slice()))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let labels = self
            .0
            .iter()
            .map(|p| format!("{:?}", p.to_string()))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "[{}]", labels)
    }
}

impl Arbitrary for Game {
    fn random() -> Self {
        Self::deal(&mut rand::rng())
    }
}
