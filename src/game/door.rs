use crate::Arbitrary;
use crate::DoorIndex;
use crate::Error;
use rand::Rng;

/// One of the three doors on stage.
///
/// Stored as its 1-based number, so the only values that can exist are
/// 1, 2 and 3. Raw integers enter through [`TryFrom`], which rejects
/// anything else.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(into = "u8")]
pub struct Door(DoorIndex);

impl Door {
    /// All three doors in stage order.
    pub const fn all() -> [Self; 3] {
        [Self(1), Self(2), Self(3)]
    }
    /// Zero-based position, for indexing prize layouts.
    pub const fn index(&self) -> usize {
        self.0 as usize - 1
    }
    /// The two doors other than this one, in stage order.
    pub const fn others(&self) -> [Self; 2] {
        match self.0 {
            1 => [Self(2), Self(3)],
            2 => [Self(1), Self(3)],
            _ => [Self(1), Self(2)],
        }
    }
    /// Draws a door uniformly at random.
    pub fn pick(rng: &mut impl Rng) -> Self {
        Self(rng.random_range(1..=3))
    }
}

/// position isomorphism
/// layout slots 0..3 map onto doors 1..=3
impl TryFrom<usize> for Door {
    type Error = Error;
    fn try_from(i: usize) -> Result<Self, Self::Error> {
        match i {
            0..=2 => Ok(Self(i as DoorIndex + 1)),
            _ => Err(Error::invalid(format!("layout slot {} is not one of 0, 1, 2", i))),
        }
    }
}

impl From<Door> for DoorIndex {
    fn from(door: Door) -> Self {
        door.0
    }
}
impl TryFrom<DoorIndex> for Door {
    type Error = Error;
    fn try_from(n: DoorIndex) -> Result<Self, Self::Error> {
        match n {
            1..=3 => Ok(Self(n)),
            _ => Err(Error::invalid(format!("door {} is not one of 1, 2, 3", n))),
        }
    }
}
impl TryFrom<i64> for Door {
    type Error = Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        DoorIndex::try_from(n)
            .map_err(|_| Error::invalid(format!("door {} is not one of 1, 2, 3", n)))
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Door {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Arbitrary for Door {
    fn random() -> Self {
        Self::pick(&mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Door::try_from(0u8), Err(Error::InvalidArgument(_))));
        assert!(matches!(Door::try_from(4u8), Err(Error::InvalidArgument(_))));
        assert!(matches!(Door::try_from(-1i64), Err(Error::InvalidArgument(_))));
        assert!(matches!(Door::try_from(300i64), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn bijective_index() {
        for door in Door::all() {
            assert_eq!(Ok(door), Door::try_from(door.index()));
            assert_eq!(Ok(door), Door::try_from(DoorIndex::from(door)));
        }
    }

    #[test]
    fn rejects_slot_past_the_stage() {
        assert!(matches!(Door::try_from(3usize), Err(Error::InvalidArgument(_))));
        assert!(matches!(Door::try_from(5usize), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn random_doors_are_on_stage() {
        for _ in 0..100 {
            let door = Door::random();
            assert!(Door::all().contains(&door));
            assert!(door.index() < 3);
        }
    }

    #[test]
    fn others_exclude_self() {
        for door in Door::all() {
            let [a, b] = door.others();
            assert!(a != door && b != door && a != b);
        }
    }

    #[test]
    fn pick_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut counts = [0usize; 3];
        let n = 30_000;
        for _ in 0..n {
            counts[Door::pick(rng).index()] += 1;
        }
        for count in counts {
            let p = count as f64 / n as f64;
            assert!((p - 1. / 3.).abs() < 0.02, "frequency {}", p);
        }
    }
}
