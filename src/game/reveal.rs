use super::door::Door;
use crate::Error;

/// The state of the stage after the host has opened a door.
///
/// Holds the contestant's pick, the door the host opened, and the one
/// door left closed. All three are distinct by construction, which is
/// what makes switching well defined.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Reveal {
    pick: Door,
    opened: Door,
    closed: Door,
}

impl Reveal {
    /// Only [`Game::reveal`](super::Game::reveal) and the checked
    /// conversion below build reveals, so `opened` is never `pick`.
    pub(super) const fn new(pick: Door, opened: Door, closed: Door) -> Self {
        Self {
            pick,
            opened,
            closed,
        }
    }
    /// The contestant's initial choice.
    pub fn pick(&self) -> Door {
        self.pick
    }
    /// The goat door the host opened.
    pub fn opened(&self) -> Door {
        self.opened
    }
    /// The remaining door, neither picked nor opened.
    pub fn closed(&self) -> Door {
        self.closed
    }
}

/// (pick, opened) isomorphism
impl TryFrom<(Door, Door)> for Reveal {
    type Error = Error;
    fn try_from((pick, opened): (Door, Door)) -> Result<Self, Self::Error> {
        match pick.others() {
            [a, b] if a == opened => Ok(Self::new(pick, a, b)),
            [a, b] if b == opened => Ok(Self::new(pick, b, a)),
            _ => Err(Error::invalid(format!(
                "host cannot open the picked door {}",
                pick
            ))),
        }
    }
}

impl std::fmt::Display for Reveal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "pick {} opened {} closed {}",
            self.pick, self.opened, self.closed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_doors_distinct() {
        for pick in Door::all() {
            for opened in pick.others() {
                let reveal = Reveal::try_from((pick, opened)).unwrap();
                assert_eq!(reveal.pick(), pick);
                assert_eq!(reveal.opened(), opened);
                assert!(reveal.closed() != pick);
                assert!(reveal.closed() != opened);
            }
        }
    }

    #[test]
    fn rejects_opening_the_pick() {
        for door in Door::all() {
            assert!(matches!(
                Reveal::try_from((door, door)),
                Err(Error::InvalidArgument(_))
            ));
        }
    }
}
