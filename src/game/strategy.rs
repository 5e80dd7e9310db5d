use super::door::Door;
use super::reveal::Reveal;
use crate::Arbitrary;

/// The contestant's second decision, made after the host opens a door.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Strategy {
    /// Keep the initial pick.
    Stay,
    /// Move to the one door that is neither picked nor opened.
    Switch,
}

impl Strategy {
    /// Both strategies in table-row order.
    pub const fn all() -> [Self; 2] {
        [Self::Stay, Self::Switch]
    }
    pub const fn stays(&self) -> bool {
        matches!(self, Self::Stay)
    }
    /// The contestant's final door under this strategy.
    pub fn choose(&self, reveal: &Reveal) -> Door {
        match self {
            Self::Stay => reveal.pick(),
            Self::Switch => reveal.closed(),
        }
    }
}

/// stay flag isomorphism
impl From<bool> for Strategy {
    fn from(stay: bool) -> Self {
        if stay { Self::Stay } else { Self::Switch }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Stay => f.pad("STAY"),
            Self::Switch => f.pad("SWITCH"),
        }
    }
}

impl Arbitrary for Strategy {
    fn random() -> Self {
        Self::from(rand::random::<bool>())
    }
}
