use super::prize::Prize;

/// Whether the contestant's final door hides the car.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Lose,
    Win,
}

impl Outcome {
    /// Both outcomes in table-column order.
    pub const fn all() -> [Self; 2] {
        [Self::Lose, Self::Win]
    }
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
}

impl From<Prize> for Outcome {
    fn from(prize: Prize) -> Self {
        match prize {
            Prize::Car => Self::Win,
            Prize::Goat => Self::Lose,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => f.pad("WIN"),
            Self::Lose => f.pad("LOSE"),
        }
    }
}
