/// Direction of travel around the ring of slide indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Decreasing index, wrapping from 0 to the last slide.
    Backward,
    /// Already at the destination.
    Stay,
    /// Increasing index, wrapping from the last slide to 0.
    Forward,
}

impl Direction {
    /// Signed index delta for this direction: -1, 0 or +1.
    pub const fn offset(self) -> i64 {
        match self {
            Direction::Backward => -1,
            Direction::Stay => 0,
            Direction::Forward => 1,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.offset())
    }
}

/// A relative move requested by a previous/next affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    pub const fn direction(self) -> Direction {
        match self {
            Step::Previous => Direction::Backward,
            Step::Next => Direction::Forward,
        }
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        step.direction()
    }
}
