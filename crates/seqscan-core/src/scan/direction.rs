use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Direction
///
/// Canonical traversal direction shared by window resolution, scanning,
/// and page assembly. `Forward` pages are requested with `first`,
/// `Backward` pages with `last`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    #[display("forward")]
    Forward,

    #[display("backward")]
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}
