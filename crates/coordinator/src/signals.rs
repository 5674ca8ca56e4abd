use serde::{Deserialize, Serialize};
use shared::domain::{Road, SignalColor, SignalHead};

/// Colors of all four signal heads, replaced as a whole on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignalHeadStates {
    west: SignalColor,
    east: SignalColor,
    north: SignalColor,
    south: SignalColor,
}

impl SignalHeadStates {
    pub const fn all_red() -> Self {
        Self {
            west: SignalColor::Red,
            east: SignalColor::Red,
            north: SignalColor::Red,
            south: SignalColor::Red,
        }
    }

    /// All heads red except the one owning `approach`. The intersection owns
    /// no head, so granting it leaves everything red.
    pub fn granting(approach: Road) -> Self {
        match SignalHead::for_approach(approach) {
            Some(head) => Self::all_red().with(head, SignalColor::Green),
            None => Self::all_red(),
        }
    }

    pub fn get(&self, head: SignalHead) -> SignalColor {
        match head {
            SignalHead::WestApproach => self.west,
            SignalHead::EastApproach => self.east,
            SignalHead::NorthApproach => self.north,
            SignalHead::SouthApproach => self.south,
        }
    }

    #[must_use]
    pub fn with(mut self, head: SignalHead, color: SignalColor) -> Self {
        let slot = match head {
            SignalHead::WestApproach => &mut self.west,
            SignalHead::EastApproach => &mut self.east,
            SignalHead::NorthApproach => &mut self.north,
            SignalHead::SouthApproach => &mut self.south,
        };
        *slot = color;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (SignalHead, SignalColor)> + '_ {
        SignalHead::ALL.into_iter().map(|head| (head, self.get(head)))
    }

    pub fn green_heads(&self) -> impl Iterator<Item = SignalHead> + '_ {
        self.iter()
            .filter(|(_, color)| *color == SignalColor::Green)
            .map(|(head, _)| head)
    }

    pub fn is_all_red(&self) -> bool {
        self.iter().all(|(_, color)| color == SignalColor::Red)
    }
}

#[cfg(test)]
#[path = "tests/signals_tests.rs"]
mod tests;
