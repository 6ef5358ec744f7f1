use serde::{Deserialize, Serialize};

use crate::domain::{PitIndex, PlayerIndex};

/// Ход игрока: из какой лунки сеять.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SowMove {
    pub player: PlayerIndex,
    pub pit: PitIndex,
}
