use serde::{Deserialize, Serialize};

use crate::domain::PlayerIndex;

/// Соперник игрока (0 <-> 1).
pub fn opponent(player: PlayerIndex) -> PlayerIndex {
    1 - player
}

/// Базовый профиль игрока – то, что не зависит от конкретного раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub index: PlayerIndex,
    pub name: String,
}

impl PlayerProfile {
    pub fn new(index: PlayerIndex, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
        }
    }
}
