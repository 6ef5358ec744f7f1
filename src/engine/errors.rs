use crate::domain::{PitIndex, PlayerIndex};

use thiserror::Error;

/// Ошибки движка манкалы.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Нельзя выбрать амбар (лунка {0})")]
    StoreSelected(PitIndex),

    #[error("Лунка {pit} не принадлежит игроку {player}")]
    ForeignPit { pit: PitIndex, player: PlayerIndex },

    #[error("Лунка {0} пуста")]
    EmptyPit(PitIndex),

    #[error("Сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerIndex),

    #[error("Нет активного раунда")]
    NoActiveRound,

    #[error("Игрок запросил выход")]
    QuitRequested,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

impl EngineError {
    /// Это ошибка выбора лунки? Такие ошибки локально восстановимы:
    /// доска не изменена, драйвер просто запрашивает ход заново.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self,
            EngineError::StoreSelected(_)
                | EngineError::ForeignPit { .. }
                | EngineError::EmptyPit(_)
        )
    }
}
