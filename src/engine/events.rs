use serde::{Deserialize, Serialize};

use crate::domain::{Board, PitIndex, PlayerIndex, RoundId, SeedCount};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted { round_id: RoundId },

    /// Доска изменилась – снимок для презентера.
    BoardChanged { board: Board },

    /// Игрок посеял семена.
    SeedsSown {
        player: PlayerIndex,
        from_pit: PitIndex,
        seeds: SeedCount,
        last_index: PitIndex,
    },

    /// Сработал захват.
    Captured {
        player: PlayerIndex,
        pit: PitIndex,
        opposite: PitIndex,
        amount: SeedCount,
    },

    /// Последнее семя легло в свой амбар – игрок ходит ещё раз.
    ExtraTurn { player: PlayerIndex },

    /// Ход перешёл к сопернику.
    TurnPassed { next_player: PlayerIndex },

    /// Остаток семян стороны перенесён в амбар (правило SweepToStore).
    RemainderSwept {
        player: PlayerIndex,
        amount: SeedCount,
    },

    /// Раунд завершён. winner = None означает ничью.
    RoundFinished {
        round_id: RoundId,
        score0: SeedCount,
        score1: SeedCount,
        winner: Option<PlayerIndex>,
    },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }
}

impl Default for RoundHistory {
    fn default() -> Self {
        Self::new()
    }
}
