use serde::{Deserialize, Serialize};

use crate::domain::player::opponent;
use crate::domain::{PitIndex, PlayerIndex, SeedCount};

/// Количество лунок на доске, включая оба амбара.
pub const BOARD_SIZE: usize = 14;

/// Индекс амбара игрока 0.
pub const STORE_0: PitIndex = 6;

/// Индекс амбара игрока 1.
pub const STORE_1: PitIndex = 13;

/// Игровых лунок у каждого игрока.
pub const PITS_PER_SIDE: usize = 6;

/// Всего семян на доске в начале раунда.
pub const TOTAL_SEEDS: SeedCount = 48;

/// Каноническая стартовая раскладка: по 4 семени в каждой игровой лунке.
pub const INITIAL_LAYOUT: [SeedCount; BOARD_SIZE] = [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0];

/// Доска манкалы: 14 лунок.
///
/// Индексы 0–5 – лунки игрока 0, 6 – его амбар;
/// индексы 7–12 – лунки игрока 1, 13 – его амбар.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub pits: [SeedCount; BOARD_SIZE],
}

impl Board {
    /// Доска в стартовой раскладке.
    pub fn initial() -> Self {
        Self {
            pits: INITIAL_LAYOUT,
        }
    }

    /// Индекс амбара игрока.
    pub fn store(player: PlayerIndex) -> PitIndex {
        if player == 0 {
            STORE_0
        } else {
            STORE_1
        }
    }

    /// Индекс амбара соперника – именно его пропускает посев.
    pub fn opponent_store(player: PlayerIndex) -> PitIndex {
        Self::store(opponent(player))
    }

    /// Первая лунка на стороне игрока (0 или 7).
    pub fn first_pit(player: PlayerIndex) -> PitIndex {
        if player == 0 {
            0
        } else {
            7
        }
    }

    /// Является ли индекс амбаром.
    pub fn is_store(pit: PitIndex) -> bool {
        pit == STORE_0 || pit == STORE_1
    }

    /// Принадлежит ли лунка игроку.
    /// Амбар входит в диапазон владения, но ходом он не выбирается –
    /// это отдельная проверка в validate_move.
    pub fn is_own_pit(pit: PitIndex, player: PlayerIndex) -> bool {
        let first = Self::first_pit(player);
        first <= pit && pit <= first + PITS_PER_SIDE as PitIndex
    }

    /// Семян в лунке.
    pub fn seeds(&self, pit: PitIndex) -> SeedCount {
        self.pits[pit as usize]
    }

    /// Сумма по шести игровым лункам игрока (без амбара).
    /// Ноль означает конец раунда.
    pub fn side_pits_sum(&self, player: PlayerIndex) -> SeedCount {
        let first = Self::first_pit(player) as usize;
        self.pits[first..first + PITS_PER_SIDE].iter().sum()
    }

    /// Сумма по всей стороне игрока: лунки + амбар. Это и есть его счёт.
    pub fn side_total(&self, player: PlayerIndex) -> SeedCount {
        let first = Self::first_pit(player) as usize;
        self.pits[first..first + PITS_PER_SIDE + 1].iter().sum()
    }

    /// Всего семян на доске. Инвариант: операции движка его не меняют.
    pub fn total_seeds(&self) -> SeedCount {
        self.pits.iter().sum()
    }
}
