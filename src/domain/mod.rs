//! Доменная модель манкалы: доска, игроки, правила раунда.

pub mod board;
pub mod player;
pub mod rules;

// Базовые индексы и счётчики.
pub type PlayerIndex = u8;
pub type PitIndex = u8;
pub type SeedCount = u32;
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Board и т.п.
pub use board::*;
pub use player::*;
pub use rules::*;
