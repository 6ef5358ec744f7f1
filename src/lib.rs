//! Движок манкалы (вариант «калах»).
//!
//! Вся игровая логика собрана здесь: валидация хода, посев семян, захват,
//! жизненный цикл раунда и подсчёт очков. Терминальный вывод и ввод – дело
//! внешних коллабораторов за двумя швами: `TurnProvider` (откуда брать ходы)
//! и `Presenter` (куда отдавать события).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod session;

pub use domain::{Board, PitIndex, PlayerIndex, RoundId, RulesConfig, ScoringRule, SeedCount};
pub use engine::{
    EngineError, MoveChoice, Presenter, RoundEngine, RoundStatus, RoundSummary, SowMove,
    TurnProvider,
};
pub use session::{MatchSession, MatchTally};
