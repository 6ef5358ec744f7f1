//! Движок манкалы: валидация хода, посев, захват, жизненный цикл раунда.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `RoundEngine::start` – начать новый раунд
//!   - `RoundEngine::apply_move` – применить ход игрока
//!
//! Внешние швы: `TurnProvider` поставляет ходы, `Presenter` получает события.

pub mod actions;
pub mod capture;
pub mod errors;
pub mod events;
pub mod presenter;
pub mod provider;
pub mod round;
pub mod sowing;
pub mod validation;

pub use actions::SowMove;
pub use capture::{check_capture, CaptureOutcome};
pub use errors::EngineError;
pub use events::{RoundEvent, RoundEventKind, RoundHistory};
pub use presenter::{NullPresenter, Presenter};
pub use provider::{MoveChoice, RandomProvider, ScriptedProvider, TurnProvider};
pub use round::{
    compute_scores, round_is_over, winner_of, RoundEngine, RoundPhase, RoundStatus, RoundSummary,
};
pub use sowing::distribute_seeds;
pub use validation::validate_move;

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
