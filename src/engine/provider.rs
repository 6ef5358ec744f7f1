use std::collections::VecDeque;

use crate::domain::{Board, PitIndex, PlayerIndex, PITS_PER_SIDE};
use crate::engine::RandomSource;

/// Ответ поставщика ходов.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveChoice {
    Pit(PitIndex),
    /// Немедленно прервать раунд без дальнейших мутаций.
    Quit,
}

/// Поставщик ходов: интерактивный ввод, скрипт для тестов, бот.
///
/// Движок блокируется на этом вызове, пока ход не получен. Возвращённая
/// лунка всё равно проходит валидацию – движок не доверяет поставщику.
pub trait TurnProvider {
    fn request_move(&mut self, board: &Board, player: PlayerIndex) -> MoveChoice;
}

/// Скриптованный поставщик для тестов: отдаёт заранее заданные лунки,
/// после исчерпания скрипта – Quit.
pub struct ScriptedProvider {
    moves: VecDeque<PitIndex>,
}

impl ScriptedProvider {
    pub fn new(moves: impl IntoIterator<Item = PitIndex>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }
}

impl TurnProvider for ScriptedProvider {
    fn request_move(&mut self, _board: &Board, _player: PlayerIndex) -> MoveChoice {
        match self.moves.pop_front() {
            Some(pit) => MoveChoice::Pit(pit),
            None => MoveChoice::Quit,
        }
    }
}

/// Случайный поставщик: выбирает случайную непустую лунку своей стороны.
/// Используется в dev-CLI и стресс-тестах, сам ничего не мутирует.
pub struct RandomProvider<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> RandomProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> TurnProvider for RandomProvider<R> {
    fn request_move(&mut self, board: &Board, player: PlayerIndex) -> MoveChoice {
        let first = Board::first_pit(player);
        let mut candidates: Vec<PitIndex> = (first..first + PITS_PER_SIDE as PitIndex)
            .filter(|&pit| board.seeds(pit) > 0)
            .collect();

        if candidates.is_empty() {
            // Сторона пуста – раунд уже должен был завершиться.
            return MoveChoice::Quit;
        }

        self.rng.shuffle(&mut candidates);
        MoveChoice::Pit(candidates[0])
    }
}
