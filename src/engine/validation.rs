use crate::domain::{Board, PitIndex, PlayerIndex};
use crate::engine::errors::EngineError;

/// Проверка, может ли игрок сделать ход из этой лунки.
///
/// Никаких побочных эффектов: при отказе доска гарантированно не изменена,
/// повторный запрос хода – ответственность вызывающего кода.
pub fn validate_move(
    board: &Board,
    pit: PitIndex,
    player: PlayerIndex,
) -> Result<(), EngineError> {
    if Board::is_store(pit) {
        return Err(EngineError::StoreSelected(pit));
    }

    if !Board::is_own_pit(pit, player) {
        return Err(EngineError::ForeignPit { pit, player });
    }

    if board.seeds(pit) == 0 {
        return Err(EngineError::EmptyPit(pit));
    }

    Ok(())
}
