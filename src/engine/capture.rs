use serde::{Deserialize, Serialize};

use crate::domain::{Board, PitIndex, PlayerIndex, SeedCount};

/// Результат сработавшего захвата – для истории раунда и тестов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub player: PlayerIndex,
    /// Лунка, в которую легло последнее семя.
    pub pit: PitIndex,
    /// Лунка соперника напротив (12 - pit).
    pub opposite: PitIndex,
    /// Сколько семян ушло в амбар (своё семя + содержимое противоположной лунки).
    pub amount: SeedCount,
}

/// Проверка и применение захвата после посева.
///
/// Захват срабатывает, только если последнее семя легло в собственную
/// игровую лунку игрока и она теперь содержит ровно одно семя
/// (т.е. до посева была пустой). Иначе – None и доска не меняется.
pub fn check_capture(
    board: &mut Board,
    last: PitIndex,
    player: PlayerIndex,
) -> Option<CaptureOutcome> {
    if !Board::is_own_pit(last, player) || Board::is_store(last) || board.seeds(last) != 1 {
        return None;
    }

    let opposite = 12 - last;
    let amount = board.pits[last as usize] + board.pits[opposite as usize];
    let store = Board::store(player) as usize;

    board.pits[store] += amount;
    board.pits[last as usize] = 0;
    board.pits[opposite as usize] = 0;

    Some(CaptureOutcome {
        player,
        pit: last,
        opposite,
        amount,
    })
}
