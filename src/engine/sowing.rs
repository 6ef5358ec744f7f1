use crate::domain::{Board, PitIndex, PlayerIndex, BOARD_SIZE};

/// Посев: забрать все семена из лунки и разложить по одному в следующие
/// лунки по кругу, пропуская амбар соперника на каждом витке.
///
/// Возвращает индекс лунки, получившей последнее семя, – от него зависят
/// дополнительный ход и захват.
pub fn distribute_seeds(board: &mut Board, pit: PitIndex, player: PlayerIndex) -> PitIndex {
    let skip = Board::opponent_store(player);
    let mut remaining = board.pits[pit as usize];
    debug_assert!(remaining > 0, "посев из пустой лунки – нарушение контракта");

    board.pits[pit as usize] = 0;

    let mut idx = pit;
    while remaining > 0 {
        idx = (idx + 1) % BOARD_SIZE as PitIndex;
        if idx == skip {
            // чужой амбар семян не получает и семя не расходует
            continue;
        }
        board.pits[idx as usize] += 1;
        remaining -= 1;
    }

    idx
}
