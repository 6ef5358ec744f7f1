use serde::{Deserialize, Serialize};

use crate::domain::{Board, PlayerIndex, RoundId, SeedCount, PITS_PER_SIDE, STORE_0, STORE_1};
use crate::engine::{RoundEngine, RoundPhase, RoundSummary};

/// DTO доски – снимок для фронта/CLI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardViewDto {
    pub round_id: RoundId,
    pub pits_player0: Vec<SeedCount>,
    pub store_player0: SeedCount,
    pub pits_player1: Vec<SeedCount>,
    pub store_player1: SeedCount,
    /// Чей сейчас ход; None – раунд завершён.
    pub current_player: Option<PlayerIndex>,
    pub round_over: bool,
}

/// DTO итога раунда.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundResultDto {
    pub round_id: RoundId,
    pub score_player0: SeedCount,
    pub score_player1: SeedCount,
    /// None – ничья.
    pub winner: Option<PlayerIndex>,
}

/// Снимок текущего состояния раунда.
pub fn build_board_view(engine: &RoundEngine) -> BoardViewDto {
    let over = engine.phase == RoundPhase::Over;

    BoardViewDto {
        round_id: engine.round_id,
        pits_player0: side_pits(&engine.board, 0),
        store_player0: engine.board.pits[STORE_0 as usize],
        pits_player1: side_pits(&engine.board, 1),
        store_player1: engine.board.pits[STORE_1 as usize],
        current_player: if over { None } else { Some(engine.current_player) },
        round_over: over,
    }
}

/// Преобразование итога раунда в DTO.
pub fn map_round_summary(summary: &RoundSummary) -> RoundResultDto {
    RoundResultDto {
        round_id: summary.round_id,
        score_player0: summary.scores[0],
        score_player1: summary.scores[1],
        winner: summary.winner,
    }
}

fn side_pits(board: &Board, player: PlayerIndex) -> Vec<SeedCount> {
    let first = Board::first_pit(player) as usize;
    board.pits[first..first + PITS_PER_SIDE].to_vec()
}
