use serde::{Deserialize, Serialize};

use crate::domain::player::opponent;
use crate::domain::{
    Board, PlayerIndex, RoundId, RulesConfig, ScoringRule, SeedCount, PITS_PER_SIDE,
};
use crate::engine::actions::SowMove;
use crate::engine::capture::check_capture;
use crate::engine::errors::EngineError;
use crate::engine::events::{RoundEventKind, RoundHistory};
use crate::engine::sowing::distribute_seeds;
use crate::engine::validation::validate_move;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    NotStarted,
    InProgress,
    Over,
}

/// Статус раунда для внешнего кода.
pub enum RoundStatus {
    Ongoing,
    Finished(RoundSummary, RoundHistory),
}

/// Итог завершённого раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundSummary {
    pub round_id: RoundId,
    pub scores: [SeedCount; 2],
    /// None – ничья.
    pub winner: Option<PlayerIndex>,
    pub final_board: Board,
}

/// Состояние одного раунда: доска, чей ход, фаза, история.
///
/// Раунд единолично владеет доской на всё время жизни; никакой другой
/// код её не мутирует.
pub struct RoundEngine {
    pub round_id: RoundId,
    pub board: Board,
    pub current_player: PlayerIndex,
    pub phase: RoundPhase,
    pub rules: RulesConfig,
    pub history: RoundHistory,
}

impl RoundEngine {
    /// Старт нового раунда: каноническая доска, первым ходит игрок 0.
    pub fn start(rules: RulesConfig, round_id: RoundId) -> Self {
        let board = Board::initial();
        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted { round_id });
        history.push(RoundEventKind::BoardChanged {
            board: board.clone(),
        });

        Self {
            round_id,
            board,
            current_player: 0,
            phase: RoundPhase::InProgress,
            rules,
            history,
        }
    }

    /// Применить ход игрока: валидация, посев, захват, проверка конца
    /// раунда, смена хода (или дополнительный ход при попадании в свой амбар).
    ///
    /// Недопустимый выбор лунки возвращается ошибкой до любой мутации доски.
    pub fn apply_move(&mut self, mv: SowMove) -> Result<RoundStatus, EngineError> {
        if self.phase != RoundPhase::InProgress {
            return Err(EngineError::NoActiveRound);
        }
        if mv.player != self.current_player {
            return Err(EngineError::NotPlayersTurn(mv.player));
        }
        validate_move(&self.board, mv.pit, mv.player)?;

        let total_before = self.board.total_seeds();
        let seeds = self.board.seeds(mv.pit);

        let last = distribute_seeds(&mut self.board, mv.pit, mv.player);
        self.history.push(RoundEventKind::SeedsSown {
            player: mv.player,
            from_pit: mv.pit,
            seeds,
            last_index: last,
        });
        self.history.push(RoundEventKind::BoardChanged {
            board: self.board.clone(),
        });

        if let Some(c) = check_capture(&mut self.board, last, mv.player) {
            self.history.push(RoundEventKind::Captured {
                player: c.player,
                pit: c.pit,
                opposite: c.opposite,
                amount: c.amount,
            });
            self.history.push(RoundEventKind::BoardChanged {
                board: self.board.clone(),
            });
        }

        debug_assert_eq!(
            self.board.total_seeds(),
            total_before,
            "посев и захват обязаны сохранять количество семян"
        );

        if round_is_over(&self.board) {
            return Ok(self.finish_round());
        }

        if last == Board::store(mv.player) {
            self.history.push(RoundEventKind::ExtraTurn { player: mv.player });
        } else {
            self.current_player = opponent(mv.player);
            self.history.push(RoundEventKind::TurnPassed {
                next_player: self.current_player,
            });
        }

        Ok(RoundStatus::Ongoing)
    }

    /// Завершение раунда: при SweepToStore остаток семян уходит в амбары,
    /// затем считаются очки и определяется победитель.
    fn finish_round(&mut self) -> RoundStatus {
        if self.rules.scoring == ScoringRule::SweepToStore {
            for player in 0..=1 {
                let first = Board::first_pit(player) as usize;
                let mut amount: SeedCount = 0;
                for i in first..first + PITS_PER_SIDE {
                    amount += self.board.pits[i];
                    self.board.pits[i] = 0;
                }
                if amount > 0 {
                    self.board.pits[Board::store(player) as usize] += amount;
                    self.history
                        .push(RoundEventKind::RemainderSwept { player, amount });
                }
            }
            self.history.push(RoundEventKind::BoardChanged {
                board: self.board.clone(),
            });
        }

        let scores = compute_scores(&self.board);
        let winner = winner_of(&scores);

        self.history.push(RoundEventKind::RoundFinished {
            round_id: self.round_id,
            score0: scores[0],
            score1: scores[1],
            winner,
        });
        self.phase = RoundPhase::Over;

        let summary = RoundSummary {
            round_id: self.round_id,
            scores,
            winner,
            final_board: self.board.clone(),
        };

        RoundStatus::Finished(summary, self.history.clone())
    }
}

/// Раунд окончен, когда все шесть игровых лунок одной из сторон пусты.
/// Содержимое амбаров здесь не учитывается.
pub fn round_is_over(board: &Board) -> bool {
    board.side_pits_sum(0) == 0 || board.side_pits_sum(1) == 0
}

/// Очки обоих игроков: сумма стороны, включая амбар.
pub fn compute_scores(board: &Board) -> [SeedCount; 2] {
    [board.side_total(0), board.side_total(1)]
}

/// Победитель по очкам; None – ничья.
pub fn winner_of(scores: &[SeedCount; 2]) -> Option<PlayerIndex> {
    use std::cmp::Ordering;

    match scores[0].cmp(&scores[1]) {
        Ordering::Greater => Some(0),
        Ordering::Less => Some(1),
        Ordering::Equal => None,
    }
}
