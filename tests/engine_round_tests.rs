// tests/engine_round_tests.rs
//
// Жизненный цикл раунда (§ RoundEngine):
//  - старт: каноническая доска, первым ходит игрок 0;
//  - смена хода и дополнительный ход при попадании в свой амбар;
//  - проверка очереди хода;
//  - недопустимый выбор не мутирует доску;
//  - конец раунда и подсчёт очков в обоих вариантах правила;
//  - сценарии из контрактных примеров.

use mancala_engine::domain::{
    Board, RulesConfig, ScoringRule, BOARD_SIZE, INITIAL_LAYOUT, TOTAL_SEEDS,
};
use mancala_engine::engine::{
    compute_scores, round_is_over, winner_of, EngineError, RoundEngine, RoundEventKind,
    RoundPhase, RoundStatus, SowMove,
};

fn board_from(pits: [u32; BOARD_SIZE]) -> Board {
    Board { pits }
}

fn started_engine() -> RoundEngine {
    RoundEngine::start(RulesConfig::default(), 1)
}

#[test]
fn start_resets_board_and_gives_turn_to_player_0() {
    let engine = started_engine();

    assert_eq!(engine.board.pits, INITIAL_LAYOUT);
    assert_eq!(engine.current_player, 0);
    assert_eq!(engine.phase, RoundPhase::InProgress);
    assert_eq!(engine.board.total_seeds(), TOTAL_SEEDS);

    // история начинается со старта раунда и снимка доски
    assert!(matches!(
        engine.history.events[0].kind,
        RoundEventKind::RoundStarted { round_id: 1 }
    ));
    assert!(matches!(
        engine.history.events[1].kind,
        RoundEventKind::BoardChanged { .. }
    ));
}

#[test]
fn opening_move_sows_and_passes_turn() {
    let mut engine = started_engine();

    let status = engine
        .apply_move(SowMove { player: 0, pit: 0 })
        .expect("ход корректен");

    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(
        engine.board.pits,
        [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0]
    );
    assert_eq!(engine.current_player, 1, "ход должен перейти к сопернику");

    let events = &engine.history.events;
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::TurnPassed { next_player: 1 })));
    assert!(!events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::ExtraTurn { .. })));
    assert!(!events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::Captured { .. })));
}

#[test]
fn landing_in_own_store_grants_extra_turn() {
    let mut engine = started_engine();
    engine.board = board_from([1, 0, 0, 0, 0, 1, 0, 4, 4, 4, 4, 4, 4, 0]);

    // одно семя из лунки 5 доходит ровно до своего амбара
    let status = engine
        .apply_move(SowMove { player: 0, pit: 5 })
        .expect("ход корректен");

    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(engine.current_player, 0, "игрок ходит ещё раз");
    assert_eq!(engine.board.pits[6], 1);
    assert!(engine
        .history
        .events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::ExtraTurn { player: 0 })));
    // амбар исключён из захвата, даже если в нём теперь ровно одно семя
    assert!(!engine
        .history
        .events
        .iter()
        .any(|e| matches!(e.kind, RoundEventKind::Captured { .. })));
}

#[test]
fn move_out_of_turn_is_rejected() {
    let mut engine = started_engine();

    match engine.apply_move(SowMove { player: 1, pit: 7 }) {
        Err(EngineError::NotPlayersTurn(player)) => assert_eq!(player, 1),
        _ => panic!("ожидали NotPlayersTurn"),
    }
    assert_eq!(engine.board.pits, INITIAL_LAYOUT);
}

#[test]
fn invalid_selection_leaves_state_untouched() {
    let mut engine = started_engine();

    assert!(matches!(
        engine.apply_move(SowMove { player: 0, pit: 6 }),
        Err(EngineError::StoreSelected(6))
    ));
    assert!(matches!(
        engine.apply_move(SowMove { player: 0, pit: 9 }),
        Err(EngineError::ForeignPit { .. })
    ));

    assert_eq!(engine.board.pits, INITIAL_LAYOUT);
    assert_eq!(engine.current_player, 0);
    assert_eq!(engine.phase, RoundPhase::InProgress);

    // после отказов корректный ход по-прежнему проходит
    assert!(engine.apply_move(SowMove { player: 0, pit: 0 }).is_ok());
}

#[test]
fn capture_is_applied_inside_a_move() {
    let mut engine = started_engine();
    engine.board = board_from([2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 5, 0, 0, 0]);

    let status = engine
        .apply_move(SowMove { player: 0, pit: 0 })
        .expect("ход корректен");

    assert!(matches!(status, RoundStatus::Ongoing));
    assert_eq!(engine.board.pits[6], 6, "1 своё семя + 5 напротив");
    assert_eq!(engine.board.pits[2], 0);
    assert_eq!(engine.board.pits[10], 0);
    assert!(engine.history.events.iter().any(|e| matches!(
        e.kind,
        RoundEventKind::Captured {
            player: 0,
            pit: 2,
            opposite: 10,
            amount: 6,
        }
    )));
}

#[test]
fn round_ends_when_one_side_is_empty_count_sides() {
    let mut engine = started_engine();
    engine.board = board_from([0, 0, 0, 0, 0, 1, 21, 1, 1, 1, 1, 1, 1, 20]);

    let status = engine
        .apply_move(SowMove { player: 0, pit: 5 })
        .expect("ход корректен");

    match status {
        RoundStatus::Finished(summary, history) => {
            assert_eq!(summary.scores, [22, 26]);
            assert_eq!(summary.winner, Some(1));
            // CountSides: остаток соперника остаётся в его лунках
            assert_eq!(summary.final_board.pits[13], 20);
            for pit in 7..=12 {
                assert_eq!(summary.final_board.pits[pit], 1);
            }
            assert!(history.events.iter().any(|e| matches!(
                e.kind,
                RoundEventKind::RoundFinished {
                    score0: 22,
                    score1: 26,
                    winner: Some(1),
                    ..
                }
            )));
            assert!(!history
                .events
                .iter()
                .any(|e| matches!(e.kind, RoundEventKind::RemainderSwept { .. })));
        }
        RoundStatus::Ongoing => panic!("раунд должен был завершиться"),
    }

    assert_eq!(engine.phase, RoundPhase::Over);
    assert!(matches!(
        engine.apply_move(SowMove { player: 1, pit: 7 }),
        Err(EngineError::NoActiveRound)
    ));
}

#[test]
fn round_end_with_sweep_moves_remainder_into_store() {
    let mut engine = RoundEngine::start(
        RulesConfig {
            scoring: ScoringRule::SweepToStore,
        },
        1,
    );
    engine.board = board_from([0, 0, 0, 0, 0, 1, 21, 1, 1, 1, 1, 1, 1, 20]);

    let status = engine
        .apply_move(SowMove { player: 0, pit: 5 })
        .expect("ход корректен");

    match status {
        RoundStatus::Finished(summary, history) => {
            // итоговые суммы совпадают с CountSides, отличается лишь доска
            assert_eq!(summary.scores, [22, 26]);
            assert_eq!(summary.winner, Some(1));
            assert_eq!(summary.final_board.pits[13], 26);
            for pit in 7..=12 {
                assert_eq!(summary.final_board.pits[pit], 0);
            }
            assert_eq!(summary.final_board.total_seeds(), TOTAL_SEEDS);
            assert!(history.events.iter().any(|e| matches!(
                e.kind,
                RoundEventKind::RemainderSwept {
                    player: 1,
                    amount: 6,
                }
            )));
        }
        RoundStatus::Ongoing => panic!("раунд должен был завершиться"),
    }
}

#[test]
fn scoring_of_a_terminal_board() {
    let board = board_from([0, 0, 0, 0, 0, 0, 20, 3, 2, 1, 0, 0, 0, 22]);

    assert!(round_is_over(&board));
    let scores = compute_scores(&board);
    assert_eq!(scores, [20, 28]);
    assert_eq!(winner_of(&scores), Some(1));
}

#[test]
fn game_over_detection() {
    assert!(round_is_over(&board_from([
        0, 0, 0, 0, 0, 0, 22, 1, 1, 1, 1, 1, 1, 21
    ])));
    assert!(round_is_over(&board_from([
        1, 1, 1, 1, 1, 1, 21, 0, 0, 0, 0, 0, 0, 22
    ])));
    // семя в одной лунке – раунд продолжается, амбары не в счёт
    assert!(!round_is_over(&board_from([
        1, 0, 0, 0, 0, 0, 23, 1, 0, 0, 0, 0, 0, 23
    ])));
    assert!(!round_is_over(&Board::initial()));
}

#[test]
fn equal_scores_mean_a_tie() {
    assert_eq!(winner_of(&[24, 24]), None);
    assert_eq!(winner_of(&[30, 18]), Some(0));
    assert_eq!(winner_of(&[18, 30]), Some(1));
}
