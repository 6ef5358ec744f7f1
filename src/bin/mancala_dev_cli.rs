// src/bin/mancala_dev_cli.rs
//
// Dev-CLI движка: скриптованный показ правил + детерминированные случайные
// раунды с проверкой сохранения семян.

use mancala_engine::api::{build_board_view, map_round_summary};
use mancala_engine::domain::{PitIndex, PlayerIndex, RulesConfig, ScoringRule, TOTAL_SEEDS};
use mancala_engine::engine::{
    MoveChoice, NullPresenter, RandomProvider, RoundEngine, RoundStatus, SowMove, TurnProvider,
};
use mancala_engine::infra::rng::DeterministicRng;
use mancala_engine::session::MatchSession;

fn main() {
    println!("mancala_dev_cli: стартуем dev-CLI движка манкалы…");

    scripted_showcase();

    println!();
    println!("================ RANDOM ROUNDS (CountSides) =================");
    play_random_rounds(RulesConfig::default(), "CountSides", 5, 100);

    println!();
    println!("================ RANDOM ROUNDS (SweepToStore) =================");
    play_random_rounds(
        RulesConfig {
            scoring: ScoringRule::SweepToStore,
        },
        "SweepToStore",
        5,
        200,
    );

    println!("[CLI] Завершение работы dev-CLI.");
}

/// Скриптованное начало раунда: дополнительный ход, смена игроков,
/// затем доигрывание случайным ботом и JSON итога.
fn scripted_showcase() {
    println!();
    println!("================ SCRIPTED ROUND =================");

    let mut engine = RoundEngine::start(RulesConfig::default(), 1);
    debug_print_round_state(&engine);

    // (0,2) попадает в свой амбар – дополнительный ход
    let opening: &[(PlayerIndex, PitIndex)] = &[(0, 2), (0, 5), (1, 10), (0, 1), (0, 0)];

    for &(player, pit) in opening {
        println!("[CLI] ход: игрок {player}, лунка {pit}");
        match engine.apply_move(SowMove { player, pit }) {
            Ok(RoundStatus::Ongoing) => debug_print_round_state(&engine),
            Ok(RoundStatus::Finished(summary, _)) => {
                println!("[CLI] раунд неожиданно завершился: {summary:?}");
                return;
            }
            Err(e) => {
                println!("[CLI] ОШИБКА в apply_move: {e}");
                return;
            }
        }
    }

    // Доигрываем случайным ботом до конца раунда.
    let mut bot = RandomProvider::new(DeterministicRng::from_seed(7));
    loop {
        let player = engine.current_player;
        let pit = match bot.request_move(&engine.board, player) {
            MoveChoice::Quit => {
                println!("[CLI] BUG: у бота нет ходов, хотя раунд не завершён.");
                return;
            }
            MoveChoice::Pit(pit) => pit,
        };

        match engine.apply_move(SowMove { player, pit }) {
            Ok(RoundStatus::Ongoing) => {}
            Ok(RoundStatus::Finished(summary, history)) => {
                println!("=== РАУНД ЗАВЕРШЁН ===");
                println!("[CLI] событий в истории: {}", history.events.len());
                let dto = map_round_summary(&summary);
                match serde_json::to_string_pretty(&dto) {
                    Ok(js) => println!("{js}"),
                    Err(e) => println!("[CLI] ОШИБКА сериализации итога: {e}"),
                }
                return;
            }
            Err(e) => {
                println!("[CLI] ОШИБКА в apply_move (бот): {e}");
                return;
            }
        }
    }
}

/// Несколько случайных раундов в одной сессии с проверкой инварианта
/// сохранения семян и печатью итоговой статистики.
fn play_random_rounds(rules: RulesConfig, label: &str, rounds: u32, seed_base: u64) {
    let mut session = MatchSession::new(rules);
    let mut presenter = NullPresenter;

    for i in 0..rounds {
        let mut p0 = RandomProvider::new(DeterministicRng::from_seed(seed_base + u64::from(i)));
        let mut p1 =
            RandomProvider::new(DeterministicRng::from_seed(seed_base + 1000 + u64::from(i)));

        match session.play_round(&mut [&mut p0, &mut p1], &mut presenter) {
            Ok(summary) => {
                if summary.final_board.total_seeds() != TOTAL_SEEDS {
                    println!(
                        "[CLI] BUG: на доске {} семян вместо {} (round_id={})",
                        summary.final_board.total_seeds(),
                        TOTAL_SEEDS,
                        summary.round_id
                    );
                }
                println!(
                    "[CLI] round_id={} счёт {}:{} победитель={:?}",
                    summary.round_id, summary.scores[0], summary.scores[1], summary.winner
                );
            }
            Err(e) => println!("[CLI] ОШИБКА в play_round: {e:?}"),
        }
    }

    println!(
        "[CLI] Итог {}: wins={:?} ties={} rounds={}",
        label, session.tally.wins, session.tally.ties, session.tally.rounds_played
    );
}

/// Печать состояния раунда через API-слой (DTO).
fn debug_print_round_state(engine: &RoundEngine) {
    let dto = build_board_view(engine);
    println!("================ ROUND STATE ================");
    println!(
        "round_id={} current_player={:?} round_over={}",
        dto.round_id, dto.current_player, dto.round_over
    );
    println!(
        "  игрок 0: лунки {:?} амбар {}",
        dto.pits_player0, dto.store_player0
    );
    println!(
        "  игрок 1: лунки {:?} амбар {}",
        dto.pits_player1, dto.store_player1
    );
    println!("=============================================");
}
