// src/bin/mancala_cli.rs
//
// Интерактивная партия в манкалу для двух игроков за одним терминалом.
// Имена игроков – первые два аргумента командной строки.

use std::io::{self, Write};

use mancala_engine::domain::{Board, PitIndex, PlayerIndex, PlayerProfile, RulesConfig};
use mancala_engine::engine::{
    validate_move, EngineError, MoveChoice, Presenter, RoundEvent, RoundEventKind, TurnProvider,
};
use mancala_engine::session::MatchSession;

/// Буквы лунок в порядке индексов доски; точка – амбар игрока 0,
/// ходом он не выбирается.
const PIT_LETTERS: &str = "abcdef.ghijkl";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let players = [
        PlayerProfile::new(0, args.get(0).map(String::as_str).unwrap_or("Игрок 0")),
        PlayerProfile::new(1, args.get(1).map(String::as_str).unwrap_or("Игрок 1")),
    ];

    let mut session = MatchSession::new(RulesConfig::default());
    let mut provider0 = InteractiveProvider {
        players: players.clone(),
    };
    let mut provider1 = InteractiveProvider {
        players: players.clone(),
    };
    let mut presenter = TerminalPresenter {
        players: players.clone(),
    };

    loop {
        match session.play_round(&mut [&mut provider0, &mut provider1], &mut presenter) {
            Ok(_summary) => {
                if !ask_play_again() {
                    break;
                }
            }
            Err(EngineError::QuitRequested) => break,
            Err(e) => {
                println!("[CLI] Ошибка движка: {e}");
                break;
            }
        }
    }

    println!();
    println!(
        "Спасибо за игру! Счёт матча: {} {} – {} {}, ничьих: {}.",
        players[0].name,
        session.tally.wins[0],
        players[1].name,
        session.tally.wins[1],
        session.tally.ties
    );
}

/// Поставщик ходов с клавиатуры: буква лунки или q для выхода.
/// Сам перепрашивает до тех пор, пока ввод не пройдёт валидацию движка.
struct InteractiveProvider {
    players: [PlayerProfile; 2],
}

impl TurnProvider for InteractiveProvider {
    fn request_move(&mut self, board: &Board, player: PlayerIndex) -> MoveChoice {
        loop {
            println!();
            print!(
                "{}, выберите одну из своих непустых лунок (или q для выхода): ",
                self.players[player as usize].name
            );
            let _ = io::stdout().flush();

            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return MoveChoice::Quit;
            }
            let selection = line.trim().to_lowercase();

            if selection == "q" {
                return MoveChoice::Quit;
            }
            if selection.chars().count() != 1
                || !selection.chars().all(|c| c.is_ascii_alphabetic())
            {
                println!("Введите одну букву.");
                continue;
            }

            let pit = match PIT_LETTERS.find(&selection) {
                Some(idx) => idx as PitIndex,
                None => {
                    println!("Введите букву, соответствующую одной из ваших непустых лунок.");
                    continue;
                }
            };

            match validate_move(board, pit, player) {
                Ok(()) => return MoveChoice::Pit(pit),
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            }
        }
    }
}

/// Терминальный презентер: печатает доску и объявляет события раунда.
struct TerminalPresenter {
    players: [PlayerProfile; 2],
}

impl Presenter for TerminalPresenter {
    fn notify(&mut self, event: &RoundEvent) {
        match &event.kind {
            RoundEventKind::RoundStarted { round_id } => {
                println!();
                println!("================ РАУНД {round_id} ================");
            }
            RoundEventKind::BoardChanged { board } => self.print_board(board),
            RoundEventKind::Captured {
                player,
                pit,
                opposite,
                amount,
            } => {
                println!(
                    "{} захватывает {} семян из лунок {} и {}!",
                    self.players[*player as usize].name,
                    amount,
                    pit_letter(*pit),
                    pit_letter(*opposite)
                );
            }
            RoundEventKind::ExtraTurn { player } => {
                println!(
                    "{} получает дополнительный ход!",
                    self.players[*player as usize].name
                );
            }
            RoundEventKind::RoundFinished {
                score0,
                score1,
                winner,
                ..
            } => {
                println!();
                match winner {
                    Some(w) => println!(
                        "{} выигрывает со счётом {} : {}.",
                        self.players[*w as usize].name,
                        score0.max(score1),
                        score0.min(score1)
                    ),
                    None => println!("Ничья, {score0} : {score1}!"),
                }
            }
            // посев и смена хода видны по самой доске
            RoundEventKind::SeedsSown { .. }
            | RoundEventKind::TurnPassed { .. }
            | RoundEventKind::RemainderSwept { .. } => {}
        }
    }
}

impl TerminalPresenter {
    fn print_board(&self, board: &Board) {
        let p = &board.pits;
        println!();
        println!("   ↓  f  e  d  c  b  a  ←  {}", self.players[0].name);
        println!(
            "  {:>2} {:>2} {:>2} {:>2} {:>2} {:>2} {:>2}",
            p[6], p[5], p[4], p[3], p[2], p[1], p[0]
        );
        println!("  ------------------------");
        println!(
            "     {:>2} {:>2} {:>2} {:>2} {:>2} {:>2} {:>2}",
            p[7], p[8], p[9], p[10], p[11], p[12], p[13]
        );
        println!("{}  →  g  h  i  j  k  l  ↑", self.players[1].name);
    }
}

fn pit_letter(pit: PitIndex) -> char {
    PIT_LETTERS.chars().nth(pit as usize).unwrap_or('?')
}

fn ask_play_again() -> bool {
    loop {
        println!();
        print!("Сыграем ещё раунд (y/n)? ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        match line.trim().to_lowercase().chars().next() {
            Some('y') => return true,
            Some('n') => return false,
            _ => println!("Введите 'y' или 'n'."),
        }
    }
}
