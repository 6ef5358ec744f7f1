use serde::{Deserialize, Serialize};

use crate::domain::RulesConfig;
use crate::engine::{
    EngineError, MoveChoice, Presenter, RoundEngine, RoundStatus, RoundSummary, SowMove,
    TurnProvider,
};
use crate::infra::ids::IdGenerator;

/// Предохранитель от зацикливания раунда (сломанный поставщик ходов и т.п.).
const MAX_STEPS: u32 = 10_000;

/// Счётчик результатов сыгранных раундов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MatchTally {
    pub wins: [u32; 2],
    pub ties: u32,
    pub rounds_played: u32,
}

impl MatchTally {
    pub fn record(&mut self, summary: &RoundSummary) {
        match summary.winner {
            Some(player) => self.wins[player as usize] += 1,
            None => self.ties += 1,
        }
        self.rounds_played += 1;
    }
}

/// Сессия матча: создаёт раунды, гоняет цикл «запросить ход – применить»,
/// ведёт счёт побед.
pub struct MatchSession {
    pub rules: RulesConfig,
    pub tally: MatchTally,
    id_gen: IdGenerator,
}

impl MatchSession {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            rules,
            tally: MatchTally::default(),
            id_gen: IdGenerator::new(),
        }
    }

    /// Сыграть один раунд от старта до конца.
    ///
    /// Недопустимый выбор лунки не считается провалом раунда – ход просто
    /// запрашивается заново (доска при этом не изменена). Quit от поставщика
    /// немедленно прерывает раунд без дальнейших мутаций.
    pub fn play_round(
        &mut self,
        providers: &mut [&mut dyn TurnProvider; 2],
        presenter: &mut dyn Presenter,
    ) -> Result<RoundSummary, EngineError> {
        let mut engine = RoundEngine::start(self.rules.clone(), self.id_gen.next_round_id());
        let mut forwarded = 0usize;
        forward_new_events(&engine, &mut forwarded, presenter);

        let mut step: u32 = 0;
        loop {
            step += 1;
            if step > MAX_STEPS {
                return Err(EngineError::Internal("превышен лимит шагов раунда"));
            }

            let player = engine.current_player;
            let pit = match providers[player as usize].request_move(&engine.board, player) {
                MoveChoice::Quit => return Err(EngineError::QuitRequested),
                MoveChoice::Pit(pit) => pit,
            };

            match engine.apply_move(SowMove { player, pit }) {
                // повторно запрашиваем ход у того же игрока
                Err(e) if e.is_invalid_selection() => continue,
                Err(e) => return Err(e),
                Ok(RoundStatus::Ongoing) => {
                    forward_new_events(&engine, &mut forwarded, presenter);
                }
                Ok(RoundStatus::Finished(summary, _history)) => {
                    forward_new_events(&engine, &mut forwarded, presenter);
                    self.tally.record(&summary);
                    return Ok(summary);
                }
            }
        }
    }
}

/// Переслать презентеру события, накопившиеся с прошлой пересылки.
fn forward_new_events(engine: &RoundEngine, forwarded: &mut usize, presenter: &mut dyn Presenter) {
    while *forwarded < engine.history.events.len() {
        presenter.notify(&engine.history.events[*forwarded]);
        *forwarded += 1;
    }
}
