use serde::{Deserialize, Serialize};

/// Как считать очки в конце раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoringRule {
    /// Счёт игрока – сумма его стороны (лунки + амбар), доска не трогается.
    /// Поведение исходной игры.
    CountSides,
    /// Остаток семян в лунках сначала переносится в амбар владельца,
    /// затем считается счёт. Классическое правило калаха.
    SweepToStore,
}

/// Конфиг правил раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    pub scoring: ScoringRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringRule::CountSides,
        }
    }
}
