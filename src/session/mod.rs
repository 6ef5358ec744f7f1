//! Сессия матча: несколько раундов подряд с подсчётом побед.

pub mod match_session;

pub use match_session::{MatchSession, MatchTally};
