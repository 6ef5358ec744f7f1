//! Инфраструктура: генерация идентификаторов и источники случайности.

pub mod ids;
pub mod rng;

pub use ids::IdGenerator;
pub use rng::{DeterministicRng, SystemRng};
