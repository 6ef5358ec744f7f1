//! Внешний API движка манкалы.
//!
//! Здесь только DTO (dto.rs) – удобные снимки состояния для фронта/CLI.
//! Само управление раундом идёт напрямую через engine и session.

pub mod dto;

pub use dto::*;
