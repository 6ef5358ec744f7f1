use crate::engine::events::RoundEvent;

/// Потребитель событий раунда: терминальный вывод, тестовый сборщик и т.п.
///
/// Движок только отдаёт события; темп, анимация и оформление – целиком
/// забота реализации презентера.
pub trait Presenter {
    fn notify(&mut self, event: &RoundEvent);
}

/// Презентер-заглушка: молча игнорирует события.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn notify(&mut self, _event: &RoundEvent) {}
}
