use thiserror::Error;

use crate::domain::errors::CardError;

/// Ошибка обработки одной строки раздачи.
///
/// Строка пропускается, остальные продолжают обрабатываться.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{source}, skipping line: {line}")]
pub struct DealError {
    pub line: String,
    #[source]
    pub source: CardError,
}

/// Ошибки всего прогона (ввод/вывод), в отличие от ошибок отдельных строк.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("ошибка сериализации результата: {0}")]
    Json(#[from] serde_json::Error),
}
