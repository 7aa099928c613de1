use thiserror::Error;

/// Ошибки разбора карт, рук и борда.
///
/// Тексты совпадают с тем, что видит пользователь в выводе CLI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card encountered: {0}")]
    InvalidCard(String),

    #[error("Invalid hand string encountered: {0}")]
    InvalidHandToken(String),

    #[error("Invalid board encountered: {0}")]
    InvalidBoard(String),
}
