//! Конфигурация ранжировщика.
//!
//! Источники по приоритету: флаги CLI > JSON-файл (`--config`) > `Default`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Направление вывода рук в строке.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    /// От слабой руки к сильной.
    #[default]
    WeakestFirst,
    StrongestFirst,
}

/// Формат вывода одной раздачи.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Ac4d=Ad4s 5d6d As9s KhKd`
    #[default]
    Text,
    /// Одна JSON-строка на раздачу (см. `api::dto`).
    Json,
}

/// Уровень логов (отдельно от `log::LevelFilter`, чтобы жить в serde-конфиге).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Поднять уровень на `n` ступеней (для `-v`, `-vv`, ...).
    pub fn raised_by(self, n: u8) -> Self {
        const LADDER: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let idx = LADDER.iter().position(|l| *l == self).unwrap_or(0);
        LADDER[(idx + usize::from(n)).min(LADDER.len() - 1)]
    }
}

/// Порог по умолчанию: с какого числа рук раздачу оцениваем через rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 8;

/// Настройки одного запуска.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RankerConfig {
    /// Напечатать общее время обработки (секунды) после последней строки.
    pub timed: bool,
    /// Минимум рук в раздаче для параллельной оценки. 0 — всегда параллельно.
    pub parallel_threshold: usize,
    pub order: SortOrder,
    pub output: OutputFormat,
    pub log_level: LogLevel,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            timed: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            order: SortOrder::default(),
            output: OutputFormat::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// Ошибки загрузки конфигурации.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("некорректный JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RankerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Параллелить ли раздачу из `hands` рук.
    pub fn is_parallel(&self, hands: usize) -> bool {
        hands >= self.parallel_threshold
    }
}
