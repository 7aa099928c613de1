use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::api::dto::{DealErrorDto, DealResultDto};
use crate::engine::deal::{Deal, RankedDeal};
use crate::engine::errors::{DealError, RunError};
use crate::engine::format::format_text;
use crate::infra::config::{OutputFormat, RankerConfig};

/// Итоги прогона по всему вводу.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: usize,
    pub ranked: usize,
    pub skipped: usize,
    pub elapsed: Duration,
}

/// Следующая строка ввода без `\n` / `\r\n`, `None` в конце потока.
///
/// Байты не из UTF-8 заменяются на U+FFFD: такая строка не разберётся
/// как раздача и будет пропущена, остальной ввод обрабатывается дальше.
fn next_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Разобрать, оценить и отсортировать одну строку.
pub fn process_line(line: &str, config: &RankerConfig) -> Result<RankedDeal, DealError> {
    let deal: Deal = line.parse().map_err(|source| DealError {
        line: line.to_string(),
        source,
    })?;
    Ok(deal.rank(config))
}

/// Строка вывода для результата `process_line`.
pub fn render_line(
    outcome: &Result<RankedDeal, DealError>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    Ok(match (format, outcome) {
        (OutputFormat::Text, Ok(deal)) => format_text(deal),
        (OutputFormat::Text, Err(err)) => err.to_string(),
        (OutputFormat::Json, Ok(deal)) => serde_json::to_string(&DealResultDto::from(deal))?,
        (OutputFormat::Json, Err(err)) => serde_json::to_string(&DealErrorDto::from(err))?,
    })
}

/// Обработать весь ввод построчно.
///
/// Битая строка не останавливает прогон: печатается сообщение об ошибке,
/// и обработка идёт дальше. Прерывает прогон только ошибка ввода-вывода.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &RankerConfig,
) -> Result<RunStats, RunError> {
    let start = Instant::now();
    let mut stats = RunStats::default();

    let mut buf = Vec::new();
    while let Some(line) = next_line(&mut input, &mut buf)? {
        stats.lines += 1;

        let outcome = process_line(&line, config);
        match &outcome {
            Ok(deal) => {
                stats.ranked += 1;
                log::debug!("строка {}: {} рук", stats.lines, deal.hands.len());
            }
            Err(err) => {
                stats.skipped += 1;
                log::warn!("строка {}: {}", stats.lines, err.source);
            }
        }

        writeln!(output, "{}", render_line(&outcome, config.output)?)?;
    }

    stats.elapsed = start.elapsed();
    if config.timed {
        writeln!(output, "{:.3}", stats.elapsed.as_secs_f64())?;
    }
    output.flush()?;

    log::info!(
        "обработано строк: {}, пропущено: {}, за {:?}",
        stats.lines,
        stats.skipped,
        stats.elapsed
    );
    Ok(stats)
}
