//! JSON-lines export of finished rounds, and replay of those exports.

use crate::games::tictactoe::{GameEngine, GameResult, LogEntry, Mode, Move, Score};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// One finished round as written to the log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RoundRecord {
    /// Round number within the session, starting at 1.
    pub round: u32,
    /// Mode the round was played in.
    pub mode: Mode,
    /// The round's move log, result last.
    pub entries: Vec<LogEntry>,
}

impl RoundRecord {
    /// The placements, in order.
    pub fn moves(&self) -> Vec<Move> {
        self.entries.iter().filter_map(LogEntry::as_move).copied().collect()
    }

    /// The recorded result, if the log has one.
    pub fn result(&self) -> Option<GameResult> {
        self.entries.iter().find_map(LogEntry::as_result)
    }

    /// Replays the moves and checks the recorded result against the rules.
    ///
    /// A record may hold at most one result entry, and only as its last entry.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn replay(&self) -> Result<GameEngine, RoundLogError> {
        let results = self.entries.iter().filter(|e| e.as_result().is_some()).count();
        let ends_with_result = self.entries.last().is_some_and(|e| e.as_result().is_some());
        if results > 1 || (results == 1 && !ends_with_result) {
            warn!(results, ends_with_result, "Result entry out of place");
            return Err(RoundLogError::new(format!(
                "Round {}: result entry must appear once, as the last entry",
                self.round
            )));
        }

        let engine = GameEngine::replay(&self.moves()).map_err(|e| {
            RoundLogError::new(format!("Round {}: illegal move: {}", self.round, e))
        })?;

        let recorded = self.result();
        if engine.outcome() != recorded {
            warn!(?recorded, actual = ?engine.outcome(), "Recorded result disagrees with replay");
            return Err(RoundLogError::new(format!(
                "Round {}: recorded result {:?} but replay gives {:?}",
                self.round,
                recorded,
                engine.outcome()
            )));
        }
        Ok(engine)
    }
}

/// Appends round records to a file, one JSON object per line.
#[derive(Debug)]
pub struct RoundLogWriter {
    file: File,
}

impl RoundLogWriter {
    /// Opens `path` for appending, creating it if needed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RoundLogError> {
        let file = OpenOptions::new().create(true).append(true).open(path.as_ref())?;
        info!("Round log opened");
        Ok(Self { file })
    }

    /// Wraps an already opened file.
    #[cfg(test)]
    pub(crate) fn from_file(file: File) -> Self {
        Self { file }
    }

    /// Writes one record.
    #[instrument(skip(self, record), fields(round = record.round))]
    pub fn write(&mut self, record: &RoundRecord) -> Result<(), RoundLogError> {
        let line = serde_json::to_string(record)?;
        writeln!(self.file, "{}", line)?;
        self.file.flush()?;
        debug!("Round written");
        Ok(())
    }
}

/// Reads every record from a JSON-lines file. Blank lines are skipped.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_rounds(path: impl AsRef<Path>) -> Result<Vec<RoundRecord>, RoundLogError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RoundRecord = serde_json::from_str(&line)
            .map_err(|e| RoundLogError::new(format!("Line {}: {}", number + 1, e)))?;
        records.push(record);
    }
    info!(rounds = records.len(), "Round log read");
    Ok(records)
}

/// Outcome of replaying every round in a log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Text for each round, in file order.
    pub lines: Vec<String>,
    /// Wins across the rounds that replayed cleanly.
    pub tally: Score,
    /// Drawn rounds among those.
    pub draws: u32,
    /// Rounds in the file.
    pub rounds: usize,
    /// Rounds that failed to replay.
    pub failures: usize,
}

/// Replays every round in a JSON-lines file.
///
/// Rounds that fail to replay are counted and described, not fatal; only an
/// unreadable file is an error.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn replay_file(path: impl AsRef<Path>) -> Result<ReplayReport, RoundLogError> {
    let records = read_rounds(path)?;
    let mut report = ReplayReport {
        rounds: records.len(),
        ..ReplayReport::default()
    };

    for record in &records {
        match record.replay() {
            Ok(engine) => {
                let result = engine
                    .status_message()
                    .unwrap_or_else(|| "unfinished".to_string());
                report.lines.push(format!(
                    "Round {} ({}): {}\n{}\n",
                    record.round,
                    record.mode,
                    result,
                    engine.board()
                ));
                match engine.outcome() {
                    Some(outcome) if outcome.is_draw() => report.draws += 1,
                    Some(GameResult::Winner(winner)) => report.tally.record_win(winner),
                    _ => {}
                }
            }
            Err(e) => {
                warn!(error = %e, "Round failed to replay");
                report.lines.push(format!("Round {}: {}\n", record.round, e.message));
                report.failures += 1;
            }
        }
    }

    info!(rounds = report.rounds, failures = report.failures, "Replay finished");
    Ok(report)
}

/// Round log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Round log error: {} at {}:{}", message, file, line)]
pub struct RoundLogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RoundLogError {
    /// Creates a new round log error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for RoundLogError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for RoundLogError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
