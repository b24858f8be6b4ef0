//! # Errors returned before or after a simulation run
use std::fmt;

/// SimulationError rejects a configuration before any trial runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationError {
  /// `run_count` is zero
  NoRuns,
  /// `turns` is zero
  NoTurns,
  /// The deck has no slots at all, padding included
  EmptyDeck,
}

impl fmt::Display for SimulationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoRuns => write!(f, "run_count must be at least 1"),
      Self::NoTurns => write!(f, "turns must be at least 1"),
      Self::EmptyDeck => write!(f, "deck has no cards and a deck size of 0"),
    }
  }
}

impl std::error::Error for SimulationError {}

/// ReportError is returned when a compressed report can't be written or read back
#[derive(Debug)]
pub enum ReportError {
  Io(std::io::Error),
  Bincode(bincode::Error),
}

impl fmt::Display for ReportError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "report io error: {}", e),
      Self::Bincode(e) => write!(f, "report encoding error: {}", e),
    }
  }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
  fn from(e: std::io::Error) -> Self {
    Self::Io(e)
  }
}

impl From<bincode::Error> for ReportError {
  fn from(e: bincode::Error) -> Self {
    Self::Bincode(e)
  }
}
