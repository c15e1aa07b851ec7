use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{} unmatched row(s): {}", .unmatched.len(), .unmatched.join(", "))]
    Import { unmatched: Vec<String> },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

/// Rejections from [`crate::score::dots::validate_dots_entry`]. Score entry
/// stays editable in the caller's UI, so these carry enough context to show
/// the golfer what to fix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotsEntryError {
    #[error("bonus dots need par or better, got {score} on a par {par}")]
    BonusOverPar { score: i32, par: i32 },
    #[error("greenie and sandy cannot both apply on a par 3")]
    GreenieAndSandyOnPar3,
}
