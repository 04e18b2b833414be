use std::path::PathBuf;

/// Errors raised when placing a disc.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is out of range")]
    InvalidColumn,

    #[error("column is full")]
    ColumnFull,

    #[error("game is already over")]
    GameOver,
}

/// Errors raised when building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board size {rows}x{cols} (both dimensions must be >= 1)")]
    InvalidSize { rows: usize, cols: usize },

    #[error("row {row} has a different width than the first row")]
    RaggedRow { row: usize },

    #[error("invalid cell symbol '{0}' (expected '.', 'R' or 'Y')")]
    InvalidCell(char),
}

/// Errors raised at the search entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("depth limit must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("depth limit {0} is too large")]
    DepthTooLarge(i64),

    #[error("unknown strategy '{0}' (expected 'minimax', 'alphabeta' or 'expectimax')")]
    UnknownStrategy(String),
}

/// Errors that can occur while two agents play a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("agent selected illegal action {action} (legal: {legal:?})")]
    IllegalAction { action: usize, legal: Vec<usize> },

    #[error("game should be terminal but has no outcome")]
    MissingOutcome,

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_display() {
        let err = SearchError::NegativeDepth(-3);
        assert_eq!(err.to_string(), "depth limit must be non-negative, got -3");
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalAction {
            action: 5,
            legal: vec![0, 1, 2],
        };
        assert_eq!(
            err.to_string(),
            "agent selected illegal action 5 (legal: [0, 1, 2])"
        );
    }

    #[test]
    fn test_match_error_from_move_error() {
        let err: MatchError = MoveError::ColumnFull.into();
        assert_eq!(err.to_string(), "move rejected: column is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth must be >= 1"
        );
    }
}
