use std::path::Path;

use crate::error::{BoardError, ConfigError};
use crate::game::{Board, COLS, CONNECT, ROWS};
use crate::search::{DepthLimit, SegmentHeuristic, Strategy, DEFAULT_WEIGHTS, MAX_DEPTH};

/// Smallest and largest board edge the configuration accepts.
pub const MIN_BOARD_SIDE: usize = 4;
pub const MAX_BOARD_SIDE: usize = 16;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl BoardConfig {
    pub fn build(&self) -> Result<Board, BoardError> {
        Board::with_size(self.rows, self.cols)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub depth: u32,
    /// Weight of a segment holding 0..=4 of one player's discs.
    pub weights: [f64; CONNECT + 1],
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            strategy: Strategy::AlphaBeta,
            depth: 4,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl SearchConfig {
    pub fn depth_limit(&self) -> DepthLimit {
        DepthLimit::new(self.depth)
    }

    pub fn heuristic(&self) -> SegmentHeuristic {
        SegmentHeuristic::new(self.weights)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Seed for random agents; unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !sides.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_BOARD_SIDE}, {MAX_BOARD_SIDE}]"
            )));
        }
        if !sides.contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_BOARD_SIDE}, {MAX_BOARD_SIDE}]"
            )));
        }

        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        let weights = &self.search.weights;
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(ConfigError::Validation(
                "search.weights must be finite and >= 0".into(),
            ));
        }
        if weights.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::Validation(
                "search.weights must be non-decreasing".into(),
            ));
        }

        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be > 0".into()));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
