//! # Configuration
//!
//! TOML configuration for a Blockworld instance. Every section and field has
//! a default, so an empty file is a valid configuration.
//!
//! ```toml
//! [world]
//! rows = 32
//! cols = 64
//! seed = "blockworld"
//!
//! [players]
//! spawn_row = 0
//! spawn_col = 0
//! default_block = "air"
//!
//! [render]
//! framerate = 15
//! background = "#000000"
//!
//! [colors]
//! stone = "#808080"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use blockworld_core::{BlockKind, ColorProfile, CursorPos, GridShape, Rgb, SpawnRules, WorldError};
use blockworld_procedural::WorldSeed;
use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is not usable.
    #[error("invalid config value: {0}")]
    Invalid(String),

    /// A value was rejected by the world engine.
    #[error(transparent)]
    World(#[from] WorldError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockworldConfig {
    /// Grid size and world seed.
    #[serde(default)]
    pub world: WorldConfig,

    /// Spawn rules for joining players.
    #[serde(default)]
    pub players: PlayersConfig,

    /// Frame pacing and background.
    #[serde(default)]
    pub render: RenderConfig,

    /// Per-block colour overrides as `"#rrggbb"`, keyed by block name.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldConfig {
    /// Grid rows (pixel height).
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Grid columns (pixel width).
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Seed text for the initial world.
    #[serde(default = "default_seed")]
    pub seed: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            seed: default_seed(),
        }
    }
}

/// Where players start and what they hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayersConfig {
    /// Spawn row (clamped into the grid).
    #[serde(default)]
    pub spawn_row: usize,

    /// Spawn column (clamped into the grid).
    #[serde(default)]
    pub spawn_col: usize,

    /// Block selected on join.
    #[serde(default)]
    pub default_block: BlockKind,
}

/// Render loop configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Frames per second.
    #[serde(default = "default_framerate")]
    pub framerate: u32,

    /// Fill colour drawn before each frame, as `"#rrggbb"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            framerate: default_framerate(),
            background: None,
        }
    }
}

fn default_rows() -> usize {
    32
}

fn default_cols() -> usize {
    64
}

fn default_seed() -> String {
    "blockworld".to_owned()
}

fn default_framerate() -> u32 {
    15
}

fn parse_color(field: &str, text: &str) -> ConfigResult<Rgb> {
    Rgb::from_hex(text).ok_or_else(|| ConfigError::Invalid(format!("{field}: {text:?} is not #rrggbb")))
}

impl BlockworldConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, and otherwise
    /// the same errors as [`BlockworldConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown fields or
    /// unknown block names, and any error from [`BlockworldConfig::validate`].
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value that serde alone cannot.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::World`] for a zero grid dimension or an unknown
    ///   block name under `[colors]`
    /// - [`ConfigError::Invalid`] for a zero framerate or a bad colour
    pub fn validate(&self) -> ConfigResult<()> {
        self.grid_shape()?;
        if self.render.framerate == 0 {
            return Err(ConfigError::Invalid("render.framerate must be at least 1".to_owned()));
        }
        self.background()?;
        self.color_profile()?;
        Ok(())
    }

    /// Grid shape from `[world]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::World`] if a dimension is zero.
    pub fn grid_shape(&self) -> ConfigResult<GridShape> {
        Ok(GridShape::new(self.world.rows, self.world.cols)?)
    }

    /// Seed for the initial world.
    #[must_use]
    pub fn seed(&self) -> WorldSeed {
        WorldSeed::from_text(&self.world.seed)
    }

    /// Spawn rules from `[players]`.
    #[must_use]
    pub fn spawn_rules(&self) -> SpawnRules {
        SpawnRules {
            cursor: CursorPos::new(self.players.spawn_row, self.players.spawn_col),
            block: self.players.default_block,
        }
    }

    /// Classic palette with `[colors]` applied.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::World`] for a key that is not a block name
    /// - [`ConfigError::Invalid`] for a colour that is not `#rrggbb`
    pub fn color_profile(&self) -> ConfigResult<ColorProfile> {
        let overrides = self
            .colors
            .iter()
            .map(|(name, text)| {
                let kind: BlockKind = name.parse()?;
                Ok((kind, parse_color(&format!("colors.{name}"), text)?))
            })
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(ColorProfile::with_overrides(overrides))
    }

    /// Background fill colour, if configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a colour that is not `#rrggbb`.
    pub fn background(&self) -> ConfigResult<Option<Rgb>> {
        self.render
            .background
            .as_deref()
            .map(|text| parse_color("render.background", text))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = BlockworldConfig::from_toml_str("").unwrap();
        assert_eq!(config, BlockworldConfig::default());
        assert_eq!(config.world.rows, 32);
        assert_eq!(config.world.cols, 64);
        assert_eq!(config.world.seed, "blockworld");
        assert_eq!(config.render.framerate, 15);
        assert_eq!(config.players.default_block, BlockKind::Air);
        assert_eq!(config.spawn_rules(), SpawnRules::default());
        assert_eq!(config.background().unwrap(), None);
    }

    #[test]
    fn test_defaults_round_trip() {
        let text = toml::to_string(&BlockworldConfig::default()).unwrap();
        assert_eq!(BlockworldConfig::from_toml_str(&text).unwrap(), BlockworldConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = BlockworldConfig::from_toml_str(
            r##"
            [world]
            rows = 8
            cols = 16
            seed = "island"

            [players]
            spawn_row = 3
            spawn_col = 4
            default_block = "brick"

            [render]
            framerate = 30
            background = "#102030"

            [colors]
            stone = "#010203"
            "##,
        )
        .unwrap();

        assert_eq!(config.grid_shape().unwrap(), GridShape::new(8, 16).unwrap());
        assert_eq!(config.seed(), WorldSeed::from_text("island"));
        assert_eq!(config.spawn_rules().cursor, CursorPos::new(3, 4));
        assert_eq!(config.spawn_rules().block, BlockKind::Brick);
        assert_eq!(config.render.framerate, 30);
        assert_eq!(config.background().unwrap(), Some(Rgb::new(0x10, 0x20, 0x30)));
        assert_eq!(
            config.color_profile().unwrap().color(BlockKind::Stone),
            Rgb::new(1, 2, 3)
        );
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let err = BlockworldConfig::from_toml_str("[world]\nrows = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::World(WorldError::InvalidDimensions { rows: 0, cols: 64 })
        ));
    }

    #[test]
    fn test_rejects_zero_framerate() {
        let err = BlockworldConfig::from_toml_str("[render]\nframerate = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_colors() {
        let err = BlockworldConfig::from_toml_str("[colors]\ngrass = \"green\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("colors.grass")));

        let err = BlockworldConfig::from_toml_str("[render]\nbackground = \"#12\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = BlockworldConfig::from_toml_str("[colors]\nsand = \"+f+f+f\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("colors.sand")));

        let err = BlockworldConfig::from_toml_str("[render]\nbackground = \"#-1-2-3\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unknown_names() {
        assert!(matches!(
            BlockworldConfig::from_toml_str("[colors]\nobsidian = \"#000000\"\n"),
            Err(ConfigError::World(WorldError::InvalidCellKind(name))) if name == "obsidian"
        ));
        assert!(matches!(
            BlockworldConfig::from_toml_str("[players]\ndefault_block = \"Stone\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BlockworldConfig::from_toml_str("[world]\nwidth = 3\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = BlockworldConfig::load("/definitely/not/here/blockworld.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("blockworld.toml"));
    }
}
