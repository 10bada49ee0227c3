pub mod compare;
pub mod locate;

use anyhow::{Context, Result};
use srcpos::{ByteSpan, ColumnUnit, LineIndex, Range};
use srcpos_config::{find_config, load_config, SrcposConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Effective settings after merging the config file with command line flags.
pub struct Settings {
    config: SrcposConfig,
}

impl Settings {
    /// Load the config at `config_path`, or the nearest one to the current
    /// directory, then apply the `--columns` override.
    pub fn load(config_path: Option<PathBuf>, columns: Option<ColumnUnit>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(path),
            None => find_config(&std::env::current_dir()?),
        };

        Self::from_config_file(config_path.as_deref(), columns)
    }

    fn from_config_file(config_path: Option<&Path>, columns: Option<ColumnUnit>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                tracing::debug!("Using config at {}", path.display());
                load_config(path).context("Failed to load config")?
            }
            None => SrcposConfig::default(),
        };

        if let Some(unit) = columns {
            config.column_unit = unit;
        }

        Ok(Self { config })
    }

    /// Name recorded in ranges for `path`
    fn filename_for(&self, path: &Path) -> String {
        self.config
            .filename
            .clone()
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// A source file read into memory, ready to resolve spans against.
pub struct Source {
    filename: String,
    text: String,
}

impl Source {
    pub fn read(settings: &Settings, path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Self {
            filename: settings.filename_for(path),
            text,
        })
    }

    pub fn index<'a>(&'a self, settings: &Settings) -> LineIndex<'a> {
        LineIndex::with_unit(&self.text, settings.config.column_unit)
    }

    pub fn resolve(&self, index: &LineIndex<'_>, span: ByteSpan) -> Result<Range> {
        index
            .range(self.filename.as_str(), span.start, span.end)
            .with_context(|| format!("Cannot resolve {span} in {}", self.filename))
    }

    /// The text covered by `range`, lossily decoded
    pub fn snippet(&self, range: &Range) -> String {
        String::from_utf8_lossy(range.slice_bytes(self.text.as_bytes())).into_owned()
    }
}
