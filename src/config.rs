use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::snapshot::ReaderOptions;

/// Snapshot parsing settings, optionally loaded from a JSON file:
/// ```json
/// {
///   "delimiter": ";",
///   "quoting": true
/// }
/// ```
/// Missing keys fall back to comma-delimited, unquoted input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub delimiter: char,
    pub quoting: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quoting: false,
        }
    }
}

impl AnalyzerConfig {
    /// Loads the config from a JSON file at `path`.
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("reading config '{path}'"))?;
        serde_json::from_str(&content).with_context(|| format!("parsing config '{path}'"))
    }

    /// Applies command-line settings on top of the file values. `None` keeps
    /// the file value.
    pub fn with_overrides(mut self, delimiter: Option<char>, quoting: Option<bool>) -> Self {
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter;
        }
        if let Some(quoting) = quoting {
            self.quoting = quoting;
        }
        self
    }

    /// Reader settings for snapshot files. The delimiter must be a single
    /// ASCII character.
    pub fn reader_options(&self) -> Result<ReaderOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter {:?} is not a single ASCII character", self.delimiter);
        }
        Ok(ReaderOptions {
            delimiter: self.delimiter as u8,
            quoting: self.quoting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_reader_options() {
        let options = AnalyzerConfig::default().reader_options().unwrap();
        assert_eq!(options, ReaderOptions::default());
    }

    #[test]
    fn test_load_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "delimiter": ";" }}"#).unwrap();

        let config = AnalyzerConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.delimiter, ';');
        assert!(!config.quoting);
        assert_eq!(config.reader_options().unwrap().delimiter, b';');
    }

    #[test]
    fn test_non_ascii_delimiter_is_rejected() {
        let config = AnalyzerConfig {
            delimiter: '§',
            quoting: false,
        };
        assert!(config.reader_options().is_err());
    }

    #[test]
    fn test_overrides_can_turn_quoting_off() {
        let config = AnalyzerConfig {
            delimiter: ';',
            quoting: true,
        };

        let overridden = config.clone().with_overrides(None, Some(false));
        assert!(!overridden.quoting);
        assert_eq!(overridden.delimiter, ';');

        let kept = config.with_overrides(Some('\t'), None);
        assert!(kept.quoting);
        assert_eq!(kept.delimiter, '\t');
    }

    #[test]
    fn test_load_missing_file() {
        assert!(AnalyzerConfig::load("no/such/config.json").is_err());
    }
}
