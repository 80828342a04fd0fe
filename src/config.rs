use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{CleanerError, Result};
use crate::osm::ShapeOptions;
use crate::pipeline::PipelineOptions;

/// Environment variable naming a config file to use instead of the default
pub const CONFIG_ENV: &str = "OSM_CLEANER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OSM XML export to shape
    pub input: Option<PathBuf>,
    /// Directory receiving the CSV files
    pub output_dir: PathBuf,
    /// SQLite database the CSV files are loaded into
    pub database: PathBuf,
    pub validate: bool,
    pub skip_problem_keys: bool,
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: PathBuf::from("files"),
            database: PathBuf::from("files/osm.db"),
            validate: false,
            skip_problem_keys: false,
            limit: None,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "osm_cleaner.toml";

    /// Load configuration.
    ///
    /// An explicit path (or `OSM_CLEANER_CONFIG`) must exist; otherwise
    /// `osm_cleaner.toml` is read when present and defaults are used when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::from_file(&path),
            None => {
                let default_path = Path::new(Self::DEFAULT_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn input(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .ok_or_else(|| CleanerError::Config("No input file given".to_string()))
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            validate: self.validate,
            limit: self.limit,
            shape: ShapeOptions {
                skip_problem_keys: self.skip_problem_keys,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            input = "jakarta_indonesia.osm"
            validate = true
            "#,
        )
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("jakarta_indonesia.osm")));
        assert!(config.validate);
        assert_eq!(config.output_dir, PathBuf::from("files"));
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_pipeline_options_follow_config() {
        let config = Config {
            skip_problem_keys: true,
            limit: Some(2_000_000),
            ..Config::default()
        };
        let options = config.pipeline_options();

        assert!(options.shape.skip_problem_keys);
        assert_eq!(options.limit, Some(2_000_000));
        assert!(!options.validate);
    }

    #[test]
    fn test_explicit_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cleaner.toml");
        fs::write(&path, "output_dir = \"out\"\ndatabase = \"out/map.db\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.database, PathBuf::from("out/map.db"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Config::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(CleanerError::Config(_))));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(matches!(
            Config::from_toml_str("validate = \"maybe\""),
            Err(CleanerError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_input_is_reported() {
        assert!(Config::default().input().is_err());
    }
}
