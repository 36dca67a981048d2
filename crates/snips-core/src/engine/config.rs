use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Ridge penalty used when none is configured.
pub const DEFAULT_REGULARIZATION: f64 = 1e-10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LearningCurveConfig {
    pub train_sizes: Vec<usize>,
    pub regularization: f64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct FileLearningCurveConfig {
    train_sizes: Option<Vec<usize>>,
    regularization: Option<f64>,
}

impl LearningCurveConfig {
    pub fn builder() -> LearningCurveConfigBuilder {
        LearningCurveConfigBuilder::new()
    }

    /// Loads a learning-curve configuration from a kebab-case TOML file.
    ///
    /// `train-sizes` is required; `regularization` falls back to
    /// [`DEFAULT_REGULARIZATION`]. Unknown keys are rejected.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading learning-curve configuration from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: FileLearningCurveConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut builder = LearningCurveConfigBuilder::new();
        if let Some(sizes) = file.train_sizes {
            builder = builder.train_sizes(sizes);
        }
        if let Some(alpha) = file.regularization {
            builder = builder.regularization(alpha);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct LearningCurveConfigBuilder {
    train_sizes: Option<Vec<usize>>,
    regularization: Option<f64>,
}

impl LearningCurveConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn train_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.train_sizes = Some(sizes);
        self
    }
    pub fn regularization(mut self, alpha: f64) -> Self {
        self.regularization = Some(alpha);
        self
    }

    pub fn build(self) -> Result<LearningCurveConfig, ConfigError> {
        let train_sizes = self
            .train_sizes
            .ok_or(ConfigError::MissingParameter("train_sizes"))?;
        if train_sizes.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "train_sizes",
                reason: "at least one training size is required".to_string(),
            });
        }

        let regularization = self.regularization.unwrap_or(DEFAULT_REGULARIZATION);
        if !regularization.is_finite() || regularization <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                parameter: "regularization",
                reason: format!("must be positive and finite, got {}", regularization),
            });
        }

        Ok(LearningCurveConfig {
            train_sizes,
            regularization,
        })
    }
}
