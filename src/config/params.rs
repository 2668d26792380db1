use crate::classifiers::Id3Tree;
use crate::config::ConfigError;
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

fn default_max_depth() -> usize {
    3
}
fn default_train_fraction() -> f64 {
    0.7
}
fn default_seed() -> u64 {
    42
}

fn check_max_depth(max_depth: usize) -> Result<(), ConfigError> {
    if max_depth == 0 {
        return Err(ConfigError::InvalidParameter("max_depth must be >= 1".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Id3Params {
    #[serde(default = "default_max_depth")]
    #[schemars(
        title = "Maximum depth",
        description = "Number of splits allowed on any root-to-leaf path.",
        range(min = 1),
        default = "default_max_depth"
    )]
    pub max_depth: usize,
}

impl Default for Id3Params {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Id3Params {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).context("parsing ID3 parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_max_depth(self.max_depth)
    }

    pub fn schema() -> Schema {
        schema_for!(Id3Params)
    }
}

impl From<Id3Params> for Id3Tree {
    fn from(params: Id3Params) -> Self {
        Id3Tree::new(params.max_depth)
    }
}

/// Parameters of a single hold-out experiment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HoldoutParams {
    #[serde(default = "default_train_fraction")]
    #[schemars(
        title = "Train fraction",
        description = "Share of shuffled rows used for training (exclusive bounds 0.0 and 1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_train_fraction"
    )]
    pub train_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(
        title = "Seed",
        description = "Seed of the shuffle that precedes the split",
        default = "default_seed"
    )]
    pub seed: u64,

    #[serde(default = "default_max_depth")]
    #[schemars(
        title = "Maximum depth",
        description = "Number of splits allowed on any root-to-leaf path.",
        range(min = 1),
        default = "default_max_depth"
    )]
    pub max_depth: usize,
}

impl Default for HoldoutParams {
    fn default() -> Self {
        Self {
            train_fraction: default_train_fraction(),
            seed: default_seed(),
            max_depth: default_max_depth(),
        }
    }
}

impl HoldoutParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json).context("parsing hold-out parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(ConfigError::InvalidParameter(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            )));
        }
        check_max_depth(self.max_depth)
    }

    pub fn schema() -> Schema {
        schema_for!(HoldoutParams)
    }

    pub fn tree_params(&self) -> Id3Params {
        Id3Params {
            max_depth: self.max_depth,
        }
    }
}
