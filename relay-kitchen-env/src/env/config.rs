//! Configuration of [`KitchenEnv`](super::KitchenEnv).
use super::MAX_EPISODE_STEPS;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`KitchenEnv`](super::KitchenEnv).
///
/// Missing fields take their default values when deserializing, so a
/// configuration file without a `task` entry selects the mixed task.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct KitchenEnvConfig {
    /// Name of the task variant.
    ///
    /// `"misaligned"` and `"newskill"` select the corresponding variants;
    /// any other name selects the mixed task.
    pub task: String,

    /// Maximum number of steps of an episode.
    pub max_episode_steps: usize,
}

impl Default for KitchenEnvConfig {
    fn default() -> Self {
        Self {
            task: "mixed".to_string(),
            max_episode_steps: MAX_EPISODE_STEPS,
        }
    }
}

impl KitchenEnvConfig {
    /// Sets the name of the task variant.
    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Sets the maximum number of steps of an episode.
    pub fn max_episode_steps(mut self, v: usize) -> Self {
        self.max_episode_steps = v;
        self
    }

    /// Constructs [`KitchenEnvConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`KitchenEnvConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
