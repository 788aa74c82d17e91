//! Policies and their construction from configurations.
use super::Env;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path};

/// A mapping from observations to actions.
///
/// The mapping may be deterministic or stochastic, which is why
/// [`Policy::sample`] takes `&mut self`.
pub trait Policy<E: Env> {
    /// Samples an action for the given observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}

/// An object that can be built from a configuration.
pub trait Configurable<E: Env> {
    /// Configuration of the object.
    type Config: Clone + DeserializeOwned;

    /// Builds the object from a configuration.
    fn build(config: Self::Config) -> Self;

    /// Builds the object from a YAML configuration file.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        let rdr = BufReader::new(File::open(path)?);
        Ok(Self::build(serde_yaml::from_reader(rdr)?))
    }
}
