//! Environment seam.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// An environment, typically an MDP.
///
/// An environment is built from a configuration and a random seed, and is
/// then driven by [`step`](Env::step) and [`reset`](Env::reset) calls.
/// Besides a [`Step`] object, every step emits a [`Record`] with
/// diagnostics for a [`Recorder`](crate::record::Recorder).
pub trait Env {
    /// Configuration of the environment.
    type Config: Clone;

    /// Observation produced by the environment.
    type Obs: Obs;

    /// Action accepted by the environment.
    type Act: Act;

    /// Additional information in the [`Step`] object.
    type Info: Info;

    /// Builds the environment from a configuration and a random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performs one interaction step.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment if `is_done` is `None` or `is_done[0] == 1`.
    ///
    /// Vectorized environments are not supported, so `is_done` holds a
    /// single flag.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs>;

    /// Performs one step and, if the episode ended, starts the next one.
    ///
    /// The initial observation of the started episode is returned in
    /// [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record)
    where
        Self: Sized;

    /// Resets the environment with an index, typically used as a seed when
    /// evaluating a policy over a fixed set of episodes.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs>;
}
