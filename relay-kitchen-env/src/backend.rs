//! Interface to the underlying kitchen benchmark environment.
use crate::{BoxSpace, SubTask};
use anyhow::Result;
use ndarray::ArrayD;
use num_traits::AsPrimitive;
use relay_core::record::Record;

/// Raw result of one backend step.
pub struct BackendStep<R> {
    /// Observation after the step, a vector of
    /// [`OBS_DIM`](crate::OBS_DIM) elements.
    pub obs: ArrayD<f64>,

    /// Reward of the step.
    pub reward: R,

    /// Whether the episode reached a terminal state.
    pub is_terminated: bool,

    /// Whether the backend truncated the episode on its own.
    pub is_truncated: bool,

    /// Subtasks reported as completed at this step.
    ///
    /// The list may differ from step to step; completion flags are
    /// accumulated over the episode by the wrapping environment.
    pub completed_tasks: Vec<SubTask>,

    /// Remaining step diagnostics of the backend. Forwarded unchanged.
    pub info: Record,
}

/// Interface of an underlying kitchen benchmark environment.
///
/// The backend simulates the physics and computes rewards and completed
/// subtasks. [`KitchenEnv`](crate::KitchenEnv) only adapts it: task
/// selection, step counting and completion bookkeeping happen in the
/// wrapper.
///
/// Observations are vectors of [`OBS_DIM`](crate::OBS_DIM) elements, the
/// first [`STATE_DIM`](crate::STATE_DIM) of which are the robot and object
/// state, the rest the goal configuration.
pub trait KitchenBackend {
    /// The reward type reported by the backend.
    ///
    /// The wrapping environment widens rewards to `f64`.
    type Reward: AsPrimitive<f64>;

    /// Builds the backend for the given benchmark environment id.
    fn build(env_id: &str, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the backend and returns the initial observation.
    ///
    /// A seed is given on the first reset after [`KitchenBackend::build`]
    /// and on indexed resets; otherwise `seed` is `None`.
    fn reset(&mut self, seed: Option<i64>) -> Result<ArrayD<f64>>;

    /// Performs one step. A backend that fails mid-step has nothing to
    /// recover at this layer and is expected to panic.
    fn step(&mut self, action: &ArrayD<f32>) -> BackendStep<Self::Reward>;

    /// Bounds of the observation space.
    fn observation_space(&self) -> BoxSpace;

    /// Bounds of the action space.
    fn action_space(&self) -> BoxSpace;

    /// Episode summary of the backend. It is merged into the episode
    /// information of the wrapping environment.
    fn episode_info(&self) -> Record {
        Record::empty()
    }
}
