//! Environment step.
use super::Env;

/// Additional step information besides observation and action.
pub trait Info {}

impl Info for () {}

/// The outcome of one environment step: the action taken, the resulting
/// observation and the reward, together with the episode-end flags.
///
/// [`Step`] objects are consumed by evaluators and can be turned into
/// transitions `(o_t, a_t, o_t+1, r_t)` by a training harness.
pub struct Step<E: Env> {
    /// Action taken in this step.
    pub act: E::Act,

    /// Observation after the step.
    pub obs: E::Obs,

    /// Reward of the step.
    pub reward: Vec<f64>,

    /// Set to 1 if the episode reached a terminal state.
    pub is_terminated: Vec<i8>,

    /// Set to 1 if the episode was cut off.
    pub is_truncated: Vec<i8>,

    /// Additional environment-defined information.
    pub info: E::Info,

    /// Observation of the next episode, present if the environment reset
    /// itself within this step.
    pub init_obs: Option<E::Obs>,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: Vec<f64>,
        is_terminated: Vec<i8>,
        is_truncated: Vec<i8>,
        info: E::Info,
        init_obs: Option<E::Obs>,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
            info,
            init_obs,
        }
    }

    #[inline]
    /// Returns `true` if the episode ended in this step, by termination or
    /// truncation.
    pub fn is_done(&self) -> bool {
        self.is_terminated[0] == 1 || self.is_truncated[0] == 1
    }
}
