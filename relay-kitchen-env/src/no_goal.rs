//! Goal-stripping wrapper of the kitchen environment.
use crate::{
    BoxSpace, KitchenAct, KitchenBackend, KitchenEnv, KitchenEnvConfig, KitchenObs, KitchenTask,
    STATE_DIM,
};
use anyhow::Result;
use ndarray::{Axis, Slice};
use relay_core::{record::Record, Env, Step};

/// Kitchen environment with the goal stripped from observations.
///
/// Kitchen observations carry the goal configuration in their second half.
/// This wrapper hides it: observations returned from resets and steps are
/// truncated to their first half, and the observation space covers the
/// first [`STATE_DIM`] elements of the wrapped space only. Rewards, the
/// episode-end flags and records pass through unchanged.
///
/// The wrapped observation length is expected to be even.
pub struct NoGoalKitchenEnv<B: KitchenBackend> {
    env: KitchenEnv<B>,
    observation_space: BoxSpace,
}

/// Truncates an observation to the first half of its last axis.
fn strip_goal(obs: KitchenObs) -> KitchenObs {
    let ax = Axis(obs.obs.ndim() - 1);
    let n = obs.obs.len_of(ax);
    debug_assert_eq!(n % 2, 0);
    KitchenObs {
        obs: obs.obs.slice_axis(ax, Slice::from(..n / 2)).to_owned(),
    }
}

fn strip_step<B: KitchenBackend>(step: Step<KitchenEnv<B>>) -> Step<NoGoalKitchenEnv<B>> {
    Step {
        act: step.act,
        obs: strip_goal(step.obs),
        reward: step.reward,
        is_terminated: step.is_terminated,
        is_truncated: step.is_truncated,
        info: step.info,
        init_obs: step.init_obs.map(strip_goal),
    }
}

impl<B: KitchenBackend> Env for NoGoalKitchenEnv<B> {
    type Config = KitchenEnvConfig;
    type Obs = KitchenObs;
    type Act = KitchenAct;
    type Info = ();

    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let env = KitchenEnv::build(config, seed)?;
        let observation_space = env.observation_space().slice_first(STATE_DIM);
        Ok(Self {
            env,
            observation_space,
        })
    }

    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (step, record) = self.env.step(a);
        (strip_step(step), record)
    }

    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        Ok(strip_goal(self.env.reset(is_done)?))
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (step, record) = self.env.step_with_reset(a);
        (strip_step(step), record)
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        Ok(strip_goal(self.env.reset_with_index(ix)?))
    }
}

impl<B: KitchenBackend> NoGoalKitchenEnv<B> {
    /// Identifier of the environment family.
    pub fn id(&self) -> &'static str {
        self.env.id()
    }

    /// The task variant of this instance.
    pub fn task(&self) -> KitchenTask {
        self.env.task()
    }

    /// Maximum number of steps of an episode.
    pub fn max_episode_steps(&self) -> usize {
        self.env.max_episode_steps()
    }

    /// Bounds of the goal-stripped observation space.
    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    /// Bounds of the action space.
    pub fn action_space(&self) -> &BoxSpace {
        self.env.action_space()
    }

    /// Information of the current episode.
    ///
    /// See [`KitchenEnv::episode_info`].
    pub fn episode_info(&self) -> Record {
        self.env.episode_info()
    }

    /// The wrapped environment.
    pub fn inner(&self) -> &KitchenEnv<B> {
        &self.env
    }
}
