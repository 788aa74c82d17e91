mod config;
pub use config::KitchenEnvConfig;

use crate::{
    BackendStep, BoxSpace, KitchenAct, KitchenBackend, KitchenObs, KitchenTask, SolvedSubTasks,
};
use anyhow::Result;
use log::{info, trace};
use ndarray::ArrayD;
use num_traits::AsPrimitive;
use relay_core::{
    record::{Record, RecordValue::Scalar},
    Env, Obs, Step,
};

/// Maximum number of steps of a kitchen episode.
pub const MAX_EPISODE_STEPS: usize = 280;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// A wrapper of the Franka Kitchen benchmark environment family.
///
/// The wrapper selects the underlying benchmark environment from the task
/// name in its configuration, counts episode steps and truncates episodes
/// at [`MAX_EPISODE_STEPS`], and accumulates the completion flags of the
/// eight kitchen subtasks over each episode. Rewards are widened to `f64`
/// whatever the reward type of the backend is.
///
/// ```mermaid
/// graph LR
///     A(NoGoalKitchenEnv) -- strips goals --> B(KitchenEnv)
///     B -- adapts --> C(KitchenBackend)
/// ```
///
/// After an episode has ended, [`KitchenEnv::episode_info`] summarizes it
/// for logging. The same record is merged into the [`Record`] returned by
/// the terminal [`step`](Env::step), so it survives the automatic reset of
/// [`step_with_reset`](Env::step_with_reset).
pub struct KitchenEnv<B: KitchenBackend> {
    backend: B,

    task: KitchenTask,

    observation_space: BoxSpace,

    action_space: BoxSpace,

    // Completion flags of the current episode.
    solved_subtasks: SolvedSubTasks,

    count_steps: usize,

    max_episode_steps: usize,

    episode_return: f64,

    // Consumed by the first reset.
    initial_seed: Option<i64>,
}

fn to_f32(obs: ArrayD<f64>) -> ArrayD<f32> {
    obs.mapv(|v| v as f32)
}

impl<B: KitchenBackend> Env for KitchenEnv<B> {
    type Config = KitchenEnvConfig;
    type Obs = KitchenObs;
    type Act = KitchenAct;
    type Info = ();

    /// Builds the backend selected by the task name of `config`.
    ///
    /// * `seed` - Seed of the random number generator of the backend,
    ///   consumed at the first reset.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let task = KitchenTask::from_name(&config.task);
        info!("Kitchen task '{}' maps to environment {}", task, task.env_id());

        let backend = B::build(task.env_id(), seed)?;
        let observation_space = backend.observation_space();
        let action_space = backend.action_space();

        Ok(Self {
            backend,
            task,
            observation_space,
            action_space,
            solved_subtasks: SolvedSubTasks::new(),
            count_steps: 0,
            max_episode_steps: config.max_episode_steps,
            episode_return: 0.0,
            initial_seed: Some(seed),
        })
    }

    /// Resets the backend, clearing all subtask completion flags and the
    /// step counter first.
    ///
    /// With `is_done` of `Some(&vec![0])` nothing is reset and a dummy
    /// observation is returned.
    fn reset(&mut self, is_done: Option<&Vec<i8>>) -> Result<Self::Obs> {
        trace!("KitchenEnv::reset()");

        let reset = match is_done {
            None => true,
            Some(v) => {
                debug_assert_eq!(v.len(), 1);
                v[0] != 0
            }
        };

        if !reset {
            return Ok(KitchenObs::dummy(1));
        }

        self.solved_subtasks.reset();
        self.count_steps = 0;
        self.episode_return = 0.0;

        let seed = self.initial_seed.take();
        let obs = self.backend.reset(seed)?;
        Ok(to_f32(obs).into())
    }

    /// Runs a step of the backend.
    ///
    /// The subtasks the backend reports as completed are folded into the
    /// completion flags of the episode; the remaining backend diagnostics
    /// are forwarded in the returned [`Record`]. After
    /// [`max_episode_steps`](KitchenEnv::max_episode_steps) steps, the
    /// step is marked truncated regardless of the backend.
    fn step(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        trace!("KitchenEnv::step()");

        let BackendStep {
            obs,
            reward,
            is_terminated,
            is_truncated,
            completed_tasks,
            info,
        } = self.backend.step(&a.action);

        let obs: KitchenObs = to_f32(obs).into();
        let reward: f64 = reward.as_();
        let is_terminated = vec![if is_terminated { 1 } else { 0 }];
        let mut is_truncated = vec![if is_truncated { 1 } else { 0 }];

        self.solved_subtasks.mark(&completed_tasks);
        self.episode_return += reward;

        self.count_steps += 1;
        if self.count_steps >= self.max_episode_steps {
            is_truncated[0] = 1;
        }

        let mut record = info;
        if (is_terminated[0] | is_truncated[0]) == 1 {
            record.merge_inplace(self.episode_info());
        }

        (
            Step::new(
                obs,
                a.clone(),
                vec![reward],
                is_terminated,
                is_truncated,
                (),
                None,
            ),
            record,
        )
    }

    fn step_with_reset(&mut self, a: &Self::Act) -> (Step<Self>, Record) {
        let (step, record) = self.step(a);
        debug_assert_eq!(step.is_terminated.len(), 1);
        let step = if step.is_done() {
            let init_obs = self.reset(None).unwrap();
            Step {
                act: step.act,
                obs: step.obs,
                reward: step.reward,
                is_terminated: step.is_terminated,
                is_truncated: step.is_truncated,
                info: step.info,
                init_obs: Some(init_obs),
            }
        } else {
            step
        };

        (step, record)
    }

    /// Resets the environment with `ix` as the seed of the backend.
    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        self.initial_seed = Some(ix as _);
        self.reset(None)
    }
}

impl<B: KitchenBackend> KitchenEnv<B> {
    /// Identifier of the environment family.
    pub fn id(&self) -> &'static str {
        "kitchen"
    }

    /// The task variant of this instance.
    pub fn task(&self) -> KitchenTask {
        self.task
    }

    /// Id of the underlying benchmark environment.
    pub fn env_id(&self) -> &'static str {
        self.task.env_id()
    }

    /// Maximum number of steps of an episode.
    pub fn max_episode_steps(&self) -> usize {
        self.max_episode_steps
    }

    /// Bounds of the observation space.
    pub fn observation_space(&self) -> &BoxSpace {
        &self.observation_space
    }

    /// Bounds of the action space.
    pub fn action_space(&self) -> &BoxSpace {
        &self.action_space
    }

    /// Information of the current episode: its length, its return, the
    /// episode summary of the backend, and one binary completion flag per
    /// subtask.
    ///
    /// This is intended to be called between the end of an episode and the
    /// next reset.
    pub fn episode_info(&self) -> Record {
        let mut record = Record::from_slice(&[
            ("episode_length", Scalar(self.count_steps as _)),
            ("episode_return", Scalar(self.episode_return as _)),
        ]);
        record.merge_inplace(self.backend.episode_info());
        record.merge_inplace(self.solved_subtasks.to_record());
        record
    }
}
