//! Evaluator for the kitchen environment.
use anyhow::Result;
use relay_core::{Env, Evaluator, Policy};

/// An evaluator reporting the kitchen score.
///
/// The kitchen reward of a step is the number of subtasks completed so far
/// in the episode, which makes cumulative rewards meaningless. Where the
/// [`DefaultEvaluator`](relay_core::DefaultEvaluator) averages episode
/// returns, this evaluator averages the reward of the last step of each
/// episode, i.e. the final number of completed subtasks.
pub struct KitchenEvaluator<E: Env> {
    n_episodes: usize,
    env: E,
}

impl<E> Evaluator<E> for KitchenEvaluator<E>
where
    E: Env,
{
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<f32> {
        let mut r_total = 0f32;

        for ix in 0..self.n_episodes {
            let init_obs = self.env.reset_with_index(ix)?;
            r_total += self.run_episode(policy, init_obs)?;
        }

        Ok(r_total / self.n_episodes as f32)
    }
}

impl<E> KitchenEvaluator<E>
where
    E: Env,
{
    /// Constructs [`KitchenEvaluator`].
    ///
    /// The environment is built from `config` with `seed`. Each of the
    /// `n_episodes` evaluation episodes starts with an indexed reset.
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            env: E::build(config, seed)?,
        })
    }

    /// Runs one episode and returns its last reward.
    fn run_episode<P: Policy<E>>(&mut self, policy: &mut P, init_obs: E::Obs) -> Result<f32> {
        let mut r_last;
        let mut prev_obs = init_obs;

        loop {
            let act = policy.sample(&prev_obs);
            let (step, _) = self.env.step(&act);
            r_last = step.reward[0];
            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        Ok(r_last as f32)
    }
}
