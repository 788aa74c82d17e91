use anyhow::Result;
use ndarray::Array1;
use relay_core::{Configurable, Evaluator, Policy};
use relay_kitchen_env::{
    util::test::ScriptedBackend, KitchenAct, KitchenEnv, KitchenEnvConfig, KitchenEvaluator,
    KitchenObs, ACT_DIM,
};
use serde::Deserialize;

type Obs = KitchenObs;
type Act = KitchenAct;
type EnvConfig = KitchenEnvConfig;
type Env = KitchenEnv<ScriptedBackend>;

#[derive(Clone, Deserialize)]
struct RandomPolicyConfig {
    pub scale: f32,
}

struct RandomPolicy {
    scale: f32,
}

impl Policy<Env> for RandomPolicy {
    fn sample(&mut self, _: &Obs) -> Act {
        let action = (0..ACT_DIM)
            .map(|_| self.scale * (2.0 * fastrand::f32() - 1.0))
            .collect::<Vec<_>>();
        Array1::from(action).into_dyn().into()
    }
}

impl Configurable<Env> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Self {
        Self {
            scale: config.scale,
        }
    }
}

fn env_config(task: String) -> EnvConfig {
    EnvConfig::default().task(task)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    fastrand::seed(42);

    // Misaligned task with the scripted backend
    let env_config = env_config("misaligned".to_string());

    // Random policy with full action scale
    let mut policy = RandomPolicy::build(RandomPolicyConfig { scale: 1.0 });

    // Mean number of solved subtasks over five episodes
    let _ = KitchenEvaluator::<Env>::new(&env_config, 0, 5)?.evaluate(&mut policy)?;

    Ok(())
}
