//! Franka Kitchen environment adapter for relay.
//!
//! The kitchen benchmark puts a robot arm in front of a kitchen counter
//! with eight manipulable elements, the [`SubTask`]s. The physics
//! simulation stays behind the [`KitchenBackend`] trait; [`KitchenEnv`]
//! adapts it to the [`Env`](relay_core::Env) interface and adds the
//! benchmark bookkeeping:
//!
//! * selection of the task variant ([`KitchenTask`]) by name,
//! * completion flags of the eight subtasks, accumulated per episode,
//! * truncation of episodes after [`MAX_EPISODE_STEPS`] steps,
//! * episode information for logging ([`KitchenEnv::episode_info`]).
//!
//! [`NoGoalKitchenEnv`] wraps [`KitchenEnv`] and strips the goal part from
//! observations.
//!
//! Here is an example of running the mixed task with a random policy and
//! the scripted backend from [`util::test`]:
//!
//! ```
//! use anyhow::Result;
//! use relay_core::{DefaultEvaluator, Evaluator as _};
//! use relay_kitchen_env::util::test::{env_config, Env, RandomPolicy};
//!
//! fn main() -> Result<()> {
//!     fastrand::seed(42);
//!
//!     let env_config = env_config("mixed");
//!     let mut policy = RandomPolicy;
//!
//!     // Two episodes, each reset with its episode index
//!     let _ = DefaultEvaluator::<Env>::new(&env_config, 0, 2)?.evaluate(&mut policy)?;
//!
//!     Ok(())
//! }
//! ```
mod act;
mod backend;
mod env;
mod evaluator;
mod no_goal;
mod obs;
mod space;
mod task;
pub mod util;
pub use act::{KitchenAct, ACT_DIM};
pub use backend::{BackendStep, KitchenBackend};
pub use env::{KitchenEnv, KitchenEnvConfig, MAX_EPISODE_STEPS};
pub use evaluator::KitchenEvaluator;
pub use no_goal::NoGoalKitchenEnv;
pub use obs::{KitchenObs, OBS_DIM, STATE_DIM};
pub use space::BoxSpace;
pub use task::{KitchenTask, SolvedSubTasks, SubTask, N_SUBTASKS};
