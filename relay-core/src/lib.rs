#![warn(missing_docs)]
//! Core interfaces for environments, policies and evaluation.
//!
//! This crate defines the traits that tie an environment to the rest of a
//! reinforcement learning program: [`Env`] for the environment itself,
//! [`Policy`] for action selection, [`Recorder`](record::Recorder) for
//! metrics, and [`Evaluator`] for evaluation runs. Concrete environments
//! like `relay-kitchen-env` implement [`Env`] and emit [`Step`] objects,
//! each carrying an observation, a reward and the episode-end flags.
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
