//! Evaluation of policies.
use crate::{Env, Policy};
use anyhow::Result;
mod default_evaluator;
pub use default_evaluator::DefaultEvaluator;

/// Evaluate a [`Policy`].
pub trait Evaluator<E: Env> {
    /// Evaluate a [`Policy`] and return the evaluation value.
    ///
    /// Any internal mode of `policy`, like a train/eval switch, is the
    /// caller's business; the evaluator only samples actions.
    fn evaluate<P: Policy<E>>(&mut self, policy: &mut P) -> Result<f32>;
}
