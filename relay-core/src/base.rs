//! Base traits of the interaction loop.
mod env;
mod policy;
mod step;
pub use env::Env;
pub use policy::{Configurable, Policy};
use std::fmt::Debug;
pub use step::{Info, Step};

/// An observation of an environment.
///
/// The library supports non-vectorized environments only, so [`Obs::len`]
/// is expected to return 1.
pub trait Obs: Clone + Debug {
    /// Returns a placeholder observation, e.g. for a skipped reset.
    ///
    /// Its content carries no meaning and is never inspected.
    fn dummy(n: usize) -> Self;

    /// Returns the number of observations held in the object.
    fn len(&self) -> usize;
}

/// An action of an environment.
pub trait Act: Clone + Debug {}
