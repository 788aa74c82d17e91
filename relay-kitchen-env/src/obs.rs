//! Observation type of the kitchen environment.
use ndarray::{ArrayD, IxDyn};
use relay_core::Obs;

/// Number of elements of a kitchen observation.
///
/// The first [`STATE_DIM`] elements describe the robot joints and the object
/// configuration, the remaining elements the goal configuration.
pub const OBS_DIM: usize = 60;

/// Number of elements of the state part of a kitchen observation.
pub const STATE_DIM: usize = 30;

/// A kitchen observation, held as an ndarray vector of [`OBS_DIM`]
/// elements.
#[derive(Clone, Debug)]
pub struct KitchenObs {
    /// The observation vector.
    pub obs: ArrayD<f32>,
}

impl From<ArrayD<f32>> for KitchenObs {
    fn from(obs: ArrayD<f32>) -> Self {
        Self { obs }
    }
}

impl Obs for KitchenObs {
    fn dummy(n: usize) -> Self {
        Self {
            obs: ArrayD::zeros(IxDyn(&[n, OBS_DIM])),
        }
    }

    fn len(&self) -> usize {
        1
    }
}
