//! Action type of the kitchen environment.
use ndarray::{ArrayD, IxDyn};
use relay_core::Act;

/// Number of elements of a kitchen action.
///
/// The action controls the seven robot joints and the two gripper fingers.
pub const ACT_DIM: usize = 9;

/// A kitchen action, held as an ndarray vector of [`ACT_DIM`] elements.
#[derive(Clone, Debug)]
pub struct KitchenAct {
    /// The action vector.
    pub action: ArrayD<f32>,
}

impl KitchenAct {
    /// Constructs an all-zero action.
    pub fn zero() -> Self {
        Self {
            action: ArrayD::zeros(IxDyn(&[ACT_DIM])),
        }
    }
}

impl From<ArrayD<f32>> for KitchenAct {
    fn from(action: ArrayD<f32>) -> Self {
        Self { action }
    }
}

impl Act for KitchenAct {}
