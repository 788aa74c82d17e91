//! Observation and action spaces.
use ndarray::{ArrayD, Axis, Slice};

/// A box in `R^n`, given by lower and upper bounds on each element.
#[derive(Debug, Clone)]
pub struct BoxSpace {
    low: ArrayD<f32>,
    high: ArrayD<f32>,
}

impl BoxSpace {
    /// Constructs a space from bound arrays of the same shape.
    pub fn new(low: ArrayD<f32>, high: ArrayD<f32>) -> Self {
        assert_eq!(low.shape(), high.shape());
        Self { low, high }
    }

    /// Lower bounds.
    pub fn low(&self) -> &ArrayD<f32> {
        &self.low
    }

    /// Upper bounds.
    pub fn high(&self) -> &ArrayD<f32> {
        &self.high
    }

    /// The shape of the space.
    pub fn shape(&self) -> &[usize] {
        self.low.shape()
    }

    /// Returns the space over the first `n` elements of this space.
    pub fn slice_first(&self, n: usize) -> Self {
        Self {
            low: self
                .low
                .slice_axis(Axis(0), Slice::from(..n))
                .to_owned(),
            high: self
                .high
                .slice_axis(Axis(0), Slice::from(..n))
                .to_owned(),
        }
    }
}
