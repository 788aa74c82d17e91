//! Types for recording values obtained during evaluation runs.
//!
//! A [`Record`] is a map from string keys to [`RecordValue`]s. Environments
//! attach one to every step, and [`Recorder`] implementations decide what
//! happens to them: [`BufferedRecorder`] keeps them in memory for later
//! inspection, while [`NullRecorder`] discards them.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
