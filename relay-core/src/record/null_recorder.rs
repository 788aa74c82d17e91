use super::{Record, Recorder};

/// A recorder that drops every record.
///
/// Useful where a recorder is required but its output is not.
pub struct NullRecorder {}

impl Recorder for NullRecorder {
    fn write(&mut self, _record: Record) {}
}
