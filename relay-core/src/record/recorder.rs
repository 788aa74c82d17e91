use super::Record;

/// Process records provided with [`Recorder::write`].
pub trait Recorder {
    /// Writes a record to the output of the recorder.
    fn write(&mut self, record: Record);
}
