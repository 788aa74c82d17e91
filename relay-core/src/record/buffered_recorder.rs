use super::{Record, Recorder};

/// A recorder that keeps all records in memory.
///
/// Useful in tests and evaluation runs where the records are inspected
/// after the interaction loop has finished.
#[derive(Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
}

impl BufferedRecorder {
    /// Constructs a recorder with an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: Vec::default(),
        }
    }

    /// Returns an iterator over the buffered records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.buf.iter()
    }

    /// Returns the number of buffered records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer has no records.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    /// Pushes the record to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }
}
