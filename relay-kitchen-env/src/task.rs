//! Task variants and subtasks of the kitchen environment.
use relay_core::record::{Record, RecordValue};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Task variants of the kitchen environment.
///
/// Each variant selects a goal sequence of the underlying benchmark
/// environment. Task names are resolved with [`KitchenTask::from_name`],
/// which never fails: unrecognized names fall back to [`KitchenTask::Mixed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum KitchenTask {
    /// Microwave - Light - Slider - Hinge.
    #[strum(serialize = "misaligned")]
    Misaligned,

    /// Left hinge cabinet.
    #[strum(serialize = "newskill")]
    NewSkill,

    /// Microwave - Kettle - Bottom burner - Light.
    #[strum(serialize = "mixed")]
    Mixed,
}

impl Default for KitchenTask {
    fn default() -> Self {
        Self::Mixed
    }
}

impl KitchenTask {
    /// Resolves a task name.
    ///
    /// Any name other than `"misaligned"` and `"newskill"`, including the
    /// empty string, resolves to [`KitchenTask::Mixed`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "misaligned" => Self::Misaligned,
            "newskill" => Self::NewSkill,
            _ => Self::Mixed,
        }
    }

    /// Returns the id of the underlying benchmark environment.
    pub fn env_id(&self) -> &'static str {
        match self {
            Self::Misaligned => "kitchen-mlsh-v0",
            Self::NewSkill => "kitchen-newskill-v0",
            Self::Mixed => "kitchen-mixed-v0",
        }
    }
}

/// Number of subtasks of the kitchen environment.
pub const N_SUBTASKS: usize = 8;

/// The subtasks of the kitchen environment.
///
/// The display name of a subtask is used as the key of its completion flag
/// in episode records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum SubTask {
    #[strum(serialize = "microwave")]
    Microwave,
    #[strum(serialize = "kettle")]
    Kettle,
    #[strum(serialize = "slide cabinet")]
    SlideCabinet,
    #[strum(serialize = "hinge cabinet")]
    HingeCabinet,
    #[strum(serialize = "bottom burner")]
    BottomBurner,
    #[strum(serialize = "light switch")]
    LightSwitch,
    #[strum(serialize = "top burner")]
    TopBurner,
    #[strum(serialize = "left hinge cabinet")]
    LeftHingeCabinet,
}

/// Completion flags of the kitchen subtasks within one episode.
///
/// Flags are monotone within an episode: once a subtask has been recorded
/// as completed, it stays completed until [`SolvedSubTasks::reset`].
#[derive(Debug, Clone, Default)]
pub struct SolvedSubTasks {
    flags: [bool; N_SUBTASKS],
}

impl SolvedSubTasks {
    /// Constructs with all flags cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all flags.
    pub fn reset(&mut self) {
        self.flags = [false; N_SUBTASKS];
    }

    /// Sets the flags of the given subtasks.
    ///
    /// Subtasks not contained in `completed` keep their current flag.
    pub fn mark(&mut self, completed: &[SubTask]) {
        for (i, subtask) in SubTask::iter().enumerate() {
            if completed.contains(&subtask) {
                self.flags[i] = true;
            }
        }
    }

    /// Returns the flag of the given subtask.
    pub fn contains(&self, subtask: SubTask) -> bool {
        SubTask::iter()
            .zip(self.flags.iter())
            .any(|(s, f)| s == subtask && *f)
    }

    /// Returns the number of completed subtasks.
    pub fn n_solved(&self) -> usize {
        self.flags.iter().filter(|f| **f).count()
    }

    /// Returns a record with one binary field per subtask, keyed by the
    /// subtask name.
    pub fn to_record(&self) -> Record {
        let mut record = Record::empty();
        for (subtask, flag) in SubTask::iter().zip(self.flags.iter()) {
            let v = if *flag { 1.0 } else { 0.0 };
            record.insert(subtask.to_string(), RecordValue::Scalar(v));
        }
        record
    }
}
