// Recording stopwatch state
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingState {
    pub is_recording: bool,
    pub elapsed_seconds: u64,
}

impl RecordingState {
    /// Elapsed time as `MM:SS`; minutes keep counting past 59.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.elapsed_seconds / 60,
            self.elapsed_seconds % 60
        )
    }
}
