use foundation::time::Time;

/// Per-display-frame metadata.
///
/// The runtime is driven by caller-supplied timestamps rather than a fixed
/// step; the index exists so events can be ordered and correlated across
/// skipped frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Timestamp at the start of the frame (milliseconds).
    pub time: Time,
}

impl Frame {
    pub fn new(index: u64, time_ms: f64) -> Self {
        Self {
            index,
            time: Time(time_ms),
        }
    }

    pub fn next(self, time_ms: f64) -> Self {
        Self::new(self.index + 1, time_ms)
    }
}
