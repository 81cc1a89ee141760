use instant::Instant;
use std::time::Duration;

/// Elapsed-time source for the `time` uniform.
///
/// The epoch is fixed lazily by the first sample, so the first frame always
/// reads zero regardless of how long setup took.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    epoch: Option<Instant>,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.epoch.is_some()
    }

    /// Seconds since the first call. A clock that reads earlier than the
    /// epoch reports zero instead of going negative.
    pub fn elapsed(&mut self, now: Instant) -> f32 {
        let epoch = *self.epoch.get_or_insert(now);
        let since = if now > epoch { now - epoch } else { Duration::ZERO };
        since.as_secs_f32()
    }
}
