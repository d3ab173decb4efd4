//! Scoped timing for the expensive build steps.

use std::time::Instant;

/// RAII timer that logs elapsed time on drop.
///
/// The clock is only read when the level is enabled, so an unconfigured logger
/// (as on `wasm32-unknown-unknown`, which has no `Instant`) costs nothing.
pub struct Timed {
    name: &'static str,
    start: Option<Instant>,
    level: log::Level,
}

impl Timed {
    /// Create a new timer that logs at DEBUG level.
    pub fn debug(name: &'static str) -> Self {
        let level = log::Level::Debug;
        let start = log::log_enabled!(level).then(|| {
            log::trace!("{}...", name);
            Instant::now()
        });
        Self { name, start, level }
    }
}

impl Drop for Timed {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::log!(self.level, "{}: {:.3?}", self.name, start.elapsed());
        }
    }
}
