use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::duration::TickDuration;
use crate::elements::TimeElements;
use crate::format::render;
use crate::resolution::Resolution;

/// A thread-safe stopwatch over the monotonic clock.
///
/// Construction starts the watch: `started_at == ended_at == now` and the
/// running flag is set. While running, elapsed queries sample the clock;
/// after [`stop`](Self::stop) they read the stored end point, so repeated
/// reads of a stopped watch return identical values.
///
/// Timing relies on `Instant`, which std guarantees to be monotonic, so
/// elapsed durations are never negative. No clamping is done: a broken
/// clock source is out of contract rather than silently masked.
///
/// Every operation takes the instance mutex exactly once. The elapsed
/// computation lives in a lock-free helper on the locked state so that
/// [`format_elapsed`](Self::format_elapsed) does not re-enter the lock
/// through [`elapsed`](Self::elapsed).
#[derive(Debug)]
pub struct Stopwatch {
    inner: Mutex<Inner>,
}

#[derive(Debug, Clone, Copy)]
struct Inner {
    started_at: Instant,
    ended_at: Instant,
    running: bool,
}

impl Inner {
    fn elapsed_raw(&self) -> Duration {
        if self.running {
            self.started_at.elapsed()
        } else {
            self.ended_at.duration_since(self.started_at)
        }
    }
}

impl Stopwatch {
    /// Creates a stopwatch that is already running.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            inner: Mutex::new(Inner {
                started_at: now,
                ended_at: now,
                running: true,
            }),
        }
    }

    /// Restarts the watch: both instants move to now, the flag is set.
    pub fn start(&self) {
        let mut inner = self.inner.lock();
        let now = Instant::now();
        inner.started_at = now;
        inner.ended_at = now;
        inner.running = true;
    }

    /// Stops the watch. Unconditional: calling `stop` on an already
    /// stopped watch re-samples the end point (idempotent in state, not in
    /// timestamp).
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        inner.ended_at = Instant::now();
        inner.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.lock().running
    }

    /// The last `start` (or construction) time point.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.inner.lock().started_at
    }

    /// The recorded end point if stopped; a fresh `Instant::now()` while
    /// running.
    #[must_use]
    pub fn end_time(&self) -> Instant {
        let inner = self.inner.lock();
        if inner.running {
            Instant::now()
        } else {
            inner.ended_at
        }
    }

    /// Elapsed time since the last start, truncated to `resolution`.
    /// Samples the clock while running; reads the stored end point once
    /// stopped.
    #[must_use]
    pub fn elapsed(&self, resolution: Resolution) -> TickDuration {
        let inner = self.inner.lock();
        TickDuration::from_std(inner.elapsed_raw(), resolution)
    }

    /// Elapsed time rendered via [`render`], with `resolution` as both the
    /// truncation target and the formatting origin.
    #[must_use]
    pub fn format_elapsed(&self, resolution: Resolution) -> String {
        let inner = self.inner.lock();
        let elapsed = TickDuration::from_std(inner.elapsed_raw(), resolution);
        render(&TimeElements::split(elapsed), resolution)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
