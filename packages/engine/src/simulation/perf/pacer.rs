//! Frame pacing
//!
//! The host calls in once per animation frame with its own timestamp. Physics and
//! rendering each sit behind a `Pacer`; a gate that is late fires once and restarts
//! its interval from `now`, so missed ticks are dropped rather than queued.

const RATE_WINDOW_MS: f64 = 1000.0;

#[derive(Clone, Copy, Debug)]
pub struct Pacer {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Pacer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_ms: None,
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// `true` at most once per interval. The first call always fires.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        let due = match self.last_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }
}

/// Events per second, recomputed once per one-second window.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameCounter {
    window_start_ms: Option<f64>,
    count: u32,
    rate: f64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, now_ms: f64) {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            self.count = 1;
            return;
        };

        self.count += 1;
        let delta = now_ms - start;
        if delta >= RATE_WINDOW_MS {
            self.rate = self.count as f64 * 1000.0 / delta;
            self.count = 0;
            self.window_start_ms = Some(now_ms);
        }
    }

    /// Rate from the last completed window, 0 before the first one closes.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pacer_skips_instead_of_queueing() {
        let mut p = Pacer::new(15.0);
        assert!(p.ready(0.0));
        assert!(!p.ready(10.0));
        assert!(p.ready(15.0));
        // Very late frame: one tick, interval restarts from now.
        assert!(p.ready(100.0));
        assert!(!p.ready(110.0));
        assert!(p.ready(115.0));
    }

    #[test]
    fn zero_interval_fires_every_call() {
        let mut p = Pacer::new(0.0);
        assert!(p.ready(1.0));
        assert!(p.ready(1.0));
    }

    #[test]
    fn frame_counter_reports_per_second_rate() {
        let mut c = FrameCounter::new();
        assert_eq!(c.rate(), 0.0);
        for i in 0..=60 {
            c.record(i as f64 * 1000.0 / 60.0);
        }
        assert!((c.rate() - 61.0).abs() < 1e-9);
    }
}
