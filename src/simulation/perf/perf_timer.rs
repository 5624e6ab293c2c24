//! Lap clock for step timings: one clock per tick, one lap per pass.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    (to - from).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_between(from: Stamp, to: Stamp) -> f64 {
    to.saturating_duration_since(from).as_secs_f64() * 1000.0
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    origin: Stamp,
    last_lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let t = now();
        PerfTimer { origin: t, last_lap: t }
    }

    /// Milliseconds since the previous lap (or since start)
    pub(crate) fn lap(&mut self) -> f64 {
        let t = now();
        let ms = ms_between(self.last_lap, t);
        self.last_lap = t;
        ms
    }

    /// Milliseconds since start; does not end the current lap
    pub(crate) fn total_ms(&self) -> f64 {
        ms_between(self.origin, now())
    }
}
