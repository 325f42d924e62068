//! Linear progress drivers.
//!
//! A driver advances one value in `[0, 1]` toward a target bound over a fixed
//! duration. It is pumped cooperatively: the owner calls [`ProgressDriver::step`]
//! with elapsed time and receives at most one [`Tick`] back. Nothing runs in
//! the background, so tests can step a driver synthetically.

use std::time::Duration;

/// Which bound a finished run arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DriverStatus {
    /// Reached 1.0.
    Completed,
    /// Reached 0.0.
    Dismissed,
}

/// One driver update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Set on the tick that lands on a bound; the driver is idle afterwards.
    pub status: Option<DriverStatus>,
}

/// Capability the playback controller needs from its clock.
pub trait ProgressDriver {
    /// Restart the driver at `from`, heading to `to` over `duration`.
    ///
    /// `None` means the run never arrives: every step reports `from`.
    /// Starting while a run is in flight replaces that run.
    fn start(&mut self, from: f64, to: f64, duration: Option<Duration>);

    /// Advance by `dt`. Returns `None` when idle.
    fn step(&mut self, dt: Duration) -> Option<Tick>;

    fn value(&self) -> f64;

    /// Bound the current run is heading to.
    fn target(&self) -> f64;

    fn is_running(&self) -> bool;

    /// Stop without reporting a bound.
    fn cancel(&mut self);
}

impl<D: ProgressDriver + ?Sized> ProgressDriver for Box<D> {
    fn start(&mut self, from: f64, to: f64, duration: Option<Duration>) {
        (**self).start(from, to, duration)
    }

    fn step(&mut self, dt: Duration) -> Option<Tick> {
        (**self).step(dt)
    }

    fn value(&self) -> f64 {
        (**self).value()
    }

    fn target(&self) -> f64 {
        (**self).target()
    }

    fn is_running(&self) -> bool {
        (**self).is_running()
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

/// Linear interpolation between two bounds over a duration.
#[derive(Clone, Debug, Default)]
pub struct LinearDriver {
    from: f64,
    to: f64,
    value: f64,
    duration: Option<Duration>,
    elapsed: Duration,
    running: bool,
}

impl LinearDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn fraction(&self) -> f64 {
        match self.duration {
            None => 0.0,
            Some(d) if d.is_zero() => 1.0,
            Some(d) => (self.elapsed.as_secs_f64() / d.as_secs_f64()).min(1.0),
        }
    }
}

impl ProgressDriver for LinearDriver {
    fn start(&mut self, from: f64, to: f64, duration: Option<Duration>) {
        self.from = from;
        self.to = to;
        self.value = from;
        self.duration = duration;
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    fn step(&mut self, dt: Duration) -> Option<Tick> {
        if !self.running {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        let fraction = self.fraction();
        if fraction >= 1.0 {
            self.value = self.to;
            self.running = false;
            let status = if self.to >= 1.0 {
                DriverStatus::Completed
            } else {
                DriverStatus::Dismissed
            };
            return Some(Tick {
                value: self.value,
                status: Some(status),
            });
        }

        self.value = self.from + (self.to - self.from) * fraction;
        Some(Tick {
            value: self.value,
            status: None,
        })
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn target(&self) -> f64 {
        self.to
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn cancel(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUARTER: Duration = Duration::from_millis(250);

    #[test]
    fn idle_driver_does_not_tick() {
        let mut d = LinearDriver::new();
        assert!(!d.is_running());
        assert_eq!(d.step(QUARTER), None);
    }

    #[test]
    fn forward_run_completes_at_one() {
        let mut d = LinearDriver::new();
        d.start(0.0, 1.0, Some(Duration::from_secs(1)));

        let values: Vec<Tick> = std::iter::from_fn(|| d.step(QUARTER)).collect();

        assert_eq!(
            values.iter().map(|t| t.value).collect::<Vec<_>>(),
            vec![0.25, 0.5, 0.75, 1.0]
        );
        assert_eq!(values.last().unwrap().status, Some(DriverStatus::Completed));
        assert!(values[..3].iter().all(|t| t.status.is_none()));
        assert!(!d.is_running());
    }

    #[test]
    fn reverse_run_is_dismissed_at_zero() {
        let mut d = LinearDriver::new();
        d.start(1.0, 0.0, Some(Duration::from_secs(1)));

        assert_eq!(d.step(QUARTER).unwrap().value, 0.75);
        let last = d.step(Duration::from_secs(5)).unwrap();
        assert_eq!(last.value, 0.0);
        assert_eq!(last.status, Some(DriverStatus::Dismissed));
    }

    #[test]
    fn restart_replaces_in_flight_run() {
        let mut d = LinearDriver::new();
        d.start(0.0, 1.0, Some(Duration::from_secs(1)));
        d.step(QUARTER);
        d.start(1.0, 0.0, Some(Duration::from_secs(1)));

        assert_eq!(d.value(), 1.0);
        assert_eq!(d.target(), 0.0);
        assert_eq!(d.step(QUARTER).unwrap().value, 0.75);
    }

    #[test]
    fn unbounded_run_holds_its_start_value() {
        let mut d = LinearDriver::new();
        d.start(0.0, 1.0, None);

        for _ in 0..100 {
            let t = d.step(Duration::from_secs(10)).unwrap();
            assert_eq!(t.value, 0.0);
            assert_eq!(t.status, None);
        }
        assert!(d.is_running());
    }

    #[test]
    fn zero_duration_lands_on_first_step() {
        let mut d = LinearDriver::new();
        d.start(0.0, 1.0, Some(Duration::ZERO));
        let t = d.step(Duration::ZERO).unwrap();
        assert_eq!(t.value, 1.0);
        assert_eq!(t.status, Some(DriverStatus::Completed));
    }

    #[test]
    fn cancel_stops_without_status() {
        let mut d = LinearDriver::new();
        d.start(0.0, 1.0, Some(Duration::from_secs(1)));
        d.cancel();
        assert!(!d.is_running());
        assert_eq!(d.step(QUARTER), None);
    }
}
