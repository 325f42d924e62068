use std::time::Duration;

pub const MIN_SPEED: f64 = 0.0;
pub const MAX_SPEED: f64 = 2.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Duration of one phase at speed 1.0.
pub const DEFAULT_BASE_DURATION: Duration = Duration::from_millis(1000);

/// Clamp a user-supplied speed into `[MIN_SPEED, MAX_SPEED]`.
///
/// Non-finite input falls back to `DEFAULT_SPEED`. This is the presentation
/// boundary; the controller stores whatever it receives.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_nan() {
        return DEFAULT_SPEED;
    }
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// Driver duration for one phase run: `base / speed`.
///
/// Returns `None` when the run would never complete (speed is zero, negative,
/// or not finite). No division happens in that case.
pub fn phase_duration(base: Duration, speed: f64) -> Option<Duration> {
    if !speed.is_finite() || speed <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(base.as_secs_f64() / speed).ok()
}
