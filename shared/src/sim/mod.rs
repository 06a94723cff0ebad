//! Viewer random-walk simulation.
//!
//! The backend tick and the CLI dashboard advance stream metrics with the
//! same walk shape: a bounded uniform viewer delta clamped to a floor, plus
//! a small uniform watch-time increment. The two callers differ only in
//! their constants, so the step functions are pure over `&mut impl Rng` and
//! the parameters are passed in. Tests drive them with a seeded `StdRng`.

use rand::Rng;

/// Minimum viewer count the backend tick clamps to.
pub const BACKEND_VIEWER_FLOOR: u64 = 50;

/// Minimum viewer count the dashboard's local simulation clamps to.
pub const FRONTEND_VIEWER_FLOOR: u64 = 100;

/// Exclusive upper bound of the per-tick watch-time increment on the backend.
pub const BACKEND_WATCH_TIME_STEP: u64 = 5;

/// Exclusive upper bound of the per-tick watch-time increment on the dashboard.
pub const FRONTEND_WATCH_TIME_STEP: u64 = 10;

/// Applies one viewer walk step: a uniform delta in [-100, 100), with the
/// result clamped to `floor`.
pub fn step_viewers(rng: &mut impl Rng, current: u64, floor: u64) -> u64 {
    let delta = rng.gen_range(-100_i64..100);
    let next = i64::try_from(current).unwrap_or(i64::MAX).saturating_add(delta);
    let floor = i64::try_from(floor).unwrap_or(i64::MAX);

    #[allow(clippy::cast_sign_loss)]
    {
        next.max(floor) as u64
    }
}

/// Draws one watch-time increment in [0, `max_step`).
pub fn watch_time_increment(rng: &mut impl Rng, max_step: u64) -> u64 {
    rng.gen_range(0..max_step)
}

/// Resamples the dashboard's total-viewers card uniformly in [5000, 15000).
pub fn resample_total_viewers(rng: &mut impl Rng) -> u64 {
    rng.gen_range(5000..15000)
}

/// Draws a demo average watch time in [120, 300) seconds.
pub fn sample_avg_watch_time(rng: &mut impl Rng) -> f64 {
    rng.gen_range(120.0..300.0)
}

/// Draws a demo retention rate in [60, 90) percent.
pub fn sample_retention_rate(rng: &mut impl Rng) -> f64 {
    rng.gen_range(60.0..90.0)
}

/// Draws a demo engagement score in [70, 95).
pub fn sample_engagement_score(rng: &mut impl Rng) -> f64 {
    rng.gen_range(70.0..95.0)
}
