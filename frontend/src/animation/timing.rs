//! Pure time and interpolation helpers shared by counters and scroll effects.
//!
//! Timestamps are `DOMHighResTimeStamp` milliseconds as handed to
//! `requestAnimationFrame` callbacks.

/// Fraction of `duration_ms` elapsed since `started_at`, clamped to [0.0, 1.0].
///
/// A zero, negative or NaN duration counts as already finished, as does a
/// NaN elapsed time.
#[inline]
pub fn progress(started_at: f64, now: f64, duration_ms: f64) -> f64 {
    if !(duration_ms > 0.0) {
        return 1.0;
    }
    let t = (now - started_at) / duration_ms;
    if t.is_nan() {
        return 1.0;
    }
    t.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Counter value shown at fraction `t`: `floor(t * (to - from) + from)`.
///
/// At `t == 1.0` this is exactly `to`.
#[inline]
pub fn interpolate_floor(from: i64, to: i64, t: f64) -> i64 {
    if t >= 1.0 {
        return to;
    }
    let span = to as f64 - from as f64;
    (t * span + from as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(100.0, 50.0, 1000.0), 0.0);
        assert!((progress(100.0, 600.0, 1000.0) - 0.5).abs() < 1e-9);
        assert_eq!(progress(100.0, 5000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_progress_nan_duration_is_finished() {
        assert_eq!(progress(0.0, 0.0, f64::NAN), 1.0);
        assert_eq!(progress(0.0, 500.0, -f64::NAN), 1.0);
        assert_eq!(progress(f64::NAN, 10.0, 1000.0), 1.0);
    }

    #[test]
    fn test_progress_infinite_duration_never_advances() {
        assert_eq!(progress(0.0, 1e12, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(1.0, 0.8, 0.0) - 1.0).abs() < 1e-9);
        assert!((lerp(1.0, 0.8, 0.5) - 0.9).abs() < 1e-9);
        assert!((lerp(1.0, 0.8, 1.0) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_floor() {
        assert_eq!(interpolate_floor(0, 350, 0.0), 0);
        assert_eq!(interpolate_floor(0, 350, 0.5), 175);
        assert_eq!(interpolate_floor(0, 350, 0.999), 349);
        assert_eq!(interpolate_floor(0, 350, 1.0), 350);
    }

    #[test]
    fn test_interpolate_floor_extreme_bounds() {
        assert_eq!(interpolate_floor(i64::MIN, i64::MAX, 0.0), i64::MIN);
        assert_eq!(interpolate_floor(i64::MAX, i64::MIN, 1.0), i64::MIN);
        let mid = interpolate_floor(i64::MIN, i64::MAX, 0.5);
        assert!(mid.unsigned_abs() < 1 << 12, "{}", mid);
    }

    #[test]
    fn test_interpolate_floor_descending() {
        assert_eq!(interpolate_floor(100, 0, 0.0), 100);
        assert_eq!(interpolate_floor(100, 0, 0.255), 74);
        assert_eq!(interpolate_floor(100, 0, 1.0), 0);
    }
}
