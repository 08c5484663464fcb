//! Easing curves for camera moves.

/// Cubic ease-in-out over `[0, 1]`. Progress outside that range is clamped,
/// so a late tick never overshoots the destination.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        1.0 - (2.0 * (1.0 - t)).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert!((ease_in_out(0.0) - 0.0).abs() < 0.001);
        assert!((ease_in_out(0.5) - 0.5).abs() < 0.001);
        assert!((ease_in_out(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_ease_in_out_clamps_progress() {
        assert_eq!(ease_in_out(-0.5), 0.0);
        assert_eq!(ease_in_out(1.5), 1.0);
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut prev = ease_in_out(0.0);
        for i in 1..=100 {
            let v = ease_in_out(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
