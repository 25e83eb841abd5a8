/// Investment size floor in EUR. Amounts below this are treated as the
/// floor itself before the log transform (ln of non-positive values is
/// undefined, so the raw amount is clamped first).
pub const SIZE_FLOOR_EUR: f64 = 1_500.0;

/// Investment size ceiling in EUR; maps to a size factor of 1.0.
pub const SIZE_CEILING_EUR: f64 = 50_000_000.0;

/// Saturating clamp: identity within [lo, hi], pinned to the bound outside.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    x.max(lo).min(hi)
}

/// Log-scale size normalization: EUR 1,500 -> 0.0, EUR 50,000,000 -> 1.0.
///
/// Ticket sizes span four orders of magnitude; the log interpolation
/// compresses that into a bounded proxy for regulatory scrutiny and
/// governance maturity. Callers must reject non-positive or non-finite
/// amounts first; positive amounts below the floor clamp to the floor.
pub fn investment_size_factor(amount_eur: f64) -> f64 {
    let lo = SIZE_FLOOR_EUR.ln();
    let hi = SIZE_CEILING_EUR.ln();
    clamp((amount_eur.max(SIZE_FLOOR_EUR).ln() - lo) / (hi - lo), 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_range() {
        assert_eq!(clamp(50.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp(150.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_size_factor_at_floor() {
        assert_eq!(investment_size_factor(1_500.0), 0.0);
    }

    #[test]
    fn test_size_factor_at_ceiling() {
        assert_eq!(investment_size_factor(50_000_000.0), 1.0);
    }

    #[test]
    fn test_size_factor_below_floor_clamps_up() {
        assert_eq!(investment_size_factor(100.0), 0.0);
    }

    #[test]
    fn test_size_factor_above_ceiling_saturates() {
        assert_eq!(investment_size_factor(900_000_000.0), 1.0);
    }

    #[test]
    fn test_size_factor_midpoint_is_log_scaled() {
        // Geometric mean of floor and ceiling lands exactly at 0.5.
        let mid = (1_500.0f64 * 50_000_000.0).sqrt();
        let f = investment_size_factor(mid);
        assert!((f - 0.5).abs() < 1e-9, "got {}", f);
    }

    #[test]
    fn test_size_factor_monotonic() {
        let a = investment_size_factor(10_000.0);
        let b = investment_size_factor(100_000.0);
        let c = investment_size_factor(1_000_000.0);
        assert!(a < b && b < c);
    }
}
