//! Financial suggestion formulas.
//!
//! Scholarship: percentile-of-cap allocation: `(KPI/100) x cap x
//! (10000 / roster_size)` dollars. NIL: readiness score scaled by
//! confidence against the per-player share of the pool.

/// Dollar value of one full equivalency unit at roster parity.
pub const SCHOLARSHIP_UNIT: f64 = 10_000.0;

/// Pro market value per KPI point.
pub const MARKET_MULTIPLIER: f64 = 15_000.0;

/// Flat adjustment applied to the college KPI for the pro outlook.
pub const PRO_KPI_ADJUSTMENT: f32 = 5.0;

/// Suggested scholarship dollars for a KPI under a program's cap.
pub fn scholarship_suggestion(kpi: f32, scholarship_cap: f32, roster_size: u32) -> u32 {
    if roster_size == 0 {
        return 0;
    }
    let amount =
        (kpi as f64 / 100.0) * scholarship_cap as f64 * (SCHOLARSHIP_UNIT / roster_size as f64);
    amount.round().max(0.0) as u32
}

/// Suggested NIL dollars for a readiness score at a given confidence.
pub fn nil_value_suggestion(
    readiness_score: f32,
    confidence: f32,
    nil_pool: f64,
    roster_size: u32,
) -> u32 {
    if roster_size == 0 {
        return 0;
    }
    let amount = readiness_score as f64
        * (confidence.clamp(0.0, 100.0) as f64 / 100.0)
        * (nil_pool / roster_size as f64);
    amount.round().max(0.0) as u32
}

/// Projected pro market value in dollars.
pub fn market_value(kpi: f32) -> u32 {
    (kpi as f64 * MARKET_MULTIPLIER).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scholarship_literal_case() {
        // KPI 82, cap 12, roster 12: round((82/100) * 12 * (10000/12)) = 8200.
        assert_eq!(scholarship_suggestion(82.0, 12.0, 12), 8_200);
    }

    #[test]
    fn test_nil_literal_case() {
        // Readiness 3, confidence 85, pool 50000, roster 12:
        // 3 * 0.85 * 4166.67 = 10625.
        assert_eq!(nil_value_suggestion(3.0, 85.0, 50_000.0, 12), 10_625);
    }

    #[test]
    fn test_zero_cap_program() {
        // D3 programs carry a zero cap; the suggestion collapses to zero.
        assert_eq!(scholarship_suggestion(95.0, 0.0, 12), 0);
    }

    #[test]
    fn test_zero_roster_size_is_harmless() {
        assert_eq!(scholarship_suggestion(80.0, 12.0, 0), 0);
        assert_eq!(nil_value_suggestion(3.0, 80.0, 50_000.0, 0), 0);
    }

    #[test]
    fn test_market_value() {
        assert_eq!(market_value(82.0), 1_230_000);
    }

    proptest! {
        #[test]
        fn prop_scholarship_monotone_in_kpi(
            lo in 0.0f32..100.0,
            delta in 0.0f32..50.0,
            cap in 0.0f32..15.0,
        ) {
            let hi = (lo + delta).min(100.0);
            prop_assert!(
                scholarship_suggestion(hi, cap, 12) >= scholarship_suggestion(lo, cap, 12)
            );
        }

        #[test]
        fn prop_nil_monotone_in_confidence(
            lo in 0.0f32..100.0,
            delta in 0.0f32..50.0,
            readiness in 1.0f32..4.0,
        ) {
            let hi = (lo + delta).min(100.0);
            prop_assert!(
                nil_value_suggestion(readiness, hi, 50_000.0, 12)
                    >= nil_value_suggestion(readiness, lo, 50_000.0, 12)
            );
        }
    }
}
