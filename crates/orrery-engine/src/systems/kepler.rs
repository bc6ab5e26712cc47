// Kepler's-equation machinery. Pure math, no engine dependencies.
//
// Everything here is f64: mean anomalies grow without bound (they are never
// pre-wrapped) and f32 would visibly drift after a few simulated centuries.

use std::f64::consts::TAU;

/// Newton–Raphson iteration count. Fixed rather than tolerance-terminated:
/// the solver runs per body per frame, and a constant count keeps it
/// branch-free and allocation-free with a bounded, accepted error.
pub const KEPLER_ITERATIONS: usize = 5;

/// Solve Kepler's equation `E − e·sin(E) = M` for the eccentric anomaly.
///
/// `mean_anomaly` may be any real value; `eccentricity` must be in [0, 1)
/// (guaranteed by catalog validation). Always returns a value; with the
/// fixed iteration count the residual stays below 1e-3 across e <= 0.99.
///
/// The iteration is seeded with `E₀ = M + e·sin(M)` on the wrapped anomaly;
/// a bare `E₀ = M` seed makes Newton overshoot wildly near perihelion at
/// high eccentricity and five iterations cannot recover.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let wrapped = mean_anomaly.rem_euclid(TAU);
    let mut ecc_anomaly = wrapped + eccentricity * wrapped.sin();
    for _ in 0..KEPLER_ITERATIONS {
        let delta = ecc_anomaly - eccentricity * ecc_anomaly.sin() - wrapped;
        let derivative = 1.0 - eccentricity * ecc_anomaly.cos();
        ecc_anomaly -= delta / derivative;
    }
    // Undo the wrap so the returned anomaly tracks the caller's revolution count.
    ecc_anomaly + (mean_anomaly - wrapped)
}

/// True anomaly from eccentric anomaly, via the atan2 half-angle form.
/// Agrees with `2·atan(√((1+e)/(1−e))·tan(E/2))` wherever only cos/sin of
/// the result are consumed, and is defined at the tangent singularities.
pub fn true_anomaly(ecc_anomaly: f64, eccentricity: f64) -> f64 {
    2.0 * ((1.0 + eccentricity).sqrt() * (ecc_anomaly / 2.0).sin())
        .atan2((1.0 - eccentricity).sqrt() * (ecc_anomaly / 2.0).cos())
}

/// Distance from the focus: `r = a·(1 − e·cos E)`.
pub fn focal_radius(semi_major_axis: f64, eccentricity: f64, ecc_anomaly: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * ecc_anomaly.cos())
}

/// Convert days from J2000 to (year, month, day).
/// J2000.0 = January 1, 2000, 12:00 TT (Julian Day 2451545.0).
pub fn days_to_date(days_from_j2000: f64) -> (i32, u32, u32) {
    let jd = days_from_j2000 + 2_451_545.0;
    let z = (jd + 0.5).floor() as i64;
    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d - (30.6001 * e as f64).floor() as i64) as u32;
    let month = if e < 14 { (e - 1) as u32 } else { (e - 13) as u32 };
    let year = if month > 2 {
        (c - 4716) as i32
    } else {
        (c - 4715) as i32
    };

    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residual(ecc_anomaly: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
        (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly).abs()
    }

    #[test]
    fn circular_orbit_is_identity() {
        // For e=0, eccentric anomaly = mean anomaly
        let ea = solve_kepler(1.0, 0.0);
        assert!((ea - 1.0).abs() < 1e-12);
        let ea = solve_kepler(-7.5, 0.0);
        assert!((ea - -7.5).abs() < 1e-12);
    }

    #[test]
    fn residual_bounded_over_grid() {
        // e in [0, 0.99], M in [-10π, 10π]: residual under 1e-3 after the
        // fixed iteration count.
        for ei in 0..100 {
            let e = ei as f64 / 100.0;
            for mi in -200..=200 {
                let m = mi as f64 * 10.0 * std::f64::consts::PI / 200.0;
                let ea = solve_kepler(m, e);
                let r = residual(ea, e, m);
                assert!(r < 1e-3, "residual {r} at e={e}, M={m}");
            }
        }
    }

    #[test]
    fn mercury_eccentricity_converges_tightly() {
        let m = 1.5;
        let ea = solve_kepler(m, 0.2056);
        assert!(residual(ea, 0.2056, m) < 1e-12);
    }

    #[test]
    fn full_revolution_returns_to_start() {
        let e = 0.0167;
        let ea0 = solve_kepler(0.0, e);
        let ea1 = solve_kepler(TAU, e);
        assert!((ea1 - ea0 - TAU).abs() < 1e-9);
    }

    #[test]
    fn true_anomaly_matches_tangent_form_through_cos_sin() {
        let e = 0.2056;
        for i in 0..48 {
            let ea = (i as f64 / 48.0) * TAU;
            let v = true_anomaly(ea, e);
            let tan_form = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ea / 2.0).tan()).atan();
            assert!((v.cos() - tan_form.cos()).abs() < 1e-9, "cos mismatch at E={ea}");
            assert!((v.sin() - tan_form.sin()).abs() < 1e-9, "sin mismatch at E={ea}");
        }
    }

    #[test]
    fn focal_radius_spans_perihelion_to_aphelion() {
        let (a, e) = (10.0, 0.3);
        assert!((focal_radius(a, e, 0.0) - a * (1.0 - e)).abs() < 1e-12);
        assert!((focal_radius(a, e, std::f64::consts::PI) - a * (1.0 + e)).abs() < 1e-12);
    }

    #[test]
    fn date_j2000_epoch() {
        let (year, month, _day) = days_to_date(0.0);
        assert_eq!(year, 2000);
        assert_eq!(month, 1);
    }

    #[test]
    fn date_known_offsets() {
        // March 20, 2000 ≈ J2000 + 79 days
        let (year, month, day) = days_to_date(79.0);
        assert_eq!((year, month), (2000, 3));
        assert!((20..=21).contains(&day), "day = {day}");

        let (year, _, _) = days_to_date(-365.0);
        assert_eq!(year, 1999);
    }
}
