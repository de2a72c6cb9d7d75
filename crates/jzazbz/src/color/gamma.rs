//! sRGB transfer function (IEC 61966-2-1)
//!
//! Exact `f64` formulas. The round trip through JzAzBz needs the full
//! precision, so there is no lookup table here.

/// Decode a gamma-encoded sRGB channel to linear light.
#[inline]
pub fn linearize(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light channel with the sRGB gamma curve.
#[inline]
pub fn delinearize(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(linearize(0.0), 0.0);
        assert!((linearize(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(delinearize(0.0), 0.0);
        assert!((delinearize(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_piecewise_segments() {
        // Linear toe below the threshold
        assert_eq!(linearize(0.04), 0.04 / 12.92);
        assert_eq!(delinearize(0.003), 12.92 * 0.003);

        // sRGB 0.5 -> linear 0.214041...
        assert!((linearize(0.5) - 0.214_041_140_5).abs() < 1e-9);
        // linear 0.5 -> sRGB 0.735356...
        assert!((delinearize(0.5) - 0.735_356_983_1).abs() < 1e-9);
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = linearize(0.0);
        for i in 1..=1000 {
            let curr = linearize(i as f64 / 1000.0);
            assert!(curr >= prev, "linearize not monotonic at {i}");
            prev = curr;
        }

        let mut prev = delinearize(0.0);
        for i in 1..=1000 {
            let curr = delinearize(i as f64 / 1000.0);
            assert!(curr >= prev, "delinearize not monotonic at {i}");
            prev = curr;
        }
    }

    #[test]
    fn test_inverse_pair() {
        for i in 0..=255 {
            let v = i as f64 / 255.0;
            assert!(
                (delinearize(linearize(v)) - v).abs() < 1e-12,
                "gamma round trip drifted for {i}"
            );
        }
    }
}
