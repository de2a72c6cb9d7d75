//! Domain-critical regression tests for jzazbz.
//!
//! These tests target specific classes of bugs rather than happy paths.
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::color::{Color, LinearRgb, Srgb};
    use crate::gradient::Gradient;

    // ========================================================================
    // GAP 1: The inverse pipeline must actually invert the forward pipeline
    // ========================================================================

    /// If this breaks, it means: one of the hard-coded inverse matrices no
    /// longer matches its forward counterpart. A single flipped sign in the
    /// L'M'S' -> XYZ matrix tints every round-tripped color (white comes
    /// back as #f5ffff) while grays near black still look fine.
    #[test]
    fn test_round_trip_within_one_lsb() {
        let mut worst = 0i32;
        let mut worst_color = [0u8; 3];

        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let hex = format!("#{r:02x}{g:02x}{b:02x}");
                    let back = Srgb::from(Color::from_hex(&hex)).to_bytes();
                    for (orig, got) in [r, g, b].into_iter().zip(back) {
                        let err = (i32::from(orig) - i32::from(got)).abs();
                        if err > worst {
                            worst = err;
                            worst_color = [r, g, b];
                        }
                    }
                }
            }
        }

        assert!(
            worst <= 1,
            "REGRESSION: round trip error {worst} LSB for {:?}",
            worst_color
        );
    }

    #[test]
    fn test_white_round_trips_exactly() {
        assert_eq!(Color::from_hex("#ffffff").hex(), "#ffffff");
        assert_eq!(Color::from_hex("#fff").hex(), "#ffffff");
    }

    // ========================================================================
    // GAP 2: hex() is gamma-encoded, rgba() is linear
    // ========================================================================

    /// If this breaks, it means: someone "unified" the two output forms.
    /// Consumers of rgba() expect linear-light channels; hex() must stay
    /// gamma-encoded so it round-trips with hex input.
    #[test]
    fn test_output_gamma_asymmetry() {
        let gray = Color::from_hex("#808080");
        assert_eq!(gray.hex(), "#808080");

        let [r, _, _, a] = gray.rgba();
        let gamma_encoded = u16::from(0x80u8) * 257;
        assert!(
            r < gamma_encoded / 2,
            "REGRESSION: rgba() returned {r}, looks gamma-encoded (expected linear ~14146)"
        );
        assert_eq!(a, 0xFFFF);

        let expected = LinearRgb::from(Srgb::from_u8(0x80, 0x80, 0x80)).to_u16()[0];
        assert!((i32::from(r) - i32::from(expected)).abs() <= 1);
    }

    // ========================================================================
    // GAP 3: Gradients blend in JzAzBz, not in RGB
    // ========================================================================

    /// If this breaks, it means: the gradient midpoint is computed in sRGB
    /// (giving #800080, a dark purple) instead of the perceptual space.
    #[test]
    fn test_midpoint_is_not_srgb_average() {
        let gradient = Gradient::new(&["#ff0000", "#0000ff"], &[]);
        let mid = gradient.color_at(1, 2);
        assert_ne!(mid.hex(), "#800080");
        assert_ne!(mid.hex(), "#7f007f");

        let [r, _, b] = Srgb::from(mid).to_bytes();
        assert!(r > 0x80 && b > 0x80, "midpoint {} is too dark", mid.hex());
    }

    /// If this breaks, it means: gradient sampling drifted at the ends, so a
    /// rendered bar no longer starts and ends on the configured colors.
    #[test]
    fn test_gradient_endpoints_round_trip_to_input() {
        let stops = ["#ff5f6d", "#ffc371", "#47b8e0", "#0b132b"];
        let gradient = Gradient::new(&stops, &[]);

        for width in [1, 2, 3, 80, 1000] {
            assert_eq!(gradient.color_at(0, width).hex(), stops[0]);
            assert_eq!(gradient.color_at(width, width).hex(), stops[3]);
        }
    }

    /// If this breaks, it means: blending started recomputing equal
    /// components and a gradient of one repeated color shows noise.
    #[test]
    fn test_repeated_stop_color_is_flat() {
        let gradient = Gradient::new(&["#3a7bd5", "#3a7bd5", "#3a7bd5"], &[]);
        let expected = Color::from_hex("#3a7bd5");
        for x in 0..=97 {
            assert_eq!(gradient.color_at(x, 97), expected, "drift at {x}");
        }
    }

    // ========================================================================
    // GAP 4: Implicit offsets keep the i/n spacing
    // ========================================================================

    /// If this breaks, it means: implicit offsets were "fixed" to i/(n-1),
    /// which shifts every configured three-stop gradient.
    #[test]
    fn test_three_stop_implicit_middle_at_one_third() {
        let gradient = Gradient::new(&["#ff0000", "#00ff00", "#0000ff"], &[]);
        assert_eq!(gradient.stops()[1].offset(), 1.0 / 3.0);
        assert_eq!(gradient.sample(1.0 / 3.0), Color::from_hex("#00ff00"));
    }

    // ========================================================================
    // GAP 5: Sharing a gradient across threads
    // ========================================================================

    #[test]
    fn test_gradient_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Gradient>();
        assert_send_sync::<Color>();

        let gradient = std::sync::Arc::new(Gradient::new(&["#000", "#fff"], &[]));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let gradient = std::sync::Arc::clone(&gradient);
                std::thread::spawn(move || gradient.color_at(i, 3))
            })
            .collect();
        let results: Vec<Color> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results, gradient.colors(4));
    }
}
