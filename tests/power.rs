mod tests {
    use ambilight_engine::Rgb;
    use ambilight_engine::power::{apply_budget, estimate_milliamps, limit_scale};

    #[test]
    fn test_estimate_black_strip_is_quiescent_only() {
        let frame = [Rgb { r: 0, g: 0, b: 0 }; 10];
        assert_eq!(estimate_milliamps(&frame), 10);
    }

    #[test]
    fn test_estimate_full_white() {
        // 1 mA quiescent + 16 + 11 + 15 per full-white pixel.
        let frame = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }; 2];
        assert_eq!(estimate_milliamps(&frame), 86);
    }

    #[test]
    fn test_limit_scale_within_budget() {
        assert_eq!(limit_scale(100, 100), 255);
        assert_eq!(limit_scale(0, 100), 255);
    }

    #[test]
    fn test_limit_scale_over_budget() {
        assert_eq!(limit_scale(86, 10), 29);
        assert_eq!(limit_scale(1000, 0), 0);
    }

    #[test]
    fn test_apply_budget_scales_uniformly() {
        let mut frame = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }; 2];
        apply_budget(&mut frame, 10);
        assert!(estimate_milliamps(&frame) <= 10);
        for led in &frame {
            assert_eq!(led.r, led.g);
            assert_eq!(led.g, led.b);
        }
    }

    #[test]
    fn test_apply_budget_leaves_cheap_frames_alone() {
        let mut frame = [Rgb { r: 10, g: 20, b: 30 }; 4];
        let before = frame;
        apply_budget(&mut frame, 1500);
        assert_eq!(frame, before);
    }
}
