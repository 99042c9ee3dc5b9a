mod tests {
    use ambilight_engine::{blend8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_blend8_endpoints_exact() {
        for (a, b) in [(0u8, 255u8), (255, 0), (10, 20), (200, 199)] {
            assert_eq!(blend8(a, b, 0), a);
            assert_eq!(blend8(a, b, 255), b);
        }
    }
}
