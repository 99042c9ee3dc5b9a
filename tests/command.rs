mod tests {
    use ambilight_engine::command::{self, Command, CommandError, ConfigUpdate};
    use ambilight_engine::{ColorOrder, RenderMode, Rgb, StripConfig};

    #[test]
    fn test_parse_mode_static_with_color() {
        let command =
            command::parse(b"{\"cmd\":\"mode\",\"value\":\"static\",\"color\":[255,0,0]}")
                .unwrap();
        assert_eq!(
            command,
            Command::Mode {
                mode: RenderMode::Static,
                color: Some(Rgb { r: 255, g: 0, b: 0 }),
            }
        );
    }

    #[test]
    fn test_parse_mode_static_without_color_is_rejected() {
        let result = command::parse(b"{\"cmd\":\"mode\",\"value\":\"static\"}");
        assert_eq!(result, Err(CommandError::MissingColor));
    }

    #[test]
    fn test_parse_mode_names() {
        for (name, mode) in [
            ("rainbow", RenderMode::Rainbow),
            ("ambilight", RenderMode::Ambilight),
            ("off", RenderMode::Off),
        ] {
            let line = format!("{{\"cmd\":\"mode\",\"value\":\"{name}\"}}");
            let command = command::parse(line.as_bytes()).unwrap();
            assert_eq!(command, Command::Mode { mode, color: None });
        }
    }

    #[test]
    fn test_parse_unknown_mode() {
        let result = command::parse(b"{\"cmd\":\"mode\",\"value\":\"disco\"}");
        assert_eq!(result, Err(CommandError::UnknownMode));
    }

    #[test]
    fn test_parse_mode_without_value_is_malformed() {
        let result = command::parse(b"{\"cmd\":\"mode\"}");
        assert_eq!(result, Err(CommandError::Malformed));
    }

    #[test]
    fn test_parse_config_subset() {
        let command =
            command::parse(b"{\"cmd\":\"config\",\"num_leds\":120,\"color_order\":\"RGB\"}")
                .unwrap();
        assert_eq!(
            command,
            Command::Config(ConfigUpdate {
                num_leds: Some(120),
                color_order: Some(ColorOrder::Rgb),
                brightness: None,
                smoothing: None,
                max_milliamps: None,
            })
        );
    }

    #[test]
    fn test_parse_config_unknown_order() {
        let result = command::parse(b"{\"cmd\":\"config\",\"color_order\":\"rbgw\"}");
        assert_eq!(result, Err(CommandError::UnknownColorOrder));
    }

    #[test]
    fn test_parse_malformed_json() {
        assert_eq!(command::parse(b"{not json}"), Err(CommandError::Malformed));
        assert_eq!(command::parse(b""), Err(CommandError::Malformed));
    }

    #[test]
    fn test_parse_unknown_command() {
        let result = command::parse(b"{\"cmd\":\"reboot\"}");
        assert_eq!(result, Err(CommandError::UnknownCommand));
    }

    #[test]
    fn test_config_update_apply_reports_change() {
        let mut config = StripConfig::default();
        let update = ConfigUpdate {
            brightness: Some(200),
            ..ConfigUpdate::default()
        };
        assert!(update.apply(&mut config));
        assert_eq!(config.brightness, 200);

        // Applying the same values again changes nothing.
        assert!(!update.apply(&mut config));
    }

    #[test]
    fn test_color_order_apply() {
        let color = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(ColorOrder::Rgb.apply(color), Rgb { r: 1, g: 2, b: 3 });
        assert_eq!(ColorOrder::Grb.apply(color), Rgb { r: 2, g: 1, b: 3 });
        assert_eq!(ColorOrder::Brg.apply(color), Rgb { r: 3, g: 1, b: 2 });
    }

    #[test]
    fn test_color_order_parse_case_insensitive() {
        assert_eq!(ColorOrder::parse_from_str("GRB"), Some(ColorOrder::Grb));
        assert_eq!(ColorOrder::parse_from_str("brg"), Some(ColorOrder::Brg));
        assert_eq!(ColorOrder::parse_from_str("rgbw"), None);
    }
}
