mod tests {
    use embassy_time::{Duration, Instant};

    use ambilight_engine::{
        ConfigStore, Engine, FrameScheduler, IntentQueue, OutputDriver, Rgb, StripConfig,
    };

    struct DefaultStore;

    impl ConfigStore for DefaultStore {
        fn load(&mut self) -> Option<StripConfig> {
            Some(StripConfig {
                num_leds: 2,
                ..StripConfig::default()
            })
        }

        fn save(&mut self, _config: &StripConfig) {}
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for &mut RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn scheduler<'a>(
        intents: &'a IntentQueue<4>,
        driver: &'a mut RecordingDriver,
    ) -> FrameScheduler<'a, &'a mut RecordingDriver, DefaultStore, 16, 4> {
        let engine: Engine<DefaultStore, 16, 4> =
            Engine::new(DefaultStore, intents.consumer());
        FrameScheduler::with_frame_duration(engine, driver, Duration::from_millis(10))
    }

    #[test]
    fn test_tick_writes_one_frame_and_paces() {
        let intents = IntentQueue::<4>::new();
        let mut driver = RecordingDriver::default();
        let mut scheduler = scheduler(&intents, &mut driver);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(10));
        assert_eq!(result.next_deadline, Instant::from_millis(20));

        drop(scheduler);
        assert_eq!(driver.frames.len(), 2);
        assert_eq!(driver.frames[0].len(), 2);
    }

    #[test]
    fn test_stall_skips_backlog_instead_of_catching_up() {
        let intents = IntentQueue::<4>::new();
        let mut driver = RecordingDriver::default();
        let mut scheduler = scheduler(&intents, &mut driver);

        scheduler.tick(Instant::from_millis(0));

        // A long stall: the deadline resets to now rather than replaying
        // the missed frames.
        let result = scheduler.tick(Instant::from_millis(500));
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_behind_schedule_sleeps_zero() {
        let intents = IntentQueue::<4>::new();
        let mut driver = RecordingDriver::default();
        let mut scheduler = scheduler(&intents, &mut driver);

        scheduler.tick(Instant::from_millis(0));
        // One frame late, but within the drift window: no sleep, deadline
        // stays on the original grid.
        let result = scheduler.tick(Instant::from_millis(25));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }
}
