//! Unit tests for duty-core primitives.

#[cfg(test)]
mod time {
    use crate::{Hour, Minute, WallTime};

    #[test]
    fn hour_in_range() {
        assert_eq!(Hour::new(0).unwrap().get(), 0);
        assert_eq!(Hour::new(23).unwrap().get(), 23);
    }

    #[test]
    fn hour_out_of_range_rejected() {
        assert!(Hour::new(24).is_err());
        assert!(Hour::new(255).is_err());
    }

    #[test]
    fn minute_bounds() {
        assert!(Minute::new(59).is_ok());
        assert!(Minute::new(60).is_err());
    }

    #[test]
    fn hour_all_covers_day() {
        let hours: Vec<u8> = Hour::all().map(Hour::get).collect();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], 0);
        assert_eq!(hours[23], 23);
    }

    #[test]
    fn walltime_new_validates_both_fields() {
        assert!(WallTime::new(12, 30).is_ok());
        assert!(WallTime::new(24, 0).is_err());
        assert!(WallTime::new(0, 60).is_err());
    }

    #[test]
    fn walltime_ordering() {
        let a = WallTime::new(8, 59).unwrap();
        let b = WallTime::new(9, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn from_unix_secs_utc() {
        // 2021-01-01 10:30:00 UTC = 1609497000
        let t = WallTime::from_unix_secs(1_609_497_000, 0);
        assert_eq!(t.hour.get(), 10);
        assert_eq!(t.minute.get(), 30);
    }

    #[test]
    fn from_unix_secs_positive_offset_wraps_day() {
        // 23:30 UTC + 1 h = 00:30 local next day.
        let t = WallTime::from_unix_secs(23 * 3_600 + 30 * 60, 3_600);
        assert_eq!(t.hour.get(), 0);
        assert_eq!(t.minute.get(), 30);
    }

    #[test]
    fn from_unix_secs_negative_offset_before_epoch() {
        // Epoch at UTC-5: 19:00 the previous day.
        let t = WallTime::from_unix_secs(0, -5 * 3_600);
        assert_eq!(t.hour.get(), 19);
        assert_eq!(t.minute.get(), 0);
    }

    #[test]
    fn display_formats() {
        let t = WallTime::new(7, 5).unwrap();
        assert_eq!(t.to_string(), "07:05");
    }
}

#[cfg(test)]
mod config {
    use crate::{ControllerConfig, DutyCycleConfig};

    #[test]
    fn duty_cycle_valid() {
        let d = DutyCycleConfig::new(5, 5).unwrap();
        assert_eq!(d.period(), 10);
    }

    #[test]
    fn duty_cycle_zero_work_rejected() {
        assert!(DutyCycleConfig::new(0, 5).is_err());
    }

    #[test]
    fn duty_cycle_zero_sleep_allowed() {
        let d = DutyCycleConfig::new(60, 0).unwrap();
        assert_eq!(d.period(), 60);
    }

    #[test]
    fn controller_config_empty_hours_rejected() {
        let duty = DutyCycleConfig::new(5, 5).unwrap();
        assert!(ControllerConfig::new(vec![], duty).is_err());
    }

    #[test]
    fn controller_config_bad_hour_rejected() {
        let duty = DutyCycleConfig::new(5, 5).unwrap();
        assert!(ControllerConfig::new(vec![8, 24], duty).is_err());
    }

    #[test]
    fn default_hours_span_evening_and_midnight() {
        let hours = ControllerConfig::default_hours();
        assert!(hours.contains(&8));
        assert!(hours.contains(&23));
        assert!(hours.contains(&0));
        assert!(!hours.contains(&7));
        assert_eq!(hours.len(), 17);
    }

    #[test]
    fn all_day_hours_complete() {
        assert_eq!(ControllerConfig::all_day_hours().len(), 24);
    }
}
