//! Unit tests for size grouping and date rendering

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use scantree::services::format::{
        UNKNOWN_DATE, format_timestamp, format_timestamp_in, format_with_commas,
    };
    use std::time::{Duration, SystemTime};

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(12_345), "12,345");
        assert_eq!(format_with_commas(123_456), "123,456");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
        assert_eq!(format_with_commas(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn renders_calendar_date() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_568_000_000);
        assert_eq!(format_timestamp_in(time, &Utc), "Sep  9, 2019 03:33:20");
    }

    #[test]
    fn pads_two_digit_days_without_leading_space() {
        // 2021-12-25 07:05:09 UTC
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_640_415_909);
        assert_eq!(format_timestamp_in(time, &Utc), "Dec 25, 2021 07:05:09");
    }

    #[test]
    fn out_of_range_time_renders_placeholder() {
        let far = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000_000_000_000);
        assert_eq!(format_timestamp_in(far, &Utc), UNKNOWN_DATE);
        assert_eq!(format_timestamp(far), UNKNOWN_DATE);
        assert_eq!(UNKNOWN_DATE.len(), "Sep  9, 2019 03:33:20".len());
    }

    #[test]
    fn renders_pre_epoch_time() {
        // 1969-12-31 23:59:58.5 UTC
        let time = SystemTime::UNIX_EPOCH - Duration::from_millis(1_500);
        assert_eq!(format_timestamp_in(time, &Utc), "Dec 31, 1969 23:59:58");
    }
}
