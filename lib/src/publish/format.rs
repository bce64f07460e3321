use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::i18n::Language;

/// Formats dates in a site's time zone.
#[derive(Clone, Debug)]
pub struct SiteDateFormatter {
    time_zone: Tz,
    format: &'static str,
}

impl SiteDateFormatter {
    pub fn new(time_zone: Tz, format: &'static str) -> Self {
        Self { time_zone, format }
    }

    /// Date only, e.g. `Mar 14, 2024`.
    pub fn date(time_zone: Tz, language: Language) -> Self {
        Self::new(time_zone, language.date_format())
    }

    /// Date with time of day, e.g. `Mar 14, 2024, 3:09 PM`.
    pub fn date_time(time_zone: Tz, language: Language) -> Self {
        Self::new(time_zone, language.date_time_format())
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn format(&self, date: &DateTime<Utc>) -> String {
        date.with_timezone(&self.time_zone)
            .format(self.format)
            .to_string()
    }
}

/// Offset of `time_zone` from GMT at the given instant, in seconds.
pub fn seconds_from_gmt(time_zone: &Tz, date: &DateTime<Utc>) -> i32 {
    time_zone
        .offset_from_utc_datetime(&date.naive_utc())
        .fix()
        .local_minus_utc()
}

/// Whole-hour offset label: `UTC`, `UTC+5`, `UTC-8`.
///
/// Sub-hour remainders are truncated toward zero, so `+5:30` reads `UTC+5`.
pub fn offset_label(seconds_from_gmt: i32) -> String {
    let hours = seconds_from_gmt / 60 / 60;
    match hours {
        0 => "UTC".to_string(),
        h if h > 0 => format!("UTC+{}", h),
        h => format!("UTC{}", h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_site_time_zone() {
        let date = Utc.with_ymd_and_hms(2024, 3, 14, 23, 30, 0).unwrap();
        let warsaw = SiteDateFormatter::date_time(chrono_tz::Europe::Warsaw, Language::English);
        // UTC+1 in March before DST
        assert_eq!(warsaw.format(&date), "Mar 15, 2024, 12:30 AM");

        let utc = SiteDateFormatter::date(chrono_tz::UTC, Language::English);
        assert_eq!(utc.format(&date), "Mar 14, 2024");
    }

    #[test]
    fn offsets_follow_dst() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 10, 12, 0, 0).unwrap();
        let tz = chrono_tz::America::New_York;
        assert_eq!(seconds_from_gmt(&tz, &winter), -5 * 3600);
        assert_eq!(seconds_from_gmt(&tz, &summer), -4 * 3600);
    }

    #[test]
    fn labels_truncate_to_whole_hours() {
        assert_eq!(offset_label(0), "UTC");
        assert_eq!(offset_label(2 * 3600), "UTC+2");
        assert_eq!(offset_label(-8 * 3600), "UTC-8");
        assert_eq!(offset_label(5 * 3600 + 1800), "UTC+5");
        assert_eq!(offset_label(-(3 * 3600 + 1800)), "UTC-3");
        assert_eq!(offset_label(1800), "UTC");
    }
}
