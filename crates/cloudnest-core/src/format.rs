//! Display formatting

use chrono::{DateTime, Utc};

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte size, e.g. `1.5 KB`.
///
/// Unit selection is `floor(log1024(n))`, the value is rounded to two
/// decimals and trailing zeros are dropped, so whole multiples print
/// without a fraction.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[exponent])
}

/// Timestamp as shown in the file detail panel, e.g. `03 Mar 2025, 14:07`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d %b %Y, %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn whole_units_drop_the_fraction() {
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(5 * 1024 * 1024 * 1024), "5 GB");
    }

    #[test]
    fn fractional_sizes_keep_up_to_two_decimals() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1525), "1.49 KB");
        assert_eq!(format_bytes(2_621_440), "2.5 MB");
    }

    #[test]
    fn huge_sizes_stay_in_terabytes() {
        assert_eq!(format_bytes(1024_u64.pow(4)), "1 TB");
        assert_eq!(format_bytes(2048 * 1024_u64.pow(4)), "2048 TB");
    }

    #[test]
    fn timestamp_format_is_day_month_year() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 3, 14, 7, 0).unwrap();
        assert_eq!(format_timestamp(ts), "03 Mar 2025, 14:07");
    }
}
