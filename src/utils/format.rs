// file: src/utils/format.rs
// description: human readable sizes and dates for listings
// reference: https://docs.rs/chrono

use chrono::NaiveDate;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Scales by 1024 up to GB, rounded to two decimals without trailing zeros.
pub fn format_file_size(size: Option<u64>) -> String {
    let bytes = match size {
        Some(bytes) if bytes > 0 => bytes,
        _ => return "Unknown size".to_string(),
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "Unknown date".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(None), "Unknown size");
        assert_eq!(format_file_size(Some(0)), "Unknown size");
        assert_eq!(format_file_size(Some(512)), "512 Bytes");
        assert_eq!(format_file_size(Some(2048)), "2 KB");
        assert_eq!(format_file_size(Some(1536)), "1.5 KB");
        assert_eq!(format_file_size(Some(1_234_567)), "1.18 MB");
        assert_eq!(format_file_size(Some(5 * 1024 * 1024 * 1024)), "5 GB");
    }

    #[test]
    fn test_file_size_stops_at_gb() {
        assert_eq!(format_file_size(Some(2 * 1024_u64.pow(4))), "2048 GB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2025, 1, 24)),
            "Jan 24, 2025"
        );
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 5)), "Mar 5, 2024");
        assert_eq!(format_date(None), "Unknown date");
    }
}
