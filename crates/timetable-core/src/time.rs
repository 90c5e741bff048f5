//! Pure time arithmetic over "HH:MM" wall-clock strings.
//!
//! All grid layout works in minutes at a 1:1 minute-to-pixel scale, so the
//! parsed minute count doubles as a layout coordinate.

use crate::error::TimeError;

/// Minutes in a day; valid parse results are in `[0, MINUTES_PER_DAY)`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse an "HH:MM" string into minutes since midnight.
///
/// Accepts hours 0..=23 and minutes 0..=59, with or without zero padding
/// ("9:05" and "09:05" are equivalent).
pub fn parse_to_minutes(time: &str) -> Result<u32, TimeError> {
    let invalid = || TimeError::InvalidFormat(time.to_string());

    let (hours_str, minutes_str) = time.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours_str.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_str.trim().parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Duration in minutes from `start` to `end`.
///
/// Negative when `end` is at or before `start`; no ordering check is done
/// here so the same function serves preview and diagnostic callers. Range
/// validation belongs to the store.
pub fn duration_minutes(start: &str, end: &str) -> Result<i32, TimeError> {
    let start_min = parse_to_minutes(start)? as i32;
    let end_min = parse_to_minutes(end)? as i32;
    Ok(end_min - start_min)
}

/// Minutes between `time` and the start of the display window.
///
/// With the 1:1 scale this is used directly as the vertical pixel offset of
/// a class block in the day/week grid. Times before the window start yield
/// a negative offset.
pub fn display_offset(time: &str, window_start_hour: u32) -> Result<i32, TimeError> {
    let minutes = parse_to_minutes(time)? as i32;
    Ok(minutes - (window_start_hour * 60) as i32)
}

/// Format an hour/minute pair as a 12-hour clock label, e.g. "8:00 AM".
///
/// Midnight is "12:00 AM", noon is "12:00 PM".
pub fn format_display(hour: u32, minute: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {meridiem}")
}

/// Format minutes-since-midnight as a 12-hour clock label.
pub fn format_minutes(minutes: u32) -> String {
    format_display(minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_to_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_to_minutes("08:00").unwrap(), 480);
        assert_eq!(parse_to_minutes("9:05").unwrap(), 545);
        assert_eq!(parse_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["", "9", "24:00", "12:60", "ab:cd", "12:", ":30", "12:30:00"] {
            assert!(parse_to_minutes(bad).is_err(), "expected error for {bad:?}");
        }
    }

    #[test]
    fn duration_is_signed() {
        assert_eq!(duration_minutes("09:00", "10:30").unwrap(), 90);
        assert_eq!(duration_minutes("10:00", "09:00").unwrap(), -60);
        assert_eq!(duration_minutes("09:00", "09:00").unwrap(), 0);
    }

    #[test]
    fn display_offset_from_window_start() {
        assert_eq!(display_offset("08:00", 8).unwrap(), 0);
        assert_eq!(display_offset("09:30", 8).unwrap(), 90);
        // Before the window: negative coordinate, caller decides clipping.
        assert_eq!(display_offset("07:00", 8).unwrap(), -60);
    }

    #[test]
    fn formats_twelve_hour_labels() {
        assert_eq!(format_display(8, 0), "8:00 AM");
        assert_eq!(format_display(0, 0), "12:00 AM");
        assert_eq!(format_display(12, 30), "12:30 PM");
        assert_eq!(format_display(20, 0), "8:00 PM");
        assert_eq!(format_display(13, 5), "1:05 PM");
    }

    #[test]
    fn format_of_parse_preserves_clock_time() {
        for t in ["00:00", "08:15", "12:00", "13:45", "23:59"] {
            let minutes = parse_to_minutes(t).unwrap();
            let label = format_minutes(minutes);
            let round_trip = {
                // "1:05 PM" -> 13:05
                let (clock, meridiem) = label.split_once(' ').unwrap();
                let (h, m) = clock.split_once(':').unwrap();
                let mut h: u32 = h.parse().unwrap();
                let m: u32 = m.parse().unwrap();
                if meridiem == "PM" && h != 12 {
                    h += 12;
                }
                if meridiem == "AM" && h == 12 {
                    h = 0;
                }
                h * 60 + m
            };
            assert_eq!(round_trip, minutes, "label {label} for {t}");
        }
    }
}
