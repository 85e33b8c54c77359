// SPDX-License-Identifier: MPL-2.0
//! Duration formatting for badges and the playback time display.

/// Formats a duration in seconds as `minutes:seconds`.
///
/// Seconds are zero-padded to two digits and minutes are unbounded (one hour
/// is `"60:00"`). Absent, zero, negative, or non-finite durations format as
/// `"0:00"`.
///
/// # Examples
///
/// ```
/// use reel_play::domain::library::format_duration;
///
/// assert_eq!(format_duration(Some(125.0)), "2:05");
/// assert_eq!(format_duration(Some(3600.0)), "60:00");
/// assert_eq!(format_duration(None), "0:00");
/// ```
#[must_use]
pub fn format_duration(duration_secs: Option<f64>) -> String {
    let secs = match duration_secs {
        Some(d) if d.is_finite() && d > 0.0 => d,
        _ => return "0:00".to_string(),
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = (secs / 60.0).floor() as u64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seconds = (secs % 60.0).floor() as u64;

    format!("{minutes}:{seconds:02}")
}
