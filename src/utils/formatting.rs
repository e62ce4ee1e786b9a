//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a field of `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Whole hours, minutes and seconds of a duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Floor cascade: h = t // 3600, m = (t % 3600) // 60, s = t % 60.
pub fn secs2hms(total: f64) -> Hms {
    let hours = (total / 3600.0).floor();
    let minutes = (total.rem_euclid(3600.0) / 60.0).floor();
    let seconds = total.rem_euclid(60.0).trunc();

    Hms {
        hours: hours as i64,
        minutes: minutes as i64,
        seconds: seconds as i64,
    }
}

pub fn secs2readable(total: f64) -> String {
    let hms = secs2hms(total);
    format!(
        "{} hours, {} minutes, {} seconds",
        hms.hours, hms.minutes, hms.seconds
    )
}

/// Trip durations are shown without a trailing ".0" when whole.
pub fn format_duration_cell(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as i64)
    } else {
        format!("{:.3}", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_cascade() {
        assert_eq!(
            secs2hms(3661.0),
            Hms {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(
            secs2hms(59.0),
            Hms {
                hours: 0,
                minutes: 0,
                seconds: 59
            }
        );
        assert_eq!(
            secs2hms(7322.9),
            Hms {
                hours: 2,
                minutes: 2,
                seconds: 2
            }
        );
    }

    #[test]
    fn readable() {
        assert_eq!(secs2readable(3661.0), "1 hours, 1 minutes, 1 seconds");
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn duration_cells() {
        assert_eq!(format_duration_cell(321.0), "321");
        assert_eq!(format_duration_cell(1000.5), "1000.500");
    }
}
