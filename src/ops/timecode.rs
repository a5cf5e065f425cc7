//! Timecode formatting and parsing for the transport and loop-boundary
//! inputs. Formatting is total; parsing is strict and returns `None` on
//! anything malformed instead of guessing.

/// Format a position as `m:ss` for the transport readout.
/// Total for any finite non-negative input; minutes are unbounded.
pub fn format_display(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, secs)
}

/// Format a loop boundary as `m:ss.mmm`, millisecond precision.
pub fn format_loop_boundary(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    let millis = ((seconds % 1.0) * 1000.0).floor() as u64;
    format!("{}:{:02}.{:03}", minutes, secs, millis)
}

/// Parse a user-typed loop boundary in `m:ss` or `m:ss.mmm` form back
/// into seconds. Inverse of [`format_loop_boundary`].
///
/// Returns `None` on the wrong segment count or any non-numeric
/// component, so a failed edit never masquerades as `0:00`.
pub fn parse_loop_boundary(text: &str) -> Option<f64> {
    let (minutes_part, seconds_part) = text.split_once(':')?;
    if seconds_part.contains(':') {
        return None;
    }
    let minutes: u64 = minutes_part.parse().ok()?;

    let (secs_part, millis) = match seconds_part.split_once('.') {
        Some((secs, millis_part)) => {
            let millis: u64 = millis_part.parse().ok()?;
            (secs, millis as f64 / 1000.0)
        }
        None => (seconds_part, 0.0),
    };
    let secs: u64 = secs_part.parse().ok()?;

    Some(minutes as f64 * 60.0 + secs as f64 + millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(0.0), "0:00");
        assert_eq!(format_display(5.9), "0:05");
        assert_eq!(format_display(75.0), "1:15");
        assert_eq!(format_display(3600.0), "60:00");
        assert_eq!(format_display(3725.4), "62:05");
    }

    #[test]
    fn test_format_loop_boundary() {
        assert_eq!(format_loop_boundary(0.0), "0:00.000");
        assert_eq!(format_loop_boundary(75.625), "1:15.625");
        assert_eq!(format_loop_boundary(59.5), "0:59.500");
        assert_eq!(format_loop_boundary(600.0), "10:00.000");
    }

    #[test]
    fn test_parse_loop_boundary_valid() {
        assert_eq!(parse_loop_boundary("0:00"), Some(0.0));
        assert_eq!(parse_loop_boundary("1:15"), Some(75.0));
        assert_eq!(parse_loop_boundary("1:15.625"), Some(75.625));
        assert_eq!(parse_loop_boundary("10:00.000"), Some(600.0));
    }

    #[test]
    fn test_parse_loop_boundary_malformed() {
        assert_eq!(parse_loop_boundary(""), None);
        assert_eq!(parse_loop_boundary("75"), None);
        assert_eq!(parse_loop_boundary("1:2:3"), None);
        assert_eq!(parse_loop_boundary("a:bc"), None);
        assert_eq!(parse_loop_boundary("1:xx.123"), None);
        assert_eq!(parse_loop_boundary("1:15.abc"), None);
        assert_eq!(parse_loop_boundary("-1:15"), None);
        assert_eq!(parse_loop_boundary("1:"), None);
        assert_eq!(parse_loop_boundary(":15"), None);
    }

    #[test]
    fn test_roundtrip_within_one_millisecond() {
        for &seconds in &[0.0, 0.1, 1.5, 59.999, 75.625, 3725.4, 7261.007] {
            let parsed = parse_loop_boundary(&format_loop_boundary(seconds)).unwrap();
            assert!(
                (parsed - seconds).abs() <= 0.001,
                "roundtrip of {} drifted to {}",
                seconds,
                parsed
            );
        }
    }

    #[test]
    fn test_format_never_panics_on_edge_inputs() {
        let _ = format_display(0.0);
        let _ = format_display(f64::MAX.min(1e12));
        let _ = format_loop_boundary(0.0);
        let _ = format_loop_boundary(86_400.0);
    }
}
