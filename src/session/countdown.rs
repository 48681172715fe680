/// Seconds granted when a topic becomes newly selected (10 minutes).
pub const SELECTION_SECS: u32 = 600;

/// Format a second count as `m:ss`. Minutes are unpadded and unbounded;
/// there is no hour component.
pub fn format_time(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn test_format_pads_seconds_only() {
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(60), "1:00");
        assert_eq!(format_time(601), "10:01");
    }

    #[test]
    fn test_format_full_selection_budget() {
        assert_eq!(format_time(SELECTION_SECS), "10:00");
    }

    #[test]
    fn test_format_minutes_are_unbounded() {
        assert_eq!(format_time(3_600), "60:00");
        assert_eq!(format_time(6_000), "100:00");
    }
}
