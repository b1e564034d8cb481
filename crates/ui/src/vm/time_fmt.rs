/// Whole seconds left, rounded up so `0s` only shows once time is out.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_seconds(remaining: f32) -> String {
    let secs = remaining.max(0.0).ceil() as u32;
    format!("{secs}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_partial_seconds_up() {
        assert_eq!(format_seconds(30.0), "30s");
        assert_eq!(format_seconds(11.2), "12s");
        assert_eq!(format_seconds(0.01), "1s");
        assert_eq!(format_seconds(0.0), "0s");
        assert_eq!(format_seconds(-3.0), "0s");
    }
}
