/// Most digits the entry holds, integer and fractional parts together.
///
/// Every 7-digit whole number is exact in `f32`, so a typed integer always
/// reaches the session unchanged.
pub const MAX_DIGITS: usize = 7;

/// Numpad input buffer.
///
/// An empty buffer reads as `0`. Keys that would overflow the buffer or add a
/// second decimal point are refused and leave it untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerEntry {
    digits: String,
    /// `None` until the decimal point is pressed.
    fraction: Option<String>,
    negative: bool,
}

impl AnswerEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn digit_count(&self) -> usize {
        self.digits.len() + self.fraction.as_ref().map_or(0, String::len)
    }

    /// Append a digit. Returns false if the digit was rejected.
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 || self.digit_count() >= MAX_DIGITS {
            return false;
        }
        let ch = char::from(b'0' + digit);
        match self.fraction.as_mut() {
            Some(fraction) => fraction.push(ch),
            None => {
                if self.digits == "0" {
                    self.digits.clear();
                }
                self.digits.push(ch);
            }
        }
        true
    }

    /// Start the fractional part. Returns false if one was already started.
    pub fn push_decimal_point(&mut self) -> bool {
        if self.fraction.is_some() {
            return false;
        }
        self.fraction = Some(String::new());
        true
    }

    pub fn backspace(&mut self) {
        match self.fraction.as_mut() {
            Some(fraction) if !fraction.is_empty() => {
                fraction.pop();
            }
            Some(_) => self.fraction = None,
            None => {
                self.digits.pop();
            }
        }
        if self.is_empty() {
            self.negative = false;
        }
    }

    pub fn toggle_sign(&mut self) {
        self.negative = !self.negative;
    }

    pub fn clear(&mut self) {
        self.digits.clear();
        self.fraction = None;
        self.negative = false;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty() && self.fraction.is_none()
    }

    #[must_use]
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(MAX_DIGITS + 3);
        if self.negative {
            text.push('-');
        }
        if self.digits.is_empty() {
            text.push('0');
        } else {
            text.push_str(&self.digits);
        }
        if let Some(fraction) = &self.fraction {
            text.push('.');
            text.push_str(fraction);
        }
        text
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        // `text()` is always digits with an optional sign and point, e.g. "-0." or "12.5".
        self.text().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_reads_zero() {
        let entry = AnswerEntry::new();
        assert_eq!(entry.text(), "0");
        assert_eq!(entry.value(), 0.0);
        assert!(entry.is_empty());
    }

    #[test]
    fn digits_accumulate_and_collapse_leading_zero() {
        let mut entry = AnswerEntry::new();
        assert!(entry.push_digit(0));
        assert!(entry.push_digit(4));
        assert!(entry.push_digit(2));
        assert_eq!(entry.text(), "42");
        assert_eq!(entry.value(), 42.0);
    }

    #[test]
    fn decimal_point_starts_fraction() {
        let mut entry = AnswerEntry::new();
        assert!(entry.push_decimal_point());
        assert_eq!(entry.text(), "0.");
        assert_eq!(entry.value(), 0.0);

        entry.push_digit(7);
        entry.push_digit(5);
        assert_eq!(entry.text(), "0.75");
        assert_eq!(entry.value(), 0.75);

        assert!(!entry.push_decimal_point());
        assert_eq!(entry.text(), "0.75");

        entry.toggle_sign();
        assert_eq!(entry.value(), -0.75);
    }

    #[test]
    fn zero_after_point_is_kept() {
        let mut entry = AnswerEntry::new();
        entry.push_digit(2);
        entry.push_decimal_point();
        entry.push_digit(0);
        entry.push_digit(5);
        assert_eq!(entry.text(), "2.05");
        assert_eq!(entry.value(), 2.05);
    }

    #[test]
    fn rejects_non_digits_and_overflow() {
        let mut entry = AnswerEntry::new();
        assert!(!entry.push_digit(10));
        for digit in 1..=7 {
            assert!(entry.push_digit(digit));
        }
        assert!(!entry.push_digit(8));
        assert_eq!(entry.text(), "1234567");
        assert_eq!(entry.value(), 1_234_567.0);
    }

    #[test]
    fn largest_entry_is_exact() {
        let mut entry = AnswerEntry::new();
        for _ in 0..MAX_DIGITS {
            entry.push_digit(9);
        }
        assert_eq!(entry.value(), 9_999_999.0);
    }

    #[test]
    fn fraction_digits_count_toward_limit() {
        let mut entry = AnswerEntry::new();
        entry.push_digit(0);
        entry.push_decimal_point();
        for _ in 1..MAX_DIGITS {
            assert!(entry.push_digit(3));
        }
        assert!(!entry.push_digit(3));
        assert_eq!(entry.text(), "0.333333");
    }

    #[test]
    fn backspace_falls_back_to_zero() {
        let mut entry = AnswerEntry::new();
        entry.push_digit(7);
        entry.toggle_sign();
        assert_eq!(entry.text(), "-7");
        assert_eq!(entry.value(), -7.0);

        entry.backspace();
        assert_eq!(entry.text(), "0");
        assert_eq!(entry.value(), 0.0);

        entry.backspace();
        assert_eq!(entry.text(), "0");
    }

    #[test]
    fn backspace_unwinds_fraction_then_point() {
        let mut entry = AnswerEntry::new();
        entry.push_digit(1);
        entry.push_decimal_point();
        entry.push_digit(5);

        entry.backspace();
        assert_eq!(entry.text(), "1.");
        entry.backspace();
        assert_eq!(entry.text(), "1");
        assert!(entry.push_decimal_point());
    }

    #[test]
    fn clear_resets_sign() {
        let mut entry = AnswerEntry::new();
        entry.toggle_sign();
        entry.push_digit(3);
        entry.push_decimal_point();
        entry.clear();
        assert_eq!(entry, AnswerEntry::new());
    }
}
