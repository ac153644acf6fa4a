//! Arabic-Indic numerals
//!
//! Verse ornaments and page labels print numbers with Arabic-Indic digits.

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Convert the Western digits of a number to Arabic-Indic (٠-٩)
pub fn to_arabic_digits(value: u32) -> String {
    to_arabic_digits_str(&value.to_string())
}

/// Convert every ASCII digit in `text`, leaving other characters untouched
pub fn to_arabic_digits_str(text: &str) -> String {
    text.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) => ARABIC_INDIC_DIGITS[d as usize],
            _ => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digits() {
        assert_eq!(to_arabic_digits(0), "٠");
        assert_eq!(to_arabic_digits(1), "١");
        assert_eq!(to_arabic_digits(9), "٩");
    }

    #[test]
    fn test_multi_digit_numbers() {
        assert_eq!(to_arabic_digits(10), "١٠");
        assert_eq!(to_arabic_digits(114), "١١٤");
        assert_eq!(to_arabic_digits(286), "٢٨٦");
        assert_eq!(to_arabic_digits(604), "٦٠٤");
        assert_eq!(to_arabic_digits(6236), "٦٢٣٦");
    }

    #[test]
    fn test_non_digits_pass_through() {
        assert_eq!(to_arabic_digits_str("2:255"), "٢:٢٥٥");
        assert_eq!(to_arabic_digits_str("page"), "page");
    }

    #[test]
    fn test_only_ascii_digits_convert() {
        // Already Arabic-Indic, fullwidth and superscript digits stay as they are
        assert_eq!(to_arabic_digits_str("٣"), "٣");
        assert_eq!(to_arabic_digits_str("３²"), "３²");
        assert_eq!(to_arabic_digits_str("a1٢"), "a١٢");
    }
}
