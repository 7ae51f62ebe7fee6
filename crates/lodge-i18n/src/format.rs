//! Number, price and phone formatting per language.
//!
//! Grouping uses dots for every language (`30.000`). Persian additionally
//! swaps ASCII digits for Extended Arabic-Indic ones.

use crate::language::SupportedLanguage;

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Replace ASCII digits with Persian digits. Other characters are kept.
pub fn to_persian_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Localize digits only. No grouping.
pub fn format_number(input: &str, lang: SupportedLanguage) -> String {
    match lang {
        SupportedLanguage::Fa => to_persian_digits(input),
        _ => input.to_string(),
    }
}

/// Phone numbers keep their structure; only the digits are localized.
pub fn format_phone_number(phone: &str, lang: SupportedLanguage) -> String {
    format_number(phone, lang)
}

/// Price with dot thousands separators, Persian digits for `fa`.
pub fn format_price(price: &str, lang: SupportedLanguage) -> String {
    format_number(&group_thousands(price), lang)
}

/// Amount with dot thousands separators, Persian digits for `fa`.
pub fn format_amount(amount: &str, lang: SupportedLanguage) -> String {
    format_number(&group_thousands(amount), lang)
}

/// Insert dot thousands separators into the integer part of `input`.
///
/// A trailing `.` or `,` followed only by digits is kept as the decimal
/// part, separator included. Everything else except digits and `-` is
/// dropped from the integer part.
///
/// `30000` → `30.000`, `1234567.89` → `1.234.567.89`, `1500,5` → `1.500,5`.
pub fn group_thousands(input: &str) -> String {
    let cleaned = input.trim();
    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(pos) = cleaned.rfind(['.', ',']) {
        let decimals = &cleaned[pos + 1..];
        if !decimals.is_empty() && decimals.bytes().all(|b| b.is_ascii_digit()) {
            let sep = &cleaned[pos..pos + 1];
            let int_part = group_digit_runs(&keep_digits_and_sign(&cleaned[..pos]));
            return format!("{int_part}{sep}{decimals}");
        }
    }

    group_digit_runs(&keep_digits_and_sign(cleaned))
}

fn keep_digits_and_sign(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect()
}

/// Group each run of digits from the right in threes.
fn group_digit_runs(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run = &chars[start..i];
        for (j, c) in run.iter().enumerate() {
            if j > 0 && (run.len() - j) % 3 == 0 {
                out.push('.');
            }
            out.push(*c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::SupportedLanguage::*;

    #[test]
    fn test_persian_digits() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits("+374 10 55-55"), "+۳۷۴ ۱۰ ۵۵-۵۵");
    }

    #[test]
    fn test_format_number_only_changes_persian() {
        assert_eq!(format_number("4.9", Fa), "۴.۹");
        assert_eq!(format_number("4.9", En), "4.9");
        assert_eq!(format_number("365", Am), "365");
        assert_eq!(format_phone_number("+37491000000", Ru), "+37491000000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("30000"), "30.000");
        assert_eq!(group_thousands("1234567"), "1.234.567");
        assert_eq!(group_thousands("1234567.89"), "1.234.567.89");
        assert_eq!(group_thousands("1500,5"), "1.500,5");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("-12000"), "-12.000");
        assert_eq!(group_thousands(" 45 000 AMD "), "45.000");
    }

    #[test]
    fn test_group_thousands_degenerate_input() {
        assert_eq!(group_thousands(""), "");
        assert_eq!(group_thousands("   "), "");
        assert_eq!(group_thousands("n/a"), "");
        assert_eq!(group_thousands("100."), "100");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("30000", En), "30.000");
        assert_eq!(format_price("30000", Fa), "۳۰.۰۰۰");
        assert_eq!(format_amount("1234567.89", Fa), "۱.۲۳۴.۵۶۷.۸۹");
    }
}
