//! Phone number formatting for the ticket form.

/// Number of digits in a complete phone number
pub const PHONE_DIGITS: usize = 11;

/// Format a phone number as `+D (DDD) DDD-DD-DD`.
///
/// All non-digit characters are stripped first. When exactly eleven digits
/// remain they are regrouped 1-3-3-2-2; any other count returns the input
/// unchanged, so partial entries stay as typed until the last digit arrives.
/// Formatting an already formatted number yields the same string.
///
/// # Examples
///
/// ```
/// use helpdesk::form::phone::format_phone;
///
/// assert_eq!(format_phone("79123456789"), "+7 (912) 345-67-89");
/// assert_eq!(format_phone("+7 (912) 345-67-89"), "+7 (912) 345-67-89");
/// assert_eq!(format_phone("12345"), "12345");
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return raw.to_string();
    }

    // ASCII digits only, so byte slicing is safe
    format!(
        "+{} ({}) {}-{}-{}",
        &digits[0..1],
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}
