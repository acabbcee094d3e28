//! Social Insurance Number checks.
//!
//! Every function accepts the number with any separators (spaces, dashes,
//! dots, a leading label); only the ASCII digits are considered.

const SIN_LENGTH: usize = 9;
const MASKED: &str = "***-***-***";

fn digits(sin: &str) -> Vec<u8> {
    sin.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

fn nine_digits(sin: &str) -> Option<[u8; SIN_LENGTH]> {
    digits(sin).try_into().ok()
}

/// Returns true if `sin` holds exactly nine digits that pass the Luhn
/// checksum.
///
/// # Example
///
/// ```
/// use tax_core::validators::validate_sin;
///
/// assert!(validate_sin("046 454 286"));
/// assert!(!validate_sin("123-456-789"));
/// ```
pub fn validate_sin(sin: &str) -> bool {
    let Some(digits) = nine_digits(sin) else {
        return false;
    };

    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Formats nine digits as `XXX-XXX-XXX`. Anything else is returned as given.
pub fn format_sin(sin: &str) -> String {
    match nine_digits(sin) {
        Some(d) => format!(
            "{}{}{}-{}{}{}-{}{}{}",
            d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7], d[8]
        ),
        None => sin.to_string(),
    }
}

/// Hides all but the last three digits: `***-***-XXX`.
pub fn mask_sin(sin: &str) -> String {
    match nine_digits(sin) {
        Some(d) => format!("***-***-{}{}{}", d[6], d[7], d[8]),
        None => MASKED.to_string(),
    }
}

/// Returns true if `sin` holds exactly nine digits, without checking the
/// checksum.
pub fn is_sin_format(sin: &str) -> bool {
    digits(sin).len() == SIN_LENGTH
}
