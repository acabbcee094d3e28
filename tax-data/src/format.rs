use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `amount` as Canadian dollars, e.g. `$1,234.56` or `-$80.00`.
///
/// With `cents` false the amount is rounded to whole dollars (`$1,235`).
/// Halves round away from zero.
pub fn format_cad(
    amount: Decimal,
    cents: bool,
) -> String {
    let places = if cents { 2 } else { 0 };
    let mut rounded = amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);

    // rescale keeps a lower scale when the value has no room for more digits
    let scale = rounded.scale();
    let units = rounded.mantissa().unsigned_abs();
    let divisor = 10_u128.pow(scale);
    let whole = (units / divisor).to_formatted_string(&Locale::en);
    let sign = if units == 0 || rounded.is_sign_positive() { "" } else { "-" };

    if cents {
        let fraction = (units % divisor) * 10_u128.pow(places - scale);
        format!("{sign}${whole}.{fraction:02}")
    } else {
        format!("{sign}${whole}")
    }
}
