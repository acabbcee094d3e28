use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Provincial surtax rule, applied to provincial tax after the BPA credit.
///
/// Serialized with an explicit `kind` tag so the shape never has to be
/// guessed from which fields happen to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Surtax {
    /// No surtax in this jurisdiction.
    #[default]
    None,

    /// Two cumulative tiers (Ontario). Tax above `first` is surtaxed at
    /// `first_rate`, and tax above `second` additionally at `second_rate`.
    Tiered {
        first: Decimal,
        first_rate: Decimal,
        second: Decimal,
        second_rate: Decimal,
    },

    /// A single tier above `threshold` (Prince Edward Island, 2024).
    Threshold { threshold: Decimal, rate: Decimal },
}
