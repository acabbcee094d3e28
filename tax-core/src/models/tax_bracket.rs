use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive rate schedule.
///
/// `max` of `None` marks the final, unbounded bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a bounded bracket covering `[min, max)`.
    pub fn new(
        min: Decimal,
        max: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            min,
            max: Some(max),
            rate,
        }
    }

    /// Creates the final bracket, open above `min`.
    pub fn unbounded(
        min: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            min,
            max: None,
            rate,
        }
    }

    /// Width of the bracket, or `None` when it has no upper bound.
    pub fn width(&self) -> Option<Decimal> {
        self.max.map(|max| max - self.min)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}
