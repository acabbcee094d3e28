use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the premium is computed for incomes falling in a bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PremiumRule {
    /// A flat premium for the whole bracket.
    Fixed { amount: Decimal },

    /// `base + (income - previous bracket max) * rate`, clamped to `cap`.
    Progressive {
        base: Decimal,
        rate: Decimal,
        cap: Option<Decimal>,
    },
}

/// One row of a health premium table. Rows are ordered by ascending `max`;
/// the last row has `max` of `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPremiumBracket {
    pub max: Option<Decimal>,
    pub rule: PremiumRule,
}

impl HealthPremiumBracket {
    pub fn fixed(
        max: Option<Decimal>,
        amount: Decimal,
    ) -> Self {
        Self {
            max,
            rule: PremiumRule::Fixed { amount },
        }
    }

    pub fn progressive(
        max: Decimal,
        base: Decimal,
        rate: Decimal,
        cap: Option<Decimal>,
    ) -> Self {
        Self {
            max: Some(max),
            rule: PremiumRule::Progressive { base, rate, cap },
        }
    }

    /// Whether `income` falls at or below this bracket's ceiling.
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        self.max.is_none_or(|max| income <= max)
    }
}
