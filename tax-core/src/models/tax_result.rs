use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of a full return calculation.
///
/// `total_tax` is always the sum of the three tax components and
/// `refund_or_owing` is `total_withheld - total_tax`; a non-negative balance
/// is a refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub total_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub provincial_tax: Decimal,
    pub health_premium: Decimal,
    pub total_tax: Decimal,
    pub total_withheld: Decimal,
    pub refund_or_owing: Decimal,
    pub is_refund: bool,
    pub province_name: String,
}
