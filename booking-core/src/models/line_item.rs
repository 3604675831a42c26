use serde::{Deserialize, Serialize};

/// How a line contributes to the totals: `Fee` lines sum into the
/// subtotal, `Discount` and `Surcharge` lines only adjust the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Fee,
    Discount,
    Surcharge,
}

/// One priced row of the estimate. Amounts are signed integer JPY
/// (zero-decimal); discount lines are negative, everything else is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: i64,
    pub kind: LineKind,
}

impl LineItem {
    pub fn fee(
        label: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: LineKind::Fee,
        }
    }

    pub fn discount(
        label: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: LineKind::Discount,
        }
    }

    pub fn surcharge(
        label: impl Into<String>,
        amount: i64,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
            kind: LineKind::Surcharge,
        }
    }
}
