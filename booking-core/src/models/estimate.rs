use serde::{Deserialize, Serialize};

use crate::models::LineItem;

/// Result of one full recompute over a snapshot.
///
/// `lines` preserves the fixed emission order (requester fee, related
/// parties, questions, options, discount, surcharge). `subtotal` is the
/// sum of the fee lines only; `total` is the subtotal adjusted by the
/// discount and then the surcharge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub lines: Vec<LineItem>,
    pub subtotal: i64,
    pub total: i64,
}
