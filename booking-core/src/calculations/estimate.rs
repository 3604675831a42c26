//! The estimate engine: derives priced line items from a form snapshot
//! and layers the discount and the payment surcharge onto the total.
//!
//! # Line emission order
//!
//! Output order is fixed and tests depend on it:
//!
//! | Step | Line source |
//! |------|-------------|
//! | 1    | Requester fee (flat, when the requester name is non-blank) |
//! | 2    | Related-party fees, in document order |
//! | 3    | Question fees, in document order |
//! | 4    | Option fees, in registration order |
//! | 5    | Coupon discount (referral or percent, computed on the subtotal) |
//! | 6    | Payment-method surcharge (always last, applied after the discount) |
//!
//! The subtotal is the sum of steps 1–4; the percent coupon rounds half
//! away from zero on that subtotal and is never recomputed after the
//! surcharge is added.
//!
//! # Example
//!
//! ```
//! use booking_core::{
//!     CouponChoice, EstimateEngine, FieldSnapshot, PricingConfig, QuestionCategory,
//!     QuestionEntry,
//! };
//!
//! let config = PricingConfig::default();
//! let snapshot = FieldSnapshot {
//!     requester_name: "田中".to_string(),
//!     no_related_parties: true,
//!     questions: vec![QuestionEntry {
//!         body: "仕事運について".to_string(),
//!         category: Some(QuestionCategory {
//!             label: "仕事・転職".to_string(),
//!             price: 5000,
//!         }),
//!     }],
//!     coupon: Some(CouponChoice::Percent { value: 10 }),
//!     ..FieldSnapshot::default()
//! };
//!
//! let result = EstimateEngine::new(&config).compute(&snapshot);
//!
//! assert_eq!(result.subtotal, 18000);
//! assert_eq!(result.total, 16200); // 10% of 18000 off
//! ```

use tracing::debug;

use crate::calculations::common::{is_blank, percent_of};
use crate::models::{
    CouponChoice, EstimateResult, FieldSnapshot, LineItem, PricingConfig, QuestionEntry,
    QuestionPricing,
};

/// Computes a full [`EstimateResult`] from a [`FieldSnapshot`].
///
/// The engine borrows its [`PricingConfig`] and is otherwise stateless;
/// `compute` is pure, infallible, and idempotent. Missing or blank
/// fields simply contribute zero lines.
#[derive(Debug, Clone)]
pub struct EstimateEngine<'a> {
    config: &'a PricingConfig,
}

impl<'a> EstimateEngine<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    /// Recomputes the whole estimate. Slots beyond the configured caps
    /// are ignored rather than priced.
    pub fn compute(
        &self,
        snapshot: &FieldSnapshot,
    ) -> EstimateResult {
        let mut lines = Vec::new();

        self.push_requester_line(snapshot, &mut lines);
        self.push_related_party_lines(snapshot, &mut lines);
        self.push_question_lines(snapshot, &mut lines);
        self.push_option_lines(snapshot, &mut lines);

        let subtotal: i64 = lines.iter().map(|l| l.amount).sum();

        if let Some(discount) = self.discount_line(snapshot, subtotal) {
            lines.push(discount);
        }
        if let Some(surcharge) = self.surcharge_line(snapshot) {
            lines.push(surcharge);
        }

        let total = lines.iter().map(|l| l.amount).sum();
        debug!(subtotal, total, lines = lines.len(), "estimate recomputed");

        EstimateResult {
            lines,
            subtotal,
            total,
        }
    }

    fn push_requester_line(
        &self,
        snapshot: &FieldSnapshot,
        lines: &mut Vec<LineItem>,
    ) {
        if !is_blank(&snapshot.requester_name) {
            lines.push(LineItem::fee(
                self.config.requester_label.clone(),
                self.config.requester_fee,
            ));
        }
    }

    /// One flat fee per party with at least one non-blank name part.
    /// Suppressed entirely when the no-related-parties box is checked,
    /// regardless of stored values.
    fn push_related_party_lines(
        &self,
        snapshot: &FieldSnapshot,
        lines: &mut Vec<LineItem>,
    ) {
        if snapshot.no_related_parties {
            return;
        }
        for party in snapshot
            .related_parties
            .iter()
            .take(self.config.related_party_cap)
        {
            if party.has_name() {
                lines.push(LineItem::fee(
                    format!("関係者: {}", party.display_name()),
                    self.config.related_party_fee,
                ));
            }
        }
    }

    fn push_question_lines(
        &self,
        snapshot: &FieldSnapshot,
        lines: &mut Vec<LineItem>,
    ) {
        for (index, question) in snapshot
            .questions
            .iter()
            .take(self.config.question_cap)
            .enumerate()
        {
            if let Some(line) = self.question_line(index, question) {
                lines.push(line);
            }
        }
    }

    /// Prices one question slot, or `None` when it is incomplete.
    ///
    /// Category mode requires both a selected category and a non-blank
    /// body (never a partial charge); tiered mode requires only the body
    /// and prices by 1-based ordinal.
    fn question_line(
        &self,
        index: usize,
        question: &QuestionEntry,
    ) -> Option<LineItem> {
        if is_blank(&question.body) {
            return None;
        }
        match &self.config.question_pricing {
            QuestionPricing::FlatByCategory => {
                let category = question.category.as_ref()?;
                Some(LineItem::fee(
                    format!("相談内容{}: {}", index + 1, category.label),
                    category.price,
                ))
            }
            QuestionPricing::TieredByOrdinal {
                first_tier_len,
                first_tier_price,
                later_price,
            } => {
                let price = if index < *first_tier_len {
                    *first_tier_price
                } else {
                    *later_price
                };
                Some(LineItem::fee(
                    format!("質問{}: {}", index + 1, question.body.trim()),
                    price,
                ))
            }
        }
    }

    /// Emits registered options with a non-zero effective quantity, in
    /// registration order. Negative-priced options (discount-as-option)
    /// emit too; their labels omit the `× qty` suffix.
    fn push_option_lines(
        &self,
        snapshot: &FieldSnapshot,
        lines: &mut Vec<LineItem>,
    ) {
        for option in &self.config.options {
            let quantity = if option.forced_single {
                // Derived from the agreement checkbox alone.
                i64::from(snapshot.light_discount_agreed)
            } else {
                snapshot
                    .option_quantities
                    .get(&option.key)
                    .copied()
                    .unwrap_or(0)
            };
            if quantity == 0 {
                continue;
            }
            let label = if option.unit_price > 0 {
                format!("{} × {}", option.label, quantity)
            } else {
                option.label.clone()
            };
            lines.push(LineItem::fee(label, option.unit_price * quantity));
        }
    }

    /// The coupon line, computed on the subtotal. An unchosen coupon or
    /// an out-of-range percentage emits nothing.
    fn discount_line(
        &self,
        snapshot: &FieldSnapshot,
        subtotal: i64,
    ) -> Option<LineItem> {
        match snapshot.coupon? {
            CouponChoice::NoCoupon => None,
            CouponChoice::Referral => Some(LineItem::discount(
                self.config.referral_label.clone(),
                -self.config.referral_discount,
            )),
            CouponChoice::Percent { value } => {
                if !self.config.percent_in_range(value) {
                    debug!(percent = value, "percent coupon out of range, no discount");
                    return None;
                }
                Some(LineItem::discount(
                    format!("{value}% OFF クーポン"),
                    -percent_of(subtotal, value),
                ))
            }
        }
    }

    fn surcharge_line(
        &self,
        snapshot: &FieldSnapshot,
    ) -> Option<LineItem> {
        if snapshot.payment_method == self.config.surcharge_payment_method {
            Some(LineItem::surcharge(
                self.config.surcharge_label.clone(),
                self.config.surcharge_amount,
            ))
        } else {
            None
        }
    }
}
