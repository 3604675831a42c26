//! The validation gate: determines submit-readiness from a snapshot.
//!
//! Rules run in a fixed order and every failure is collected; the first
//! failure is the primary one the presentation layer focuses/scrolls to.
//! The gate is evaluated on demand (before submission or a step
//! transition), not on every keystroke.

use serde::{Deserialize, Serialize};

use crate::calculations::common::is_blank;
use crate::models::{FieldSnapshot, PricingConfig, QuestionPricing};

/// Stable reference to the form control a failure points at, in rule
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    RequesterName,
    FirstQuestion,
    RelatedParties,
    Coupon,
    PaymentMethod,
    Agreement,
}

impl FieldRef {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequesterName => "requester_name",
            Self::FirstQuestion => "first_question",
            Self::RelatedParties => "related_parties",
            Self::Coupon => "coupon",
            Self::PaymentMethod => "payment_method",
            Self::Agreement => "agreement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub field: FieldRef,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationResult {
    /// The failure the presentation layer surfaces first, if any.
    pub fn primary(&self) -> Option<&ValidationFailure> {
        self.failures.first()
    }
}

/// Pure submit-readiness check over a [`FieldSnapshot`].
///
/// Coupon policy: an explicit choice is required — `coupon: None` fails,
/// `NoCoupon` is the accepted opt-out.
#[derive(Debug, Clone)]
pub struct ValidationGate<'a> {
    config: &'a PricingConfig,
}

impl<'a> ValidationGate<'a> {
    pub fn new(config: &'a PricingConfig) -> Self {
        Self { config }
    }

    pub fn validate(
        &self,
        snapshot: &FieldSnapshot,
    ) -> ValidationResult {
        let mut failures = Vec::new();

        if is_blank(&snapshot.requester_name) {
            failures.push(ValidationFailure {
                field: FieldRef::RequesterName,
                message: "お名前は必須です。".to_string(),
            });
        }

        if !self.first_question_complete(snapshot) {
            let message = match self.config.question_pricing {
                QuestionPricing::FlatByCategory => {
                    "最初の相談内容はカテゴリ選択と内容記入の両方が必須です。"
                }
                QuestionPricing::TieredByOrdinal { .. } => "最初の質問の記入は必須です。",
            };
            failures.push(ValidationFailure {
                field: FieldRef::FirstQuestion,
                message: message.to_string(),
            });
        }

        if !snapshot.no_related_parties
            && !snapshot.related_parties.iter().any(|p| p.has_name())
        {
            failures.push(ValidationFailure {
                field: FieldRef::RelatedParties,
                message: "関係者名を入力するか、「関係者はいません」にチェックしてください。"
                    .to_string(),
            });
        }

        if snapshot.coupon.is_none() {
            failures.push(ValidationFailure {
                field: FieldRef::Coupon,
                message: "クーポンの有無を選択してください。".to_string(),
            });
        }

        if is_blank(&snapshot.payment_method) {
            failures.push(ValidationFailure {
                field: FieldRef::PaymentMethod,
                message: "お支払い方法は必須です。".to_string(),
            });
        }

        if !snapshot.agreement_accepted {
            failures.push(ValidationFailure {
                field: FieldRef::Agreement,
                message: "ご確認事項への同意は必須です。".to_string(),
            });
        }

        ValidationResult {
            ok: failures.is_empty(),
            failures,
        }
    }

    /// Rule 2: the first question slot must be complete; later slots are
    /// optional. A snapshot with zero slots fails too.
    fn first_question_complete(
        &self,
        snapshot: &FieldSnapshot,
    ) -> bool {
        let Some(first) = snapshot.questions.first() else {
            return false;
        };
        if is_blank(&first.body) {
            return false;
        }
        match self.config.question_pricing {
            QuestionPricing::FlatByCategory => first.category.is_some(),
            QuestionPricing::TieredByOrdinal { .. } => true,
        }
    }
}
