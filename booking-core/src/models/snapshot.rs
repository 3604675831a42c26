use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculations::common::is_blank;

/// One repeatable related-party slot. Both name parts are free text;
/// blank (empty or whitespace-only) parts are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedParty {
    pub last_name: String,
    pub first_name: String,
}

impl RelatedParty {
    /// True when at least one name part is non-blank.
    pub fn has_name(&self) -> bool {
        !is_blank(&self.last_name) || !is_blank(&self.first_name)
    }

    /// Non-blank name parts joined with a space, for line-item labels.
    pub fn display_name(&self) -> String {
        let last = self.last_name.trim();
        let first = self.first_name.trim();
        match (last.is_empty(), first.is_empty()) {
            (false, false) => format!("{last} {first}"),
            (false, true) => last.to_string(),
            _ => first.to_string(),
        }
    }
}

/// A consultation category with its flat price, as selected on one
/// question slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCategory {
    pub label: String,
    pub price: i64,
}

/// One question slot: a free-text body plus, in category-priced
/// deployments, the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionEntry {
    pub body: String,
    pub category: Option<QuestionCategory>,
}

/// The coupon controls. `None` on [`FieldSnapshot::coupon`] means the
/// user has not chosen yet; `NoCoupon` is the explicit opt-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponChoice {
    NoCoupon,
    Referral,
    Percent { value: i64 },
}

/// Immutable capture of every form field at one point in time.
///
/// The presentation layer builds a fresh snapshot on every input or
/// structural event and passes it by value into the engine; the engine
/// never reads live form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSnapshot {
    pub requester_name: String,
    pub related_parties: Vec<RelatedParty>,
    pub no_related_parties: bool,
    pub questions: Vec<QuestionEntry>,

    /// Raw quantities keyed by option key. The options themselves are
    /// registered in `PricingConfig`; unknown keys are ignored.
    pub option_quantities: BTreeMap<String, i64>,

    /// Drives the forced-single (light discount) option. Its quantity is
    /// derived from this flag alone, never from `option_quantities`.
    pub light_discount_agreed: bool,

    pub coupon: Option<CouponChoice>,
    pub payment_method: String,
    pub remarks: String,
    pub agreement_accepted: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn has_name_treats_whitespace_as_absent() {
        let party = RelatedParty {
            last_name: "   ".to_string(),
            first_name: String::new(),
        };

        assert!(!party.has_name());
    }

    #[test]
    fn has_name_accepts_either_part() {
        let last_only = RelatedParty {
            last_name: "佐藤".to_string(),
            first_name: String::new(),
        };
        let first_only = RelatedParty {
            last_name: String::new(),
            first_name: "次郎".to_string(),
        };

        assert!(last_only.has_name());
        assert!(first_only.has_name());
    }

    #[test]
    fn display_name_joins_both_parts() {
        let party = RelatedParty {
            last_name: " 佐藤 ".to_string(),
            first_name: "次郎".to_string(),
        };

        assert_eq!(party.display_name(), "佐藤 次郎");
    }

    #[test]
    fn display_name_single_part_has_no_separator() {
        let party = RelatedParty {
            last_name: "佐藤".to_string(),
            first_name: String::new(),
        };

        assert_eq!(party.display_name(), "佐藤");
    }

    #[test]
    fn snapshot_deserializes_from_partial_json() {
        let snapshot: FieldSnapshot =
            serde_json::from_str(r#"{"requester_name": "田中"}"#).unwrap();

        assert_eq!(snapshot.requester_name, "田中");
        assert!(snapshot.related_parties.is_empty());
        assert_eq!(snapshot.coupon, None);
        assert!(!snapshot.agreement_accepted);
    }

    #[test]
    fn coupon_choice_deserializes_tagged() {
        let percent: CouponChoice =
            serde_json::from_str(r#"{"type": "percent", "value": 10}"#).unwrap();
        let referral: CouponChoice = serde_json::from_str(r#"{"type": "referral"}"#).unwrap();

        assert_eq!(percent, CouponChoice::Percent { value: 10 });
        assert_eq!(referral, CouponChoice::Referral);
    }
}
