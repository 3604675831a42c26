use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How question slots are priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuestionPricing {
    /// Primary mode: each question carries a selected category whose flat
    /// price is charged when the body is also non-blank.
    FlatByCategory,

    /// Alternate mode for deployments without a category selector:
    /// non-blank questions are priced by their 1-based ordinal, the first
    /// `first_tier_len` at `first_tier_price` and the rest at
    /// `later_price`.
    TieredByOrdinal {
        first_tier_len: usize,
        first_tier_price: i64,
        later_price: i64,
    },
}

/// A priced option control, registered once at configuration time.
///
/// This replaces the form's structural option discovery: only descriptors
/// listed here can produce option lines, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub key: String,
    pub label: String,
    pub unit_price: i64,

    /// Marks the light-discount option: its effective quantity is derived
    /// from the agreement checkbox (exactly 1 when agreed, 0 otherwise),
    /// never from the stored raw quantity.
    #[serde(default)]
    pub forced_single: bool,
}

/// Errors reported by [`PricingConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingConfigError {
    #[error("related_party_cap must be at least 1, got {0}")]
    InvalidRelatedPartyCap(usize),

    #[error("question_cap must be at least 1, got {0}")]
    InvalidQuestionCap(usize),

    #[error("option key must not be blank")]
    BlankOptionKey,

    #[error("duplicate option key '{0}'")]
    DuplicateOptionKey(String),

    #[error("at most one forced-single option is supported, found {0}")]
    MultipleForcedSingle(usize),
}

/// Deployment-specific pricing constants, caps, and coupon rules.
///
/// The defaults mirror the production reading-reservation form; variants
/// override individual fields via TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub requester_fee: i64,
    pub requester_label: String,
    pub related_party_fee: i64,
    pub related_party_cap: usize,
    pub question_cap: usize,
    pub question_pricing: QuestionPricing,
    pub options: Vec<OptionDescriptor>,
    pub referral_discount: i64,
    pub referral_label: String,

    /// When true a 100% coupon is accepted; the lower bound stays
    /// exclusive either way.
    pub percent_upper_inclusive: bool,

    pub surcharge_amount: i64,
    pub surcharge_payment_method: String,
    pub surcharge_label: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            requester_fee: 13000,
            requester_label: "お名前（霊視接続料）".to_string(),
            related_party_fee: 3000,
            related_party_cap: 5,
            question_cap: 10,
            question_pricing: QuestionPricing::FlatByCategory,
            options: vec![OptionDescriptor {
                key: "light_discount".to_string(),
                label: "ライト割引".to_string(),
                unit_price: -5000,
                forced_single: true,
            }],
            referral_discount: 500,
            referral_label: "紹介割引".to_string(),
            percent_upper_inclusive: false,
            surcharge_amount: 220,
            surcharge_payment_method: "コンビニ払い".to_string(),
            surcharge_label: "コンビニ払い手数料".to_string(),
        }
    }
}

impl PricingConfig {
    /// Checks structural soundness: positive caps, unique non-blank
    /// option keys, at most one forced-single option.
    pub fn validate(&self) -> Result<(), PricingConfigError> {
        if self.related_party_cap == 0 {
            return Err(PricingConfigError::InvalidRelatedPartyCap(
                self.related_party_cap,
            ));
        }
        if self.question_cap == 0 {
            return Err(PricingConfigError::InvalidQuestionCap(self.question_cap));
        }

        let mut seen = Vec::with_capacity(self.options.len());
        for option in &self.options {
            if option.key.trim().is_empty() {
                return Err(PricingConfigError::BlankOptionKey);
            }
            if seen.contains(&option.key.as_str()) {
                return Err(PricingConfigError::DuplicateOptionKey(option.key.clone()));
            }
            seen.push(option.key.as_str());
        }

        let forced = self.options.iter().filter(|o| o.forced_single).count();
        if forced > 1 {
            return Err(PricingConfigError::MultipleForcedSingle(forced));
        }

        Ok(())
    }

    /// Whether a percent-coupon value is inside the accepted range.
    /// Out-of-range values drop the discount line entirely, no clamping.
    pub fn percent_in_range(
        &self,
        percent: i64,
    ) -> bool {
        if self.percent_upper_inclusive {
            percent > 0 && percent <= 100
        } else {
            percent > 0 && percent < 100
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PricingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_caps() {
        let mut config = PricingConfig::default();
        config.related_party_cap = 0;

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::InvalidRelatedPartyCap(0))
        );

        let mut config = PricingConfig::default();
        config.question_cap = 0;

        assert_eq!(config.validate(), Err(PricingConfigError::InvalidQuestionCap(0)));
    }

    #[test]
    fn validate_rejects_duplicate_option_keys() {
        let mut config = PricingConfig::default();
        config.options.push(OptionDescriptor {
            key: "light_discount".to_string(),
            label: "重複".to_string(),
            unit_price: 1000,
            forced_single: false,
        });

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::DuplicateOptionKey(
                "light_discount".to_string()
            ))
        );
    }

    #[test]
    fn validate_rejects_blank_option_key() {
        let mut config = PricingConfig::default();
        config.options.push(OptionDescriptor {
            key: "  ".to_string(),
            label: "無名".to_string(),
            unit_price: 1000,
            forced_single: false,
        });

        assert_eq!(config.validate(), Err(PricingConfigError::BlankOptionKey));
    }

    #[test]
    fn validate_rejects_second_forced_single() {
        let mut config = PricingConfig::default();
        config.options.push(OptionDescriptor {
            key: "other".to_string(),
            label: "その他割引".to_string(),
            unit_price: -1000,
            forced_single: true,
        });

        assert_eq!(
            config.validate(),
            Err(PricingConfigError::MultipleForcedSingle(2))
        );
    }

    #[test]
    fn percent_range_exclusive_by_default() {
        let config = PricingConfig::default();

        assert!(!config.percent_in_range(0));
        assert!(config.percent_in_range(1));
        assert!(config.percent_in_range(99));
        assert!(!config.percent_in_range(100));
        assert!(!config.percent_in_range(-10));
    }

    #[test]
    fn percent_range_inclusive_upper_bound_accepts_100() {
        let mut config = PricingConfig::default();
        config.percent_upper_inclusive = true;

        assert!(config.percent_in_range(100));
        assert!(!config.percent_in_range(101));
        assert!(!config.percent_in_range(0));
    }
}
