mod estimate;
mod line_item;
mod pricing_config;
mod snapshot;

pub use estimate::EstimateResult;
pub use line_item::{LineItem, LineKind};
pub use pricing_config::{OptionDescriptor, PricingConfig, PricingConfigError, QuestionPricing};
pub use snapshot::{CouponChoice, FieldSnapshot, QuestionCategory, QuestionEntry, RelatedParty};
