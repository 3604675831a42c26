//! Submission summary text: the plain-text order recap handed to the
//! clipboard before the messaging-app deep link, and used as the POST
//! body's summary field.

use crate::calculations::common::{format_jpy, is_blank};
use crate::models::{EstimateResult, FieldSnapshot};

/// Builds the order summary from the last computed estimate plus the
/// non-priced metadata (payment method, remarks).
pub fn build_order_summary(
    result: &EstimateResult,
    snapshot: &FieldSnapshot,
) -> String {
    let mut text = String::from("【リーディングお申し込み内容】\n\n");

    for line in &result.lines {
        text.push_str(&format!("{}  {}\n", line.label, format_jpy(line.amount)));
    }

    text.push_str("\n--------------------------------\n");
    text.push_str(&format!("合計金額: {}\n", format_jpy(result.total)));
    text.push_str("--------------------------------\n\n");

    let payment = if is_blank(&snapshot.payment_method) {
        "未選択"
    } else {
        snapshot.payment_method.trim()
    };
    text.push_str(&format!("お支払い方法: {payment}\n"));

    let remarks = snapshot.remarks.trim();
    if !remarks.is_empty() {
        text.push_str(&format!("備考:\n{remarks}\n"));
    }

    text.push_str("\n上記の内容で申し込みます。");
    text
}
