//! Provider 记录 → 表格行

use mailfwd_provider::ForwardingRule;

use super::ForwardRow;

/// 保持 Provider 返回的顺序，列顺序固定为（源地址，目标地址）
pub fn rows_from(rules: &[ForwardingRule]) -> Vec<ForwardRow> {
    rules
        .iter()
        .map(|rule| ForwardRow {
            source: rule.from.clone(),
            destination: rule.to.clone(),
        })
        .collect()
}
