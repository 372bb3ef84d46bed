//! 页面渲染

pub mod error;
pub mod input;
pub mod list;

use ratatui::text::{Line, Span};

use super::theme::Theme;

/// 底部快捷键提示行
pub(super) fn hint_line(theme: Theme, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", theme.hint_desc()));
        }
        spans.push(Span::styled(*key, theme.hint_key()));
        spans.push(Span::styled(format!(" {desc}"), theme.hint_desc()));
    }
    Line::from(spans)
}
