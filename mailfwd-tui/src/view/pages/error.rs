//! 错误页

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::wrap::wrap_text;

use super::hint_line;

const HINTS: &[(&str, &str)] = &[("any key", "back"), ("q", "quit")];

/// 渲染折行后的错误信息
pub fn render(app: &App, error: &anyhow::Error, width: u16, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let mut lines: Vec<Line> = wrap_text(&format!("{error:#}"), width)
        .into_iter()
        .map(|line| Line::styled(line, theme.error()))
        .collect();
    lines.push(Line::from(""));
    lines.push(hint_line(theme, HINTS));

    frame.render_widget(Paragraph::new(lines), area);
}
