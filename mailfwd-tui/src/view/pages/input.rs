//! 新建规则表单

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, InputForm, TextInput};

use super::hint_line;

const HINTS: &[(&str, &str)] = &[
    ("tab", "next field"),
    ("enter", "create"),
    ("esc", "back"),
];

const PROMPT: &str = "> ";

/// 渲染输入表单：local part 在上，目标地址在下
pub fn render(app: &App, active: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    for index in 0..InputForm::FIELD_COUNT {
        let field = app.form.field(index);
        let suffix = if index == InputForm::LOCAL_PART {
            format!("@{}", app.backend.domain())
        } else {
            String::new()
        };
        frame.render_widget(Paragraph::new(field_line(app, field, suffix)), chunks[index]);

        if index == active && field.is_focused() {
            let before: String = field.value().chars().take(field.cursor()).collect();
            let offset = u16::try_from(PROMPT.width() + before.width()).unwrap_or(u16::MAX);
            frame.set_cursor_position(Position::new(
                chunks[index].x.saturating_add(offset),
                chunks[index].y,
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(hint_line(app.theme, HINTS)),
        chunks[InputForm::FIELD_COUNT + 1],
    );
}

fn field_line(app: &App, field: &TextInput, suffix: String) -> Line<'static> {
    let theme = app.theme;
    let mut spans = vec![Span::styled(PROMPT, field.style())];
    if field.is_empty() {
        spans.push(Span::styled(field.placeholder.clone(), theme.placeholder()));
    } else {
        spans.push(Span::styled(field.value(), field.style()));
    }
    if !suffix.is_empty() {
        spans.push(Span::styled(suffix, theme.placeholder()));
    }
    Line::from(spans)
}
