//! 转发规则表格

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::App;

use super::hint_line;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("n", "new random"),
    ("a", "add"),
    ("c", "copy"),
    ("d", "delete"),
    ("esc", "focus"),
    ("q", "quit"),
];

/// 渲染表格页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let rows: Vec<Row> = app
        .table
        .rows()
        .iter()
        .map(|row| Row::new(vec![row.source.clone(), row.destination.clone()]))
        .collect();

    let focused = app.table.is_focused();
    let highlight = if focused {
        theme.selected()
    } else {
        theme.selected_unfocused()
    };

    let table = Table::new(
        rows,
        [Constraint::Percentage(50), Constraint::Percentage(50)],
    )
    .header(Row::new(vec!["From", "To"]).style(theme.header()))
    .block(
        Block::default()
            .title(format!(" {} ", app.backend.domain()))
            .borders(Borders::TOP)
            .border_style(theme.border(focused)),
    )
    .row_highlight_style(highlight);

    let mut state = TableState::default();
    if !app.table.rows().is_empty() {
        state.select(Some(app.table.selected()));
    }
    frame.render_stateful_widget(table, chunks[0], &mut state);

    frame.render_widget(Paragraph::new(hint_line(theme, HINTS)), chunks[1]);
}
