//! 转发规则表格状态

use crate::message::TableNav;

/// 表格的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRow {
    pub source: String,
    pub destination: String,
}

/// 表格状态：行、光标、焦点
///
/// 只有获得焦点时导航键才会移动光标。
#[derive(Debug)]
pub struct ForwardTable {
    rows: Vec<ForwardRow>,
    selected: usize,
    focused: bool,
    page_size: usize,
}

impl Default for ForwardTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardTable {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            focused: true,
            page_size: 1,
        }
    }

    pub fn rows(&self) -> &[ForwardRow] {
        &self.rows
    }

    /// 整体替换行，光标夹在有效范围内
    pub fn set_rows(&mut self, rows: Vec<ForwardRow>) {
        self.rows = rows;
        self.selected = self.selected.min(self.rows.len().saturating_sub(1));
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_row(&self) -> Option<&ForwardRow> {
        self.rows.get(self.selected)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn toggle_focus(&mut self) {
        self.focused = !self.focused;
    }

    pub fn goto_top(&mut self) {
        self.selected = 0;
    }

    /// 可见行数（PageUp / PageDown 的步长）
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn navigate(&mut self, nav: TableNav) {
        if !self.focused || self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = match nav {
            TableNav::Up => self.selected.saturating_sub(1),
            TableNav::Down => (self.selected + 1).min(last),
            TableNav::PageUp => self.selected.saturating_sub(self.page_size),
            TableNav::PageDown => (self.selected + self.page_size).min(last),
            TableNav::Top => 0,
            TableNav::Bottom => last,
        };
    }
}
