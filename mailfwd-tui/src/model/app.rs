//! 应用主状态

use anyhow::{Context, Result};
use mailfwd_provider::ForwardingRule;

use crate::backend::{Clipboard, ForwardService};
use crate::view::theme::Theme;

use super::{rows_from, ForwardTable, InputForm, SessionState};

/// 表格外的固定行数：顶部留白、标题线、表头、底部提示
const TABLE_CHROME_HEIGHT: u16 = 4;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前会话状态
    pub state: SessionState,

    /// 转发规则表格
    pub table: ForwardTable,

    /// 新建规则表单（取消后内容保留）
    pub form: InputForm,

    /// 远端服务
    pub backend: ForwardService,

    pub clipboard: Box<dyn Clipboard>,

    /// 本次会话的配色
    pub theme: Theme,

    /// 终端尺寸
    pub width: u16,
    pub height: u16,
}

impl App {
    /// 创建应用实例，首次拉取规则列表失败则直接返回错误
    pub fn new(
        backend: ForwardService,
        clipboard: Box<dyn Clipboard>,
        theme: Theme,
        width: u16,
        height: u16,
    ) -> Result<Self> {
        let rules = backend
            .list()
            .context("failed to load forwarding rules")?;
        log::info!(
            "Loaded {} forwarding rule(s) for {}",
            rules.len(),
            backend.domain()
        );

        let mut app = Self {
            should_quit: false,
            state: SessionState::List,
            table: ForwardTable::new(),
            form: InputForm::new(backend.default_email()),
            backend,
            clipboard,
            theme,
            width,
            height,
        };
        app.resize(width, height);
        app.show_rules(&rules);
        Ok(app)
    }

    pub fn default_email(&self) -> &str {
        self.backend.default_email()
    }

    /// 用最新的规则列表重建表格，光标回到顶部
    pub fn show_rules(&mut self, rules: &[ForwardingRule]) {
        self.table.set_rows(rows_from(rules));
        self.table.goto_top();
    }

    /// 进入错误页
    pub fn fail(&mut self, error: impl Into<anyhow::Error>) {
        let error = error.into();
        log::warn!("{error:#}");
        self.state = SessionState::Error {
            error,
            width: self.width,
        };
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.table
            .set_page_size(usize::from(height.saturating_sub(TABLE_CHROME_HEIGHT)));
        if let SessionState::Error { width: w, .. } = &mut self.state {
            *w = width;
        }
    }
}
