//! 会话状态

/// 会话状态，三者互斥
#[derive(Debug, Default)]
pub enum SessionState {
    /// 表格
    #[default]
    List,
    /// 输入表单，`active` 为当前输入框索引
    Input { active: usize },
    /// 错误页，`width` 为折行宽度
    Error { error: anyhow::Error, width: u16 },
}

impl SessionState {
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}
