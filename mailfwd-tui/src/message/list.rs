//! 列表状态消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    /// 切换表格焦点
    ToggleFocus,
    /// 以随机 local part 创建指向默认地址的规则
    CreateRandom,
    /// 复制选中行的目标地址
    Copy,
    /// 打开输入表单
    Add,
    /// 删除选中行
    Delete,
    /// 表格导航
    Navigate(TableNav),
}

/// 表格光标移动
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableNav {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}
