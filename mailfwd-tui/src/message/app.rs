//! 主消息

use super::{InputMessage, ListMessage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,
    /// 终端窗口大小变化
    Resize { width: u16, height: u16 },
    /// 列表状态子消息
    List(ListMessage),
    /// 输入表单子消息
    Input(InputMessage),
    /// 关闭错误页，返回列表
    DismissError,
    /// 无操作
    Noop,
}
