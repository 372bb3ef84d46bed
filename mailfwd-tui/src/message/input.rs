//! 输入表单消息

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMessage {
    /// 循环切换到下一个输入框
    NextField,
    /// 提交
    Confirm,
    /// 返回列表，保留已输入内容
    Cancel,
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}
