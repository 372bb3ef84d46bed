//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁，
//! 把形形色色的按键翻译成 Update 能够看懂的 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // AppMessage 主消息
//!         mod list;       // 列表状态下的子消息
//!         mod input;      // 输入表单的子消息
//!
//!
//!     AppMessage 只在对应状态下才会被 Update 消费：
//!         List(..)        仅在 List 状态
//!         Input(..)       仅在 Input 状态
//!         DismissError    仅在 Error 状态
//!         Resize / Quit   任何状态
//!

mod app;
mod input;
mod list;

pub use app::AppMessage;
pub use input::InputMessage;
pub use list::{ListMessage, TableNav};
